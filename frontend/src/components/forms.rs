use leptos::*;

use crate::utils::validation::{check_email, check_password_confirmation, PasswordStrength};

#[component]
pub fn PasswordStrengthIndicator(#[prop(into)] password: Signal<String>) -> impl IntoView {
    let strength = create_memo(move |_| PasswordStrength::of(&password.get()));

    view! {
        <small id="passwordStrength" class=move || strength.get().class()>
            {move || strength.get().label()}
        </small>
    }
}

#[component]
pub fn InvalidFeedback(#[prop(into)] error: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="invalid-feedback d-block">{move || error.get().unwrap_or_default()}</div>
        </Show>
    }
}

/// Mismatch message for a confirmation field, hidden until something is typed.
pub fn confirmation_error(password: &str, confirmation: &str) -> Option<&'static str> {
    if confirmation.is_empty() {
        return None;
    }
    check_password_confirmation(password, confirmation).err()
}

pub fn email_error(email: &str) -> Option<&'static str> {
    check_email(email).err()
}

pub fn field_class(error: Option<&'static str>, touched: bool) -> &'static str {
    match (error, touched) {
        (Some(_), _) => "form-control is-invalid",
        (None, true) => "form-control is-valid",
        (None, false) => "form-control",
    }
}

#[component]
pub fn SubmitButton(
    #[prop(into)] label: String,
    #[prop(into)] pending: Signal<bool>,
) -> impl IntoView {
    view! {
        <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
            <Show when=move || pending.get() fallback=move || label.clone()>
                <span class="loading-spinner me-2"></span>
                "Processing..."
            </Show>
        </button>
    }
}
