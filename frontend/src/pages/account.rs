use leptos::*;

use crate::components::forms::{
    confirmation_error, email_error, field_class, InvalidFeedback, PasswordStrengthIndicator,
    SubmitButton,
};

#[derive(Clone, Copy)]
pub struct AccountForm {
    email: RwSignal<String>,
    password: RwSignal<String>,
    confirmation: RwSignal<String>,
}

impl AccountForm {
    pub fn new() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            confirmation: create_rw_signal(String::new()),
        }
    }

    pub fn email_error(&self) -> Option<&'static str> {
        self.email.with(|email| email_error(email.trim()))
    }

    pub fn confirmation_error(&self) -> Option<&'static str> {
        let password = self.password.get();
        self.confirmation
            .with(|confirmation| confirmation_error(&password, confirmation))
    }

    /// Blocks submission while any field shows an error.
    pub fn is_submittable(&self) -> bool {
        self.email_error().is_none() && self.confirmation_error().is_none()
    }

    /// Marks the form as submitting when it may be sent. The flag is never
    /// cleared here: a native post replaces the page.
    pub fn begin_submit(&self, submitting: RwSignal<bool>) -> bool {
        if submitting.get_untracked() || !self.is_submittable() {
            return false;
        }
        submitting.set(true);
        true
    }
}

impl Default for AccountForm {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let form = AccountForm::new();
    let email_feedback = Signal::derive(move || form.email_error());
    let confirmation_feedback = Signal::derive(move || form.confirmation_error());
    let submitting = create_rw_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        if !form.begin_submit(submitting) {
            ev.prevent_default();
            log::debug!("Account form not sent: invalid fields or already sending");
        }
    };

    view! {
        <form class="card card-body needs-validation" method="post" action="/account" on:submit=on_submit>
            <h5 class="card-title">"Account"</h5>
            <label class="form-label" for="email">"Email"</label>
            <input
                id="email"
                name="email"
                type="email"
                class=move || field_class(email_feedback.get(), !form.email.get().is_empty())
                prop:value=move || form.email.get()
                on:input=move |ev| form.email.set(event_target_value(&ev))
            />
            <InvalidFeedback error=email_feedback />

            <label class="form-label" for="password">"New Password"</label>
            <input
                id="password"
                name="password"
                type="password"
                class="form-control"
                prop:value=move || form.password.get()
                on:input=move |ev| form.password.set(event_target_value(&ev))
            />
            <PasswordStrengthIndicator password=form.password />

            <label class="form-label" for="confirm_password">"Confirm Password"</label>
            <input
                id="confirm_password"
                name="confirm_password"
                type="password"
                class=move || {
                    field_class(confirmation_feedback.get(), !form.confirmation.get().is_empty())
                }
                prop:value=move || form.confirmation.get()
                on:input=move |ev| form.confirmation.set(event_target_value(&ev))
            />
            <InvalidFeedback error=confirmation_feedback />

            <div class="mt-3">
                <SubmitButton label="Save" pending=submitting />
            </div>
        </form>
    }
}
