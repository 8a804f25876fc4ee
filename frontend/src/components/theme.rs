use leptos::*;

use crate::state::theme::use_theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let current = theme.current();
    let label = move || {
        if current.get().is_dark() {
            "Light mode"
        } else {
            "Dark mode"
        }
    };

    view! {
        <button
            type="button"
            class="btn btn-outline-secondary btn-sm"
            aria-pressed=move || current.get().is_dark().to_string()
            on:click=move |_| theme.toggle()
        >
            {label}
        </button>
    }
}
