use leptos::*;

use crate::state::notifications::{use_notifications, Notification};

#[component]
pub fn AlertContainer() -> impl IntoView {
    let center = use_notifications();
    let items = center.items();

    view! {
        <div id="alertContainer" class="alert-container">
            <For
                each=move || items.get()
                key=|n: &Notification| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=n.severity.alert_class() role="alert">
                            {n.message}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| center.dismiss(id)
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
