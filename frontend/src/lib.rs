use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use std::rc::Rc;

pub mod api;
mod components;
pub mod config;
mod pages;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use api::ApiClient;
use components::{alerts::AlertContainer, theme::ThemeToggle};
use pages::{
    account::AccountPage, admin_attendance::AdminAttendancePage, attendance::AttendancePage,
    leave_requests::LeaveDecisionPage,
};
use state::{
    actions::{provide_action_controller, ActionController},
    notifications::provide_notifications,
    theme::provide_theme,
};
use utils::reload::BrowserReloader;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }
    log::info!("Starting Dayflow frontend (wasm)");

    // window.__DAYFLOW_ENV wins over ./config.json when both are present.
    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
    });

    mount_to_body(App);
}

/// Root view. One notification center and one action controller serve every
/// page, so a single in-flight request blocks all action buttons.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let center = provide_notifications();
    provide_theme();
    provide_action_controller(ActionController::new(
        ApiClient::new(),
        Rc::new(center),
        Rc::new(BrowserReloader),
    ));

    view! {
        <Title text="Dayflow" />
        <Router>
            <nav class="navbar px-3 d-flex justify-content-between">
                <div class="d-flex gap-3">
                    <A href="/employee/attendance">"Attendance"</A>
                    <A href="/admin/attendance">"Manage Attendance"</A>
                    <A href="/account">"Account"</A>
                </div>
                <ThemeToggle />
            </nav>
            <AlertContainer />
            <main class="container py-3">
                <Routes>
                    <Route path="/" view=AttendancePage />
                    <Route path="/employee/attendance" view=AttendancePage />
                    <Route path="/admin/attendance" view=AdminAttendancePage />
                    <Route path="/admin/leave_requests/:id" view=LeaveDecisionPage />
                    <Route path="/account" view=AccountPage />
                </Routes>
            </main>
        </Router>
    }
}
