use leptos::*;

use crate::{
    components::clock::CurrentTime,
    state::actions::{dispatch, use_action_controller},
};

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! {
        <div class="card fade-in">
            <div class="card-header">"Today's Attendance"</div>
            <div class="card-body space-y-3">
                <CurrentTime />
                <AttendanceActions />
            </div>
        </div>
    }
}

#[component]
pub fn AttendanceActions() -> impl IntoView {
    let controller = use_action_controller();
    let for_check_in = controller.clone();
    let for_check_out = controller;

    view! {
        <div class="d-flex gap-2 justify-content-center">
            <button
                type="button"
                class="btn btn-success"
                on:click=move |_| dispatch(&for_check_in, |c| async move { c.check_in().await })
            >
                "Check In"
            </button>
            <button
                type="button"
                class="btn btn-warning"
                on:click=move |_| dispatch(&for_check_out, |c| async move { c.check_out().await })
            >
                "Check Out"
            </button>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_with_app_context;

    #[test]
    fn renders_both_attendance_buttons_and_clock() {
        let html = render_with_app_context(|_| view! { <AttendancePage /> });
        assert!(html.contains("Check In"));
        assert!(html.contains("Check Out"));
        assert!(html.contains("currentTime"));
    }
}
