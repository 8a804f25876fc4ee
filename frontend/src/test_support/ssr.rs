use leptos::*;
use std::rc::Rc;

use crate::{
    api::ApiClient,
    state::{
        actions::{provide_action_controller, ActionController},
        notifications::{provide_notifications, NotificationCenter},
    },
    test_support::fakes::RecordingReloader,
};

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders `view` with the page-wide contexts the action widgets expect.
/// The controller points at an address nothing listens on.
pub fn render_with_app_context<F, N>(view: F) -> String
where
    F: FnOnce(NotificationCenter) -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        let center = provide_notifications();
        provide_action_controller(ActionController::new(
            ApiClient::new_with_base_url("http://127.0.0.1:9"),
            Rc::new(center),
            Rc::new(RecordingReloader::default()),
        ));
        view(center)
    })
}
