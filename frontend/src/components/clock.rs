use leptos::*;

use crate::utils::time::{clock_strings, now_in_app_tz};

#[component]
pub fn CurrentTime() -> impl IntoView {
    let (time, set_time) = create_signal(now_in_app_tz());

    // Ticking lives only in the browser; the interval is cancelled when the
    // component is unmounted.
    #[cfg(target_arch = "wasm32")]
    {
        let interval = gloo_timers::callback::Interval::new(crate::config::CLOCK_TICK_MS, move || {
            set_time.set(now_in_app_tz());
        });
        on_cleanup(move || drop(interval));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_time;

    let strings = move || clock_strings(&time.get());

    view! {
        <div class="current-time text-center">
            <div id="currentTime" class="fs-3 fw-bold font-monospace">{move || strings().0}</div>
            <div id="currentDate" class="text-muted">{move || strings().1}</div>
        </div>
    }
}
