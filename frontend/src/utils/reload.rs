use std::time::Duration;

pub trait PageReloader {
    fn schedule_reload(&self, delay: Duration);
}

/// Reloads the current document once the delay has elapsed.
#[derive(Clone, Copy, Default)]
pub struct BrowserReloader;

impl PageReloader for BrowserReloader {
    #[cfg(target_arch = "wasm32")]
    fn schedule_reload(&self, delay: Duration) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, || {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.location().reload() {
                    log::error!("Page reload failed: {:?}", err);
                }
            }
        })
        .forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_reload(&self, delay: Duration) {
        log::debug!("Page reload requested in {:?} outside the browser", delay);
    }
}
