use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Delay between a successful guarded action and the full page reload.
pub const RELOAD_DELAY_MS: u32 = 1500;
/// Lifetime of an alert before it is dismissed automatically.
pub const ALERT_DISMISS_MS: u32 = 5000;
/// Refresh period of the header clock.
pub const CLOCK_TICK_MS: u32 = 1000;

const FALLBACK_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub time_zone: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static TIME_ZONE: OnceLock<Tz> = OnceLock::new();

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

fn cache_time_zone(name: Option<&str>) {
    let Some(name) = name else {
        return;
    };
    match parse_time_zone(name) {
        Some(tz) => {
            let _ = TIME_ZONE.set(tz);
        }
        None => log::warn!("Ignoring unknown time zone {:?}", name),
    }
}

pub fn parse_time_zone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}

pub fn current_time_zone() -> Tz {
    TIME_ZONE.get().copied().unwrap_or(Tz::UTC)
}

fn apply(cfg: &RuntimeConfig) -> Option<String> {
    cache_time_zone(cfg.time_zone.as_deref());
    cfg.api_base_url.as_deref().map(cache_base_url)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use anyhow::{anyhow, Context};

    fn read_key(obj: &js_sys::Object, key: &str) -> Option<String> {
        js_sys::Reflect::get(obj, &key.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    }

    // Optional global object: window.__DAYFLOW_ENV = { API_BASE_URL: "...", TIME_ZONE: "..." }
    pub fn snapshot_from_globals() -> Option<RuntimeConfig> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &"__DAYFLOW_ENV".into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        let api_base_url = read_key(&obj, "API_BASE_URL").or_else(|| read_key(&obj, "api_base_url"));
        let time_zone = read_key(&obj, "TIME_ZONE").or_else(|| read_key(&obj, "time_zone"));
        Some(RuntimeConfig {
            api_base_url,
            time_zone,
        })
    }

    pub async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
        let url = format!("{}/config.json", page_origin().ok_or_else(|| anyhow!("no window"))?);
        let resp = reqwest::get(&url).await.context("fetching config.json")?;
        if !resp.status().is_success() {
            return Err(anyhow!("config.json answered {}", resp.status()));
        }
        resp.json::<RuntimeConfig>()
            .await
            .context("parsing config.json")
    }

    pub fn page_origin() -> Option<String> {
        web_sys::window()?.location().origin().ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod browser {
    use super::RuntimeConfig;

    pub fn snapshot_from_globals() -> Option<RuntimeConfig> {
        None
    }

    pub async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
        anyhow::bail!("runtime config is only served to the browser build")
    }

    pub fn page_origin() -> Option<String> {
        None
    }
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(url) = browser::snapshot_from_globals().and_then(|cfg| apply(&cfg)) {
        return url;
    }
    match browser::fetch_runtime_config().await {
        Ok(cfg) => {
            if let Some(url) = apply(&cfg) {
                return url;
            }
        }
        Err(err) => log::debug!("No runtime config: {:#}", err),
    }
    let fallback = browser::page_origin().unwrap_or_else(|| FALLBACK_BASE_URL.to_string());
    cache_base_url(&fallback)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("Using API base {} ({})", base, current_time_zone());
}
