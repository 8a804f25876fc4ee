use leptos::*;
use std::rc::Rc;

use crate::utils::storage::{BrowserStorage, KeyValueStore};

pub const THEME_STORAGE_KEY: &str = "darkTheme";
pub const DARK_THEME_CLASS: &str = "dark-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Only the literal `"true"` turns dark mode on.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("true") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn stored_value(&self) -> &'static str {
        match self {
            Theme::Light => "false",
            Theme::Dark => "true",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[derive(Clone)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
    store: Rc<dyn KeyValueStore>,
}

impl ThemeState {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        let initial = Theme::from_stored(store.get(THEME_STORAGE_KEY).as_deref());
        Self {
            theme: create_rw_signal(initial),
            store,
        }
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        if let Err(err) = self.store.set(THEME_STORAGE_KEY, next.stored_value()) {
            log::warn!("Theme preference not saved: {}", err);
        }
        self.apply_to_dom();
    }

    #[cfg(target_arch = "wasm32")]
    fn apply_to_dom(&self) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let class_list = body.class_list();
        let result = if self.theme.get_untracked().is_dark() {
            class_list.add_1(DARK_THEME_CLASS)
        } else {
            class_list.remove_1(DARK_THEME_CLASS)
        };
        if result.is_err() {
            log::warn!("Could not update body theme class");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn apply_to_dom(&self) {
        log::trace!(
            "No document body to toggle `{}` on (dark: {})",
            DARK_THEME_CLASS,
            self.theme.get_untracked().is_dark()
        );
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }
}

pub fn use_theme() -> ThemeState {
    expect_context::<ThemeState>()
}

pub fn provide_theme() -> ThemeState {
    let state = ThemeState::new(Rc::new(BrowserStorage));
    provide_context(state.clone());
    state.apply_to_dom();
    state
}
