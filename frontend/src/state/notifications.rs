use leptos::*;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    pub fn alert_class(&self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
}

/// Anything that can put a message in front of the user.
pub trait Notifier {
    fn notify(&self, message: String, severity: Severity);
}

#[derive(Clone, Copy)]
pub struct NotificationCenter {
    items: RwSignal<Vec<Notification>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
        }
    }

    pub fn items(&self) -> Signal<Vec<Notification>> {
        self.items.into()
    }

    /// Newest first, like alerts prepended to the page container.
    pub fn push(&self, message: impl Into<String>, severity: Severity) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
        };
        let id = notification.id;
        self.items.update(|items| items.insert(0, notification));
        id
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: Uuid) {
        let center = *self;
        gloo_timers::callback::Timeout::new(crate::config::ALERT_DISMISS_MS, move || {
            center.dismiss(id)
        })
        .forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: Uuid) {}
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, message: String, severity: Severity) {
        match severity {
            Severity::Error => log::warn!("{}", message),
            _ => log::info!("{}", message),
        }
        let id = self.push(message, severity);
        self.schedule_dismiss(id);
    }
}

pub fn provide_notifications() -> NotificationCenter {
    let center = NotificationCenter::new();
    provide_context(center);
    center
}

pub fn use_notifications() -> NotificationCenter {
    expect_context::<NotificationCenter>()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn newest_notification_comes_first() {
        with_runtime(|| {
            let center = NotificationCenter::new();
            center.notify("first".into(), Severity::Info);
            center.notify("second".into(), Severity::Error);

            let messages: Vec<_> = center
                .items()
                .get_untracked()
                .into_iter()
                .map(|n| (n.message, n.severity))
                .collect();
            assert_eq!(
                messages,
                vec![
                    ("second".to_string(), Severity::Error),
                    ("first".to_string(), Severity::Info)
                ]
            );
        });
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        with_runtime(|| {
            let center = NotificationCenter::new();
            let keep = center.push("keep", Severity::Success);
            let drop_id = center.push("drop", Severity::Warning);

            center.dismiss(drop_id);

            let items = center.items().get_untracked();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].id, keep);
        });
    }

    #[test]
    fn alert_class_follows_severity() {
        assert!(Severity::Error.alert_class().contains("alert-error"));
        assert!(Severity::Success.alert_class().starts_with("alert alert-success"));
    }
}
