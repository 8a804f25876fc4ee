#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod fakes {
    use crate::{
        state::notifications::{Notifier, Severity},
        utils::{reload::PageReloader, storage::KeyValueStore},
    };
    use std::{cell::RefCell, collections::HashMap, time::Duration};

    #[derive(Default)]
    pub struct RecordingNotifier {
        seen: RefCell<Vec<(String, Severity)>>,
    }

    impl RecordingNotifier {
        pub fn messages(&self) -> Vec<(String, Severity)> {
            self.seen.borrow().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: String, severity: Severity) {
            self.seen.borrow_mut().push((message, severity));
        }
    }

    #[derive(Default)]
    pub struct RecordingReloader {
        delays: RefCell<Vec<Duration>>,
    }

    impl RecordingReloader {
        pub fn delays(&self) -> Vec<Duration> {
            self.delays.borrow().clone()
        }
    }

    impl PageReloader for RecordingReloader {
        fn schedule_reload(&self, delay: Duration) {
            self.delays.borrow_mut().push(delay);
        }
    }

    #[derive(Default)]
    pub struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        pub fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            store
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
