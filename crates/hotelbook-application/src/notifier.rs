//! In-memory [`Notifier`].

use hotelbook_core::notification::{Notice, Notifier};
use std::sync::Mutex;

/// Keeps every notice in memory, in order.
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.lock().clone()
    }

    /// Returns and forgets the collected notices.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.lock())
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock()
            .iter()
            .map(|notice| notice.message.clone())
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notice>> {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&self, notice: Notice) {
        self.lock().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_notifier_drains() {
        let notifier = CollectingNotifier::new();
        notifier.notify(Notice::success("ok"));
        notifier.notify(Notice::validation("bad"));

        assert_eq!(notifier.messages(), vec!["ok", "bad"]);
        assert_eq!(notifier.drain().len(), 2);
        assert!(notifier.notices().is_empty());
    }
}
