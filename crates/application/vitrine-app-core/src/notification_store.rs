use std::sync::{Arc, Mutex};

use chrono::Utc;
use rand::Rng;

use vitrine_core::{
    Notification, NotificationDraft, NotificationKind, NotificationSettings, SettingsPatch,
};

/// Snapshot of the feed plus delivery preferences.
///
/// Invariant: `unread_count` equals the number of entries with
/// `is_read == false`, after every public operation.
#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    /// Most-recent-first.
    pub notifications: Vec<Notification>,
    pub settings: NotificationSettings,
    pub unread_count: usize,
}

/// In-memory feed with read/unread bookkeeping. Independent of the
/// network; producers anywhere in the application push into it.
#[derive(Clone, Default)]
pub struct NotificationStore {
    inner: Arc<Mutex<NotificationState>>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NotificationState {
        self.inner.lock().unwrap().clone()
    }

    pub fn unread_count(&self) -> usize {
        self.inner.lock().unwrap().unread_count
    }

    fn with_state_mut<R>(&self, f: impl FnOnce(&mut NotificationState) -> R) -> R {
        let mut guard = self.inner.lock().unwrap();
        f(&mut guard)
    }

    /// Assign a fresh id and timestamp, prepend to the feed, and
    /// count the entry as unread.
    pub fn add_notification(&self, draft: NotificationDraft) -> Notification {
        let notification = Notification {
            id: uuid::Uuid::new_v4().to_string(),
            title: draft.title,
            message: draft.message,
            kind: draft.kind,
            is_read: false,
            created_at: Utc::now(),
            action_url: draft.action_url,
            action_label: draft.action_label,
            data: draft.data,
        };

        self.with_state_mut(|s| {
            s.notifications.insert(0, notification.clone());
            s.unread_count += 1;
            debug_assert_eq!(
                s.notifications.first().map(|n| n.id.as_str()),
                Some(notification.id.as_str()),
                "feed must stay most-recent-first"
            );
        });
        notification
    }

    /// Forward-only transition; calling twice is the same as once.
    pub fn mark_as_read(&self, id: &str) {
        self.with_state_mut(|s| {
            if let Some(n) = s.notifications.iter_mut().find(|n| n.id == id) {
                if !n.is_read {
                    n.is_read = true;
                    s.unread_count = s.unread_count.saturating_sub(1);
                }
            }
        });
    }

    pub fn mark_all_as_read(&self) {
        self.with_state_mut(|s| {
            for n in &mut s.notifications {
                n.is_read = true;
            }
            s.unread_count = 0;
        });
    }

    /// No-op for unknown ids; the counter only moves when the removed
    /// entry was unread.
    pub fn delete_notification(&self, id: &str) {
        self.with_state_mut(|s| {
            if let Some(ix) = s.notifications.iter().position(|n| n.id == id) {
                let removed = s.notifications.remove(ix);
                if !removed.is_read {
                    s.unread_count = s.unread_count.saturating_sub(1);
                }
            }
        });
    }

    pub fn clear_all_notifications(&self) {
        self.with_state_mut(|s| {
            s.notifications.clear();
            s.unread_count = 0;
        });
    }

    /// Shallow-merge; any boolean may be set for any key.
    pub fn update_settings(&self, patch: SettingsPatch) {
        self.with_state_mut(|s| s.settings.merge(patch));
    }

    /// Demo helper: route one of the canned templates through
    /// [`NotificationStore::add_notification`].
    pub fn simulate_new_notifications(&self) -> Notification {
        let templates = [
            NotificationDraft::new(
                "New Product Added",
                "iPhone 15 Pro has been added to your catalog",
                NotificationKind::Success,
            )
            .with_action("/products", "View Product"),
            NotificationDraft::new(
                "Trend Alert",
                "MacBook Air is gaining popularity (+23%)",
                NotificationKind::Trend,
            )
            .with_action("/trends", "View Trends"),
            NotificationDraft::new(
                "Campaign Scheduled",
                "Black Friday campaign will start in 2 hours",
                NotificationKind::Campaign,
            )
            .with_action("/campaigns", "View Campaign"),
        ];

        let pick = rand::thread_rng().gen_range(0..templates.len());
        self.add_notification(templates[pick].clone())
    }
}
