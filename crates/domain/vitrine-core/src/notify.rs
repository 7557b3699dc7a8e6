use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type NotificationId = String;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
    Trend,
    Campaign,
}

/// A transient user-facing event in the feed.
///
/// The read flag only moves forward: an entry starts unread, may
/// become read, and is eventually deleted. There is no way back to
/// unread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Producer-side input to the feed. The store assigns the id and
/// timestamp; new entries are always unread.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub action_url: Option<String>,
    pub action_label: Option<String>,
    pub data: Option<serde_json::Value>,
}

impl NotificationDraft {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
            action_url: None,
            action_label: None,
            data: None,
        }
    }

    pub fn with_action(mut self, url: impl Into<String>, label: impl Into<String>) -> Self {
        self.action_url = Some(url.into());
        self.action_label = Some(label.into());
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Delivery preferences. Whole-object replace-on-update; any boolean
/// may be set for any key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub trend_alerts: bool,
    pub campaign_updates: bool,
    pub product_updates: bool,
    pub system_updates: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            trend_alerts: true,
            campaign_updates: true,
            product_updates: true,
            system_updates: false,
        }
    }
}

impl NotificationSettings {
    /// Shallow-merge: only the keys present in the patch change.
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(v) = patch.email_notifications {
            self.email_notifications = v;
        }
        if let Some(v) = patch.push_notifications {
            self.push_notifications = v;
        }
        if let Some(v) = patch.trend_alerts {
            self.trend_alerts = v;
        }
        if let Some(v) = patch.campaign_updates {
            self.campaign_updates = v;
        }
        if let Some(v) = patch.product_updates {
            self.product_updates = v;
        }
        if let Some(v) = patch.system_updates {
            self.system_updates = v;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub email_notifications: Option<bool>,
    pub push_notifications: Option<bool>,
    pub trend_alerts: Option<bool>,
    pub campaign_updates: Option<bool>,
    pub product_updates: Option<bool>,
    pub system_updates: Option<bool>,
}
