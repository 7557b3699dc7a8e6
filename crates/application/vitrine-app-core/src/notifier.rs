//! Producer-side helpers constructing well-formed domain
//! notifications for the feed.

use serde_json::json;

use vitrine_core::{Notification, NotificationDraft, NotificationKind};

use crate::notification_store::NotificationStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMethod {
    Manual,
    Csv,
    Url,
}

impl ImportMethod {
    fn label(self) -> &'static str {
        match self {
            ImportMethod::Manual => "manually",
            ImportMethod::Csv => "from CSV",
            ImportMethod::Url => "from URL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignStatus {
    Scheduled,
    Published,
    Completed,
}

impl CampaignStatus {
    fn phrase(self) -> &'static str {
        match self {
            CampaignStatus::Scheduled => "has been scheduled",
            CampaignStatus::Published => "is now live",
            CampaignStatus::Completed => "has finished running",
        }
    }
}

#[derive(Clone)]
pub struct Notifier {
    store: NotificationStore,
}

impl Notifier {
    pub fn new(store: NotificationStore) -> Self {
        Self { store }
    }

    pub fn product_added(&self, product_name: &str, method: ImportMethod) -> Notification {
        self.store.add_notification(
            NotificationDraft::new(
                "Product Added Successfully",
                format!("\"{product_name}\" has been added {}", method.label()),
                NotificationKind::Success,
            )
            .with_action("/products", "View Products"),
        )
    }

    pub fn bulk_products_imported(&self, count: usize) -> Notification {
        self.store.add_notification(
            NotificationDraft::new(
                "Bulk Import Completed",
                format!("{count} products have been successfully imported"),
                NotificationKind::Success,
            )
            .with_action("/products", "View Products"),
        )
    }

    pub fn product_updated(&self, product_name: &str) -> Notification {
        self.store.add_notification(
            NotificationDraft::new(
                "Product Updated",
                format!("\"{product_name}\" has been updated successfully"),
                NotificationKind::Success,
            )
            .with_action("/products", "View Products"),
        )
    }

    pub fn trending_product(&self, product_name: &str, trend_score: u8) -> Notification {
        self.store.add_notification(
            NotificationDraft::new(
                "Trending Product Alert",
                format!("{product_name} is trending up {trend_score}% this week"),
                NotificationKind::Trend,
            )
            .with_action("/trends", "View Trends")
            .with_data(json!({
                "productName": product_name,
                "trendScore": trend_score,
            })),
        )
    }

    pub fn campaign_status_change(
        &self,
        campaign_name: &str,
        status: CampaignStatus,
    ) -> Notification {
        self.store.add_notification(
            NotificationDraft::new(
                "Campaign Update",
                format!("\"{campaign_name}\" {}", status.phrase()),
                NotificationKind::Campaign,
            )
            .with_action("/campaigns", "View Campaign"),
        )
    }

    pub fn error(&self, title: &str, message: &str) -> Notification {
        self.store
            .add_notification(NotificationDraft::new(title, message, NotificationKind::Error))
    }

    pub fn warning(&self, title: &str, message: &str) -> Notification {
        self.store.add_notification(NotificationDraft::new(
            title,
            message,
            NotificationKind::Warning,
        ))
    }

    pub fn info(&self, title: &str, message: &str) -> Notification {
        self.store
            .add_notification(NotificationDraft::new(title, message, NotificationKind::Info))
    }
}
