pub mod generation;
pub mod importer;
pub mod notification_store;
pub mod notifier;
pub mod product_store;

pub use importer::ImportReport;
pub use notification_store::{NotificationState, NotificationStore};
pub use notifier::{CampaignStatus, ImportMethod, Notifier};
pub use product_store::{ProductState, ProductStore};
