pub mod campaign;
pub mod csv;
pub mod notify;
pub mod product;
pub mod validate;

pub use campaign::{CampaignContent, GenerationProgress, Platform, SocialPost, VideoScript};
pub use notify::{
    Notification, NotificationDraft, NotificationId, NotificationKind, NotificationSettings,
    SettingsPatch,
};
pub use product::{NewProduct, Product, ProductId, ProductPatch, UpdateProduct};
