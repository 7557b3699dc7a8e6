use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Facebook,
    Instagram,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Youtube, Platform::Facebook, Platform::Instagram];

    pub fn label(self) -> &'static str {
        match self {
            Platform::Youtube => "YouTube",
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "youtube" => Ok(Platform::Youtube),
            "facebook" => Ok(Platform::Facebook),
            "instagram" => Ok(Platform::Instagram),
            other => Err(format!("unknown platform: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    pub post: String,
    pub image_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoScript {
    pub script: String,
    pub thumbnail_description: String,
}

/// Generated copy, one section per requested platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<SocialPost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<SocialPost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<VideoScript>,
}

impl CampaignContent {
    pub fn has(&self, platform: Platform) -> bool {
        match platform {
            Platform::Facebook => self.facebook.is_some(),
            Platform::Instagram => self.instagram.is_some(),
            Platform::Youtube => self.youtube.is_some(),
        }
    }
}

/// Ephemeral progress of the mocked generation pipeline. Owned by the
/// product store state, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationProgress {
    pub step: u32,
    pub total_steps: u32,
    pub current_task: String,
    pub is_complete: bool,
}
