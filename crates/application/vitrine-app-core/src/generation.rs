//! Mocked campaign generation. This is a timer-driven simulation of
//! a content pipeline, not a real backend: progress is published into
//! the product store step by step and the returned copy is canned,
//! templated with the product.

use std::time::Duration;

use tokio::time::sleep;

use vitrine_core::{
    CampaignContent, GenerationProgress, Platform, Product, SocialPost, VideoScript,
};

use crate::product_store::ProductStore;

/// Pause between simulated steps in interactive use.
pub const GENERATION_TICK: Duration = Duration::from_millis(1500);

/// Walk the pipeline for `product`: one analysis step, then one step
/// per requested platform, then a completed progress entry. Pass
/// `Duration::ZERO` as the tick to run instantly (tests).
pub async fn generate_campaign(
    store: &ProductStore,
    product: &Product,
    platforms: &[Platform],
    tick: Duration,
) -> CampaignContent {
    let total_steps = platforms.len() as u32 + 1;
    let mut content = CampaignContent::default();

    publish(store, 1, total_steps, "Analyzing product trends...", false);
    sleep(tick).await;

    for (ix, platform) in platforms.iter().enumerate() {
        let task = match platform {
            Platform::Facebook => "Generating Facebook content...",
            Platform::Instagram => "Creating Instagram posts...",
            Platform::Youtube => "Writing YouTube script...",
        };
        publish(store, ix as u32 + 2, total_steps, task, false);
        fill(&mut content, *platform, product);
        sleep(tick).await;
    }

    publish(store, total_steps, total_steps, "Generation complete!", true);
    content
}

/// Re-run a single platform, reusing the original four-step progress
/// shape the dashboard renders.
pub async fn regenerate_platform(
    store: &ProductStore,
    product: &Product,
    platform: Platform,
    tick: Duration,
) -> CampaignContent {
    publish(
        store,
        2,
        4,
        &format!("Regenerating {} content...", platform.label()),
        false,
    );
    sleep(tick).await;

    let mut content = CampaignContent::default();
    fill(&mut content, platform, product);
    publish(store, 4, 4, "Regeneration complete!", true);
    content
}

fn publish(store: &ProductStore, step: u32, total_steps: u32, task: &str, complete: bool) {
    store.set_generation_progress(Some(GenerationProgress {
        step,
        total_steps,
        current_task: task.to_string(),
        is_complete: complete,
    }));
}

fn fill(content: &mut CampaignContent, platform: Platform, product: &Product) {
    match platform {
        Platform::Facebook => content.facebook = Some(facebook_post(product)),
        Platform::Instagram => content.instagram = Some(instagram_post(product)),
        Platform::Youtube => content.youtube = Some(youtube_script(product)),
    }
}

fn facebook_post(product: &Product) -> SocialPost {
    SocialPost {
        post: format!(
            "Experience something new with {name}!\n\n{description}\n\nPerfect for every day. \
             Your routine deserves an upgrade.\n\n#LifestyleUpgrade #NewArrival",
            name = product.name,
            description = product.description,
        ),
        image_description: format!(
            "Modern lifestyle shot of {} on a clean desk with soft natural lighting",
            product.name
        ),
    }
}

fn instagram_post(product: &Product) -> SocialPost {
    SocialPost {
        post: format!(
            "Made for your day.\n\n{name} is here! {description}\n\nReady to upgrade? \
             Link in bio!\n\n#NewDrop #MustHave",
            name = product.name,
            description = product.description,
        ),
        image_description: format!(
            "Instagram-style flat lay with {} and lifestyle accessories in aesthetic arrangement",
            product.name
        ),
    }
}

fn youtube_script(product: &Product) -> VideoScript {
    VideoScript {
        script: format!(
            "Meet {name} - the upgrade you've been waiting for. {description} \
             Whether you're at home, at work, or on the move, it fits right in. \
             Don't settle for average. Try {name} today!",
            name = product.name,
            description = product.description,
        ),
        thumbnail_description: format!(
            "Split screen: everyday clutter on the left, {} front and center on the right",
            product.name
        ),
    }
}
