//! ContentGenerator tests: fallback substitution, trimming, and image
//! attachment rules. Mock backends only — no network, no API keys.

use std::sync::Arc;

use ai_client::ImagePayload;
use tavern_bot::fallback::fallback_texts;
use tavern_bot::testing::{MockImageModel, MockTextModel};
use tavern_bot::{ContentGenerator, ImageAcquirer};
use tavern_common::{GeneratedImage, PostKind};

fn generator(
    text: Arc<MockTextModel>,
    image: Arc<MockImageModel>,
    images_enabled: bool,
) -> ContentGenerator {
    let acquirer = ImageAcquirer::new(image, "1024x1024", "high");
    ContentGenerator::new(text, acquirer, images_enabled)
}

// ---------------------------------------------------------------------------
// Text path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn trims_surrounding_whitespace() {
    let text = Arc::new(MockTextModel::replying("  Great work today!  "));
    let image = Arc::new(MockImageModel::failing());
    let post = generator(text.clone(), image, true)
        .generate(PostKind::Motivation)
        .await;

    assert_eq!(post.text, "Great work today!");
    assert_eq!(text.call_count(), 1);
}

#[tokio::test]
async fn empty_response_falls_back() {
    let text = Arc::new(MockTextModel::replying("   \n  "));
    let image = Arc::new(MockImageModel::failing());
    let post = generator(text, image, true)
        .generate(PostKind::Fact)
        .await;

    assert!(fallback_texts(PostKind::Fact).contains(&post.text.as_str()));
}

#[tokio::test]
async fn backend_failure_falls_back_per_kind() {
    for kind in PostKind::ALL {
        let text = Arc::new(MockTextModel::failing());
        let image = Arc::new(MockImageModel::failing());
        let post = generator(text, image, true).generate(kind).await;

        assert!(!post.text.trim().is_empty(), "{kind} produced empty text");
        assert!(
            fallback_texts(kind).contains(&post.text.as_str()),
            "{kind} fallback came from the wrong pool"
        );
    }
}

#[tokio::test]
async fn never_returns_empty_text() {
    for kind in PostKind::ALL {
        let text = Arc::new(MockTextModel::replying("A perfectly fine post."));
        let image = Arc::new(MockImageModel::failing());
        let post = generator(text, image, true).generate(kind).await;
        assert!(!post.text.is_empty());
    }
}

// ---------------------------------------------------------------------------
// Image attachment
// ---------------------------------------------------------------------------

#[tokio::test]
async fn humor_never_requests_an_image() {
    let text = Arc::new(MockTextModel::replying("A joke."));
    let image = Arc::new(MockImageModel::with_payload(ImagePayload {
        url: Some("https://img.example/1.png".to_string()),
        b64_json: None,
    }));
    let post = generator(text, image.clone(), true)
        .generate(PostKind::Humor)
        .await;

    assert!(post.image.is_none());
    assert_eq!(image.call_count(), 0);
}

#[tokio::test]
async fn image_failure_keeps_the_post_text_only() {
    let text = Arc::new(MockTextModel::replying("Morning wisdom."));
    let image = Arc::new(MockImageModel::failing());
    let post = generator(text, image.clone(), true)
        .generate(PostKind::Motivation)
        .await;

    assert_eq!(post.text, "Morning wisdom.");
    assert!(post.image.is_none());
    assert_eq!(image.call_count(), 1);
}

#[tokio::test]
async fn disabled_images_skip_the_image_call() {
    let text = Arc::new(MockTextModel::replying("Morning wisdom."));
    let image = Arc::new(MockImageModel::with_payload(ImagePayload {
        url: Some("https://img.example/1.png".to_string()),
        b64_json: None,
    }));
    let post = generator(text, image.clone(), false)
        .generate(PostKind::Motivation)
        .await;

    assert!(post.image.is_none());
    assert_eq!(image.call_count(), 0);
}

#[tokio::test]
async fn url_descriptor_is_attached_as_remote_reference() {
    let text = Arc::new(MockTextModel::replying("Morning wisdom."));
    let image = Arc::new(MockImageModel::with_payload(ImagePayload {
        url: Some("https://img.example/sunrise.png".to_string()),
        b64_json: None,
    }));
    let post = generator(text, image, true)
        .generate(PostKind::Motivation)
        .await;

    assert_eq!(
        post.image,
        Some(GeneratedImage::RemoteReference {
            url: "https://img.example/sunrise.png".to_string()
        })
    );
}
