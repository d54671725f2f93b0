//! Publisher tests: the per-publish state machine and its degrade-never-drop
//! policy, asserted through the transport's recorded call sequence.

use std::sync::Arc;

use tavern_bot::testing::{MockTransport, SentMessage};
use tavern_bot::Publisher;
use tavern_common::{GeneratedImage, Post, PostKind};

fn text_post() -> Post {
    Post {
        kind: PostKind::Humor,
        text: "A joke.".to_string(),
        image: None,
    }
}

fn url_post() -> Post {
    Post {
        kind: PostKind::Motivation,
        text: "Morning wisdom.".to_string(),
        image: Some(GeneratedImage::RemoteReference {
            url: "https://img.example/sunrise.png".to_string(),
        }),
    }
}

fn bytes_post() -> Post {
    Post {
        kind: PostKind::Devlog,
        text: "Evening notes.".to_string(),
        image: Some(GeneratedImage::InlineBinary {
            bytes: vec![1, 2, 3],
            filename: "post.png".to_string(),
        }),
    }
}

#[tokio::test]
async fn text_only_post_never_touches_a_photo_path() {
    let transport = Arc::new(MockTransport::new());
    let ok = Publisher::new(transport.clone()).publish(&text_post()).await;

    assert!(ok);
    assert_eq!(
        transport.sent(),
        vec![SentMessage::Text("A joke.".to_string())]
    );
}

#[tokio::test]
async fn remote_reference_is_sent_as_photo_with_caption() {
    let transport = Arc::new(MockTransport::new());
    let ok = Publisher::new(transport.clone()).publish(&url_post()).await;

    assert!(ok);
    assert_eq!(
        transport.sent(),
        vec![SentMessage::PhotoUrl {
            url: "https://img.example/sunrise.png".to_string(),
            caption: "Morning wisdom.".to_string(),
        }]
    );
}

#[tokio::test]
async fn inline_binary_is_uploaded_with_caption() {
    let transport = Arc::new(MockTransport::new());
    let ok = Publisher::new(transport.clone()).publish(&bytes_post()).await;

    assert!(ok);
    assert_eq!(
        transport.sent(),
        vec![SentMessage::PhotoBytes {
            filename: "post.png".to_string(),
            caption: "Evening notes.".to_string(),
        }]
    );
}

#[tokio::test]
async fn photo_failure_degrades_to_exactly_one_text_send() {
    let transport = Arc::new(MockTransport::failing_photo());
    let ok = Publisher::new(transport.clone()).publish(&url_post()).await;

    assert!(ok, "text-only degradation should still succeed");
    assert_eq!(
        transport.sent(),
        vec![
            SentMessage::PhotoUrl {
                url: "https://img.example/sunrise.png".to_string(),
                caption: "Morning wisdom.".to_string(),
            },
            SentMessage::Text("Morning wisdom.".to_string()),
        ]
    );
}

#[tokio::test]
async fn upload_failure_degrades_to_exactly_one_text_send() {
    let transport = Arc::new(MockTransport::failing_photo());
    let ok = Publisher::new(transport.clone()).publish(&bytes_post()).await;

    assert!(ok, "text-only degradation should still succeed");
    assert_eq!(
        transport.sent(),
        vec![
            SentMessage::PhotoBytes {
                filename: "post.png".to_string(),
                caption: "Evening notes.".to_string(),
            },
            SentMessage::Text("Evening notes.".to_string()),
        ]
    );
}

#[tokio::test]
async fn total_transport_failure_reports_false() {
    let transport = Arc::new(MockTransport::failing_all());
    let ok = Publisher::new(transport.clone()).publish(&url_post()).await;

    assert!(!ok);
    // One photo attempt, one text retry, nothing more.
    assert_eq!(transport.sent().len(), 2);
}

#[tokio::test]
async fn text_failure_on_plain_post_reports_false() {
    let transport = Arc::new(MockTransport::failing_all());
    let ok = Publisher::new(transport.clone()).publish(&text_post()).await;

    assert!(!ok);
    assert_eq!(transport.sent().len(), 1);
}

#[tokio::test]
async fn self_check_reflects_channel_reachability() {
    assert!(Publisher::new(Arc::new(MockTransport::new())).self_check().await);
    assert!(
        !Publisher::new(Arc::new(MockTransport::failing_all()))
            .self_check()
            .await
    );
}
