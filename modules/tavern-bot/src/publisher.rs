//! Channel delivery with a degrade-never-drop policy: a failed photo send is
//! retried once as text-only within the same publish call, so a post is never
//! lost because only its image failed.

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info, warn};

use tavern_common::{GeneratedImage, Post};

use crate::traits::ChannelTransport;

pub struct Publisher {
    transport: Arc<dyn ChannelTransport>,
}

impl Publisher {
    pub fn new(transport: Arc<dyn ChannelTransport>) -> Self {
        Self { transport }
    }

    /// Deliver the post. Returns true only if the channel confirmed delivery
    /// of something — the full post or its text-only degradation.
    pub async fn publish(&self, post: &Post) -> bool {
        let Some(image) = &post.image else {
            info!(kind = %post.kind, "Publishing text-only post");
            return self.send_text(&post.text).await;
        };

        match self.send_photo(image, &post.text).await {
            Ok(message_id) => {
                info!(kind = %post.kind, message_id, "Post published with image");
                true
            }
            Err(err) => {
                warn!(kind = %post.kind, error = %err, "Photo delivery failed, retrying text-only");
                self.send_text(&post.text).await
            }
        }
    }

    /// Startup connectivity check: can the channel be reached at all,
    /// independent of generation.
    pub async fn self_check(&self) -> bool {
        match self.transport.channel_title().await {
            Ok(title) => {
                info!(channel = title.as_str(), "Channel connection OK");
                true
            }
            Err(err) => {
                error!(error = %err, "Channel connection failed");
                false
            }
        }
    }

    async fn send_photo(&self, image: &GeneratedImage, caption: &str) -> Result<i64> {
        match image {
            GeneratedImage::RemoteReference { url } => {
                self.transport.send_photo_url(url, caption).await
            }
            GeneratedImage::InlineBinary { bytes, filename } => {
                self.transport
                    .send_photo_bytes(bytes.clone(), filename, caption)
                    .await
            }
        }
    }

    async fn send_text(&self, text: &str) -> bool {
        match self.transport.send_text(text).await {
            Ok(message_id) => {
                info!(message_id, "Text post published");
                true
            }
            Err(err) => {
                error!(error = %err, "Text delivery failed");
                false
            }
        }
    }
}
