//! Image acquisition: one generation request per call, normalized to a
//! delivery form. Failure of any kind yields `None`; retries belong to the
//! transport layer, not here.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::{info, warn};

use tavern_common::GeneratedImage;

use crate::traits::ImageModel;

/// Filename used for inline uploads.
const INLINE_FILENAME: &str = "post.png";

pub struct ImageAcquirer {
    model: Arc<dyn ImageModel>,
    size: String,
    quality: String,
}

impl ImageAcquirer {
    pub fn new(
        model: Arc<dyn ImageModel>,
        size: impl Into<String>,
        quality: impl Into<String>,
    ) -> Self {
        Self {
            model,
            size: size.into(),
            quality: quality.into(),
        }
    }

    /// Request one image and normalize the backend's descriptor. The URL form
    /// is preferred over the inline payload: no decode step, smaller payload.
    pub async fn acquire(&self, prompt: &str) -> Option<GeneratedImage> {
        let payload = match self
            .model
            .create_image(prompt, &self.size, &self.quality)
            .await
        {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "Image generation failed");
                return None;
            }
        };

        if let Some(url) = payload.url.filter(|u| !u.is_empty()) {
            info!(url = url.as_str(), "Image generated (remote reference)");
            return Some(GeneratedImage::RemoteReference { url });
        }

        if let Some(b64) = payload.b64_json {
            return match STANDARD.decode(b64.trim()) {
                Ok(bytes) => {
                    info!(bytes = bytes.len(), "Image generated (inline payload)");
                    Some(GeneratedImage::InlineBinary {
                        bytes,
                        filename: INLINE_FILENAME.to_string(),
                    })
                }
                Err(err) => {
                    warn!(error = %err, "Image payload decode failed");
                    None
                }
            };
        }

        warn!("Image response carried neither url nor b64_json");
        None
    }
}
