//! Content generation with fallback substitution.
//!
//! `generate` never fails outwardly: any text backend failure is absorbed
//! into the hand-authored fallback pool, and any image failure leaves the
//! post text-only.

use std::sync::Arc;

use anyhow::{bail, Result};
use tracing::{info, warn};

use tavern_common::{Post, PostKind};

use crate::fallback;
use crate::image::ImageAcquirer;
use crate::prompts;
use crate::traits::TextModel;

const MAX_TOKENS: u32 = 300;
const TEMPERATURE: f32 = 0.8;

pub struct ContentGenerator {
    model: Arc<dyn TextModel>,
    images: ImageAcquirer,
    image_posts_enabled: bool,
}

impl ContentGenerator {
    pub fn new(model: Arc<dyn TextModel>, images: ImageAcquirer, image_posts_enabled: bool) -> Self {
        Self {
            model,
            images,
            image_posts_enabled,
        }
    }

    /// Produce a valid post for the kind: exactly one text call, at most one
    /// image call. The returned text is never empty.
    pub async fn generate(&self, kind: PostKind) -> Post {
        let text = match self.generate_text(kind).await {
            Ok(text) => text,
            Err(err) => {
                warn!(kind = %kind, error = %err, "Text generation failed, using fallback");
                fallback::pick_fallback(kind, &mut rand::rng()).to_string()
            }
        };

        let image = if self.image_posts_enabled && kind.wants_image() {
            match prompts::image_prompt(kind) {
                Some(prompt) => self.images.acquire(prompt).await,
                None => None,
            }
        } else {
            None
        };

        info!(
            kind = %kind,
            chars = text.chars().count(),
            with_image = image.is_some(),
            "Post generated"
        );

        Post { kind, text, image }
    }

    async fn generate_text(&self, kind: PostKind) -> Result<String> {
        let raw = self
            .model
            .complete(
                prompts::instructions(kind),
                prompts::USER_TURN,
                MAX_TOKENS,
                TEMPERATURE,
            )
            .await?;

        let text = raw.trim().to_string();
        if text.is_empty() {
            bail!("model returned empty text");
        }
        Ok(text)
    }
}
