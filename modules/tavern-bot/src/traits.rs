// Trait abstractions for the pipeline's external collaborators.
//
// TextModel and ImageModel wrap the generation backend; ChannelTransport
// wraps the Telegram client bound to the target channel.
//
// These enable deterministic testing with MockTextModel, MockImageModel and
// MockTransport: no network, no API keys. `cargo test` in seconds.

use anyhow::Result;
use async_trait::async_trait;

use ai_client::{ImagePayload, OpenAi};
use telegram::TelegramClient;

// ---------------------------------------------------------------------------
// Generation backend
// ---------------------------------------------------------------------------

#[async_trait]
pub trait TextModel: Send + Sync {
    /// One bounded chat completion: system instructions plus one user turn.
    async fn complete(
        &self,
        instructions: &str,
        user_turn: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String>;
}

#[async_trait]
pub trait ImageModel: Send + Sync {
    /// One image generation, returning the backend's raw descriptor.
    async fn create_image(&self, prompt: &str, size: &str, quality: &str) -> Result<ImagePayload>;
}

#[async_trait]
impl TextModel for OpenAi {
    async fn complete(
        &self,
        instructions: &str,
        user_turn: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String> {
        OpenAi::complete(self, instructions, user_turn, max_tokens, temperature).await
    }
}

#[async_trait]
impl ImageModel for OpenAi {
    async fn create_image(&self, prompt: &str, size: &str, quality: &str) -> Result<ImagePayload> {
        OpenAi::create_image(self, prompt, size, quality).await
    }
}

// ---------------------------------------------------------------------------
// Channel transport
// ---------------------------------------------------------------------------

#[async_trait]
pub trait ChannelTransport: Send + Sync {
    /// Deliver a text-only post. Returns the delivery message id.
    async fn send_text(&self, text: &str) -> Result<i64>;

    /// Deliver a photo by public URL with the post text as caption.
    async fn send_photo_url(&self, url: &str, caption: &str) -> Result<i64>;

    /// Upload photo bytes with the post text as caption.
    async fn send_photo_bytes(&self, bytes: Vec<u8>, filename: &str, caption: &str)
        -> Result<i64>;

    /// Channel title, for the startup self-check.
    async fn channel_title(&self) -> Result<String>;
}

/// Telegram client bound to the single target channel. Absorbs the
/// `client.method(channel_id, ...)` two-step so the pipeline never handles
/// chat ids.
pub struct ChannelClient {
    client: TelegramClient,
    channel_id: String,
}

impl ChannelClient {
    pub fn new(client: TelegramClient, channel_id: impl Into<String>) -> Self {
        Self {
            client,
            channel_id: channel_id.into(),
        }
    }
}

#[async_trait]
impl ChannelTransport for ChannelClient {
    async fn send_text(&self, text: &str) -> Result<i64> {
        let message = self.client.send_message(&self.channel_id, text).await?;
        Ok(message.message_id)
    }

    async fn send_photo_url(&self, url: &str, caption: &str) -> Result<i64> {
        let message = self
            .client
            .send_photo_url(&self.channel_id, url, caption)
            .await?;
        Ok(message.message_id)
    }

    async fn send_photo_bytes(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        caption: &str,
    ) -> Result<i64> {
        let message = self
            .client
            .send_photo_bytes(&self.channel_id, bytes, filename, caption)
            .await?;
        Ok(message.message_id)
    }

    async fn channel_title(&self) -> Result<String> {
        let chat = self.client.get_chat(&self.channel_id).await?;
        Ok(chat.title.unwrap_or_else(|| self.channel_id.clone()))
    }
}
