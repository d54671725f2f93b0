mod client;
pub(crate) mod types;

use std::time::Duration;

use anyhow::{anyhow, Result};

use client::OpenAiClient;
use types::{ChatRequest, ImageRequest, WireMessage};

pub use types::ImagePayload;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
const DEFAULT_IMAGE_MODEL: &str = "gpt-image-1";

// =============================================================================
// OpenAi Agent
// =============================================================================

/// OpenAI-compatible agent configured for one chat model and one image model.
#[derive(Clone)]
pub struct OpenAi {
    api_key: String,
    model: String,
    image_model: String,
    base_url: Option<String>,
    timeout: Duration,
}

impl OpenAi {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow!("OPENAI_API_KEY environment variable not set"))?;
        Ok(Self::new(api_key, model))
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Bound every request to the backend; elapsed timeouts surface as errors.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the chat model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn client(&self) -> OpenAiClient {
        let client = OpenAiClient::new(&self.api_key, self.timeout);
        if let Some(ref url) = self.base_url {
            client.with_base_url(url)
        } else {
            client
        }
    }

    /// One chat completion: system instructions plus a single user turn.
    pub async fn complete(
        &self,
        instructions: &str,
        user_turn: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String> {
        let request = ChatRequest::new(&self.model)
            .messages(vec![
                WireMessage::system(instructions),
                WireMessage::user(user_turn),
            ])
            .max_tokens(max_tokens)
            .temperature(temperature);

        let response = self.client().chat(&request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| anyhow!("No response from OpenAI"))
    }

    /// One image generation. Returns the backend's raw descriptor; the caller
    /// decides between the `url` and `b64_json` delivery forms.
    pub async fn create_image(
        &self,
        prompt: &str,
        size: &str,
        quality: &str,
    ) -> Result<ImagePayload> {
        let request = ImageRequest::new(&self.image_model, prompt)
            .size(size)
            .quality(quality);

        let mut response = self.client().images(&request).await?;

        if response.data.is_empty() {
            return Err(anyhow!("No image in response"));
        }
        Ok(response.data.remove(0))
    }
}
