pub mod error;
mod types;

pub use error::{Result, TelegramError};
pub use types::{Chat, Message};

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use types::ApiResponse;

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

pub struct TelegramClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl TelegramClient {
    pub fn new(token: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: TELEGRAM_API_URL.to_string(),
            token: token.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Send a plain text message to a chat.
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<Message> {
        let body = json!({
            "chat_id": chat_id,
            "text": text,
            "disable_web_page_preview": true,
        });
        self.call("sendMessage", &body).await
    }

    /// Send a photo the Bot API fetches itself from a public URL.
    pub async fn send_photo_url(
        &self,
        chat_id: &str,
        photo_url: &str,
        caption: &str,
    ) -> Result<Message> {
        let body = json!({
            "chat_id": chat_id,
            "photo": photo_url,
            "caption": caption,
        });
        self.call("sendPhoto", &body).await
    }

    /// Upload photo bytes directly via multipart.
    pub async fn send_photo_bytes(
        &self,
        chat_id: &str,
        bytes: Vec<u8>,
        filename: &str,
        caption: &str,
    ) -> Result<Message> {
        debug!(method = "sendPhoto", bytes = bytes.len(), "Telegram API upload");

        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new()
            .text("chat_id", chat_id.to_string())
            .text("caption", caption.to_string())
            .part("photo", part);

        let resp = self
            .client
            .post(self.endpoint("sendPhoto"))
            .multipart(form)
            .send()
            .await?;

        Self::unwrap_response(resp).await
    }

    /// Fetch chat metadata; used for the startup connectivity check.
    pub async fn get_chat(&self, chat_id: &str) -> Result<Chat> {
        let body = json!({ "chat_id": chat_id });
        self.call("getChat", &body).await
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, body: &serde_json::Value) -> Result<T> {
        debug!(method, "Telegram API call");

        let resp = self
            .client
            .post(self.endpoint(method))
            .json(body)
            .send()
            .await?;

        Self::unwrap_response(resp).await
    }

    // The Bot API wraps errors in a JSON envelope with ok=false even on
    // non-2xx statuses, so the envelope is authoritative.
    async fn unwrap_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        let status = resp.status();
        let envelope: ApiResponse<T> = resp.json().await?;

        if !envelope.ok {
            return Err(TelegramError::Api {
                status: status.as_u16(),
                description: envelope.description.unwrap_or_default(),
            });
        }

        envelope.result.ok_or_else(|| TelegramError::Api {
            status: status.as_u16(),
            description: "response missing result".to_string(),
        })
    }
}
