//! Mock collaborators for pipeline tests: no network, no API keys,
//! deterministic.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use ai_client::ImagePayload;

use crate::traits::{ChannelTransport, ImageModel, TextModel};

// ---------------------------------------------------------------------------
// Generation backend mocks
// ---------------------------------------------------------------------------

/// Text backend returning a canned response, or failing on demand.
pub struct MockTextModel {
    response: Option<String>,
    pub calls: AtomicUsize,
}

impl MockTextModel {
    pub fn replying(text: &str) -> Self {
        Self {
            response: Some(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextModel for MockTextModel {
    async fn complete(
        &self,
        _instructions: &str,
        _user_turn: &str,
        _max_tokens: u32,
        _temperature: f32,
    ) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(anyhow!("mock text backend down")),
        }
    }
}

/// Image backend returning a canned descriptor, or failing on demand.
pub struct MockImageModel {
    payload: Option<ImagePayload>,
    pub calls: AtomicUsize,
}

impl MockImageModel {
    pub fn with_payload(payload: ImagePayload) -> Self {
        Self {
            payload: Some(payload),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            payload: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageModel for MockImageModel {
    async fn create_image(
        &self,
        _prompt: &str,
        _size: &str,
        _quality: &str,
    ) -> Result<ImagePayload> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.payload {
            Some(payload) => Ok(payload.clone()),
            None => Err(anyhow!("mock image backend down")),
        }
    }
}

// ---------------------------------------------------------------------------
// Transport mock
// ---------------------------------------------------------------------------

/// Every attempted delivery, in call order. Attempts are recorded before the
/// forced failure fires, so tests can assert the exact call sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentMessage {
    Text(String),
    PhotoUrl { url: String, caption: String },
    PhotoBytes { filename: String, caption: String },
}

/// Transport recording every call; photo and text sends fail independently.
#[derive(Default)]
pub struct MockTransport {
    fail_photo: bool,
    fail_text: bool,
    pub sent: Mutex<Vec<SentMessage>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_photo() -> Self {
        Self {
            fail_photo: true,
            ..Self::default()
        }
    }

    pub fn failing_all() -> Self {
        Self {
            fail_photo: true,
            fail_text: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChannelTransport for MockTransport {
    async fn send_text(&self, text: &str) -> Result<i64> {
        self.sent
            .lock()
            .unwrap()
            .push(SentMessage::Text(text.to_string()));
        if self.fail_text {
            return Err(anyhow!("mock transport rejected text"));
        }
        Ok(1)
    }

    async fn send_photo_url(&self, url: &str, caption: &str) -> Result<i64> {
        self.sent.lock().unwrap().push(SentMessage::PhotoUrl {
            url: url.to_string(),
            caption: caption.to_string(),
        });
        if self.fail_photo {
            return Err(anyhow!("mock transport rejected photo"));
        }
        Ok(2)
    }

    async fn send_photo_bytes(
        &self,
        _bytes: Vec<u8>,
        filename: &str,
        caption: &str,
    ) -> Result<i64> {
        self.sent.lock().unwrap().push(SentMessage::PhotoBytes {
            filename: filename.to_string(),
            caption: caption.to_string(),
        });
        if self.fail_photo {
            return Err(anyhow!("mock transport rejected photo upload"));
        }
        Ok(3)
    }

    async fn channel_title(&self) -> Result<String> {
        if self.fail_text {
            return Err(anyhow!("mock transport unreachable"));
        }
        Ok("Developer's Tavern".to_string())
    }
}
