use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::generate::error::GenError;

/// Bound on each API call; a timeout is treated as a transport failure.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

const MAX_TOKENS: u32 = 1000;

// ============================================================================
// Wire types for the messages endpoint
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: &'static str,
    pub content: MessageContent,
}

/// Generation calls send a plain prompt string; vision calls send typed
/// content blocks (image + instruction text).
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Image { source: ImageSource },
    Text { text: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageSource {
    #[serde(rename = "type")]
    pub source_type: &'static str,
    pub media_type: String,
    pub data: String,
}

impl MessagesRequest {
    /// Single-turn request with a plain text prompt.
    pub fn text(model: &str, prompt: String) -> Self {
        Self {
            model: model.to_string(),
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: MessageContent::Text(prompt),
            }],
        }
    }

    /// Single-turn request with a base64 image attachment followed by an
    /// instruction block.
    pub fn vision(model: &str, media_type: &str, base64_data: String, prompt: &str) -> Self {
        Self {
            model: model.to_string(),
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: MessageContent::Blocks(vec![
                    ContentBlock::Image {
                        source: ImageSource {
                            source_type: "base64",
                            media_type: media_type.to_string(),
                            data: base64_data,
                        },
                    },
                    ContentBlock::Text {
                        text: prompt.to_string(),
                    },
                ]),
            }],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ResponseBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseBlock {
    #[serde(default)]
    pub text: String,
}

impl MessagesResponse {
    /// Convenience constructor for canned responses in tests.
    pub fn with_text(text: &str) -> Self {
        Self {
            content: vec![ResponseBlock {
                text: text.to_string(),
            }],
        }
    }

    /// Text payload of the first content block, empty if none.
    pub fn text(&self) -> &str {
        self.content.first().map(|b| b.text.as_str()).unwrap_or("")
    }
}

// ============================================================================
// Transport trait — injectable so prompt building and response extraction
// can be tested without a network
// ============================================================================

pub trait Transport {
    fn send(&self, request: &MessagesRequest) -> Result<MessagesResponse, GenError>;
}

// ============================================================================
// HttpTransport — blocking reqwest client against the real endpoint
// ============================================================================

pub struct HttpTransport {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(endpoint: &str, api_key: Option<&str>) -> Result<Self, GenError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| GenError::Transport(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            api_key: api_key.map(|k| k.to_string()),
            client,
        })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &MessagesRequest) -> Result<MessagesResponse, GenError> {
        let mut builder = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request);

        if let Some(key) = &self.api_key {
            builder = builder
                .header("x-api-key", key)
                .header("anthropic-version", "2023-06-01");
        }

        let response = builder
            .send()
            .map_err(|e| GenError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GenError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .map_err(|e| GenError::Transport(e.to_string()))
    }
}

// ============================================================================
// MockTransport — scripted responses (for testing without the API)
// ============================================================================

/// Replays a queue of canned outcomes in order and records every request it
/// receives. An exhausted queue reports a transport failure.
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<MessagesResponse, GenError>>>,
    requests: RefCell<Vec<MessagesRequest>>,
}

impl MockTransport {
    pub fn new(responses: Vec<Result<MessagesResponse, GenError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Number of requests sent through this transport so far.
    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// Serialized JSON of the nth request sent, for wire-shape assertions.
    pub fn request_json(&self, index: usize) -> Option<serde_json::Value> {
        self.requests
            .borrow()
            .get(index)
            .and_then(|r| serde_json::to_value(r).ok())
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &MessagesRequest) -> Result<MessagesResponse, GenError> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(GenError::Transport("mock transport exhausted".to_string())))
    }
}
