// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Intervu turn pipeline.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Role of a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
            Role::System => write!(f, "system"),
        }
    }
}

/// A typed part of a conversation message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessagePart {
    /// Plain text content.
    Text { text: String },
    /// Reference to an uploaded attachment. The core never dereferences
    /// attachment URLs; rendering belongs to the presentation layer.
    Attachment {
        name: String,
        media_type: String,
        url: String,
    },
}

/// One message in a conversation turn.
///
/// History is append-only: new turns append messages, existing messages are
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub parts: Vec<MessagePart>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl ChatMessage {
    /// Creates a message with a fresh id and the current timestamp.
    pub fn new(role: Role, parts: Vec<MessagePart>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            parts,
            created_at: chrono::Utc::now(),
        }
    }

    /// Creates a user message with a single text part.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![MessagePart::Text { text: text.into() }])
    }

    /// Creates an assistant message with a single text part.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(
            Role::Assistant,
            vec![MessagePart::Text { text: text.into() }],
        )
    }

    /// Concatenates all text parts, joined by newlines. Attachment parts are
    /// skipped.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                MessagePart::Text { text } => Some(text.as_str()),
                MessagePart::Attachment { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Intent classification over a user turn: four independent boolean flags.
///
/// The intended invariant is that exactly one flag is true, but the
/// classifying model is advisory and may violate it. The router resolves
/// ties with a fixed priority order, so this type makes no guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ClassificationResult {
    /// 是否为简历优化意图
    pub resume_opt: bool,
    /// 是否为模拟面试意图
    pub mock_interview: bool,
    /// 是否为编程/面试相关话题
    pub related_topics: bool,
    /// 是否为其他话题
    pub others: bool,
}

impl ClassificationResult {
    /// The safe default used when classification fails: treat the turn as an
    /// in-scope related topic rather than rejecting it.
    pub fn fallback() -> Self {
        Self {
            resume_opt: false,
            mock_interview: false,
            related_topics: true,
            others: false,
        }
    }
}

/// Raw token counters for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
        }
    }
}

/// Token usage enriched with catalog-derived cost and context-window data.
///
/// Created from raw [`TokenUsage`]; the enrichment fields stay `None` when
/// the model catalog is unavailable or the model id cannot be resolved.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppUsage {
    #[serde(flatten)]
    pub tokens: TokenUsage,
    /// Resolved concrete model identifier, when enrichment succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    /// Estimated cost in USD for this generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_usd: Option<f64>,
    /// Context window of the resolved model, in tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u32>,
    /// Fraction of the context window consumed by this turn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_used_fraction: Option<f64>,
}

impl From<TokenUsage> for AppUsage {
    fn from(tokens: TokenUsage) -> Self {
        Self {
            tokens,
            ..Self::default()
        }
    }
}

/// A tool definition offered to the language model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// A request for a streaming text generation.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Selected model alias (e.g. `chat-model`, `chat-model-reasoning`).
    pub model: String,
    /// Fixed role prompt for the selected agent.
    pub system_prompt: String,
    /// Full conversation history, possibly augmented by an agent guard.
    pub messages: Vec<ChatMessage>,
    /// Tools the model may call during this generation.
    pub tools: Vec<ToolDefinition>,
}

/// One chunk of a provider's generation stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelStreamChunk {
    /// Incremental answer text.
    TextDelta { text: String },
    /// Incremental chain-of-thought text from reasoning model variants.
    ReasoningDelta { text: String },
    /// The model requests a tool invocation.
    ToolUse {
        id: String,
        name: String,
        input: serde_json::Value,
    },
    /// Terminal chunk carrying final token usage.
    Finish {
        usage: TokenUsage,
        stop_reason: Option<String>,
    },
    /// Provider-reported stream error.
    Error { message: String },
}

/// A typed event on the outbound turn stream.
///
/// Serialized with a `type` tag matching the wire event names consumed by
/// the transport layer (`text-delta`, `tool-call`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum StreamEvent {
    TextDelta {
        text: String,
    },
    ReasoningDelta {
        text: String,
    },
    ToolCall {
        id: String,
        name: String,
        input: serde_json::Value,
    },
    ToolResult {
        id: String,
        name: String,
        output: serde_json::Value,
    },
    /// Side-channel data event (`data-usage`, `data-document`, ...). The
    /// `name` is the suffix after `data-`.
    Data {
        name: String,
        value: serde_json::Value,
    },
    /// Terminal user-facing error. Never carries internal error text.
    Error {
        message: String,
    },
    /// Terminal event; the stream closes after emitting it.
    Finish,
}

/// Per-request session context forwarded to capability tools.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub user_id: Option<String>,
    pub chat_id: Option<String>,
}

/// Payload handed to the finalize callback exactly once per completed turn.
#[derive(Debug, Clone)]
pub struct FinalizeOutcome {
    /// Assistant messages produced by this turn.
    pub messages: Vec<ChatMessage>,
    /// Usage record, enriched when the catalog allowed it.
    pub usage: Option<AppUsage>,
}
