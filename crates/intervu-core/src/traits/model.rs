// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Language-model provider trait.
//!
//! The pipeline consumes two model capabilities: streaming text generation
//! (agents) and structured-output generation (the intent classifier). Both
//! live on one trait so a single provider handle can serve a whole turn.

use std::pin::Pin;

use async_trait::async_trait;
use futures_core::Stream;

use crate::error::IntervuError;
use crate::types::{GenerationRequest, ModelStreamChunk};

/// Boxed stream of provider chunks.
pub type BoxChunkStream =
    Pin<Box<dyn Stream<Item = Result<ModelStreamChunk, IntervuError>> + Send>>;

/// Adapter for a language-model provider.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Starts a streaming text generation.
    ///
    /// The returned stream ends with exactly one [`ModelStreamChunk::Finish`]
    /// on success. Dropping the stream aborts the upstream call.
    async fn stream(&self, request: GenerationRequest) -> Result<BoxChunkStream, IntervuError>;

    /// Generates a single structured object conforming to `schema`.
    ///
    /// Used only by the intent classifier. The provider is responsible for
    /// constraining the model output to the schema; malformed output is a
    /// provider error.
    async fn generate_structured(
        &self,
        system_prompt: &str,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<serde_json::Value, IntervuError>;

    /// Resolves a UI model alias (e.g. `chat-model`) to the provider's
    /// concrete model identifier, if known. Used for usage enrichment only.
    fn resolve_model_id(&self, selected: &str) -> Option<String>;
}
