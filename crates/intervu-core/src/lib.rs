// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Intervu turn pipeline.
//!
//! This crate provides the shared types (conversation messages, stream
//! events, usage records), the language-model provider trait, and the error
//! type used throughout the Intervu workspace.

pub mod error;
pub mod traits;
pub mod types;

pub use error::IntervuError;
pub use traits::{BoxChunkStream, LanguageModel};
pub use types::{
    AppUsage, ChatMessage, ClassificationResult, FinalizeOutcome, GenerationRequest, MessagePart,
    ModelStreamChunk, Role, SessionContext, StreamEvent, TokenUsage, ToolDefinition,
};
