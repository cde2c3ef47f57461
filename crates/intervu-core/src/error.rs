// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Intervu turn pipeline.

use thiserror::Error;

/// The primary error type used across the Intervu pipeline.
///
/// Variants map to the failure tiers of the pipeline: structural failures
/// (`NoUserMessage`) abort a turn before generation starts, generation-tier
/// failures (`Provider`) surface as a single terminal error event on the
/// outbound stream, and enrichment-tier failures (`Classification`,
/// `CatalogUnavailable`) are recovered locally with a fallback value.
#[derive(Debug, Error)]
pub enum IntervuError {
    /// Configuration errors (invalid TOML, missing required fields).
    #[error("configuration error: {0}")]
    Config(String),

    /// The conversation history contains no `user`-role message, so there is
    /// nothing to classify or answer. The turn cannot proceed.
    #[error("no user message found in conversation history")]
    NoUserMessage,

    /// Intent classification failed (provider error or malformed structured
    /// output). Always recovered to the default category by the classifier.
    #[error("classification error: {0}")]
    Classification(String),

    /// LLM provider errors (API failure, token limits, model not found).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Tool invocation errors (unknown tool, malformed input).
    #[error("tool error: {message}")]
    Tool {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The model catalog could not be fetched. Always recovered: usage is
    /// emitted unenriched.
    #[error("model catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntervuError {
    /// Constructs a provider error with no underlying source.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            source: None,
        }
    }

    /// Constructs a tool error with no underlying source.
    pub fn tool(message: impl Into<String>) -> Self {
        Self::Tool {
            message: message.into(),
            source: None,
        }
    }
}
