// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent classification and agent routing for the Intervu pipeline.
//!
//! This crate provides:
//! - [`classify_intent`]: structured-output LLM classification of the latest
//!   user message into four boolean intent flags
//! - [`AgentKind`]: deterministic agent selection with a fixed priority order
//!
//! Classification is advisory and fail-open; routing is pure and total over
//! every flag combination.

pub mod classifier;
pub mod router;

pub use classifier::{classification_schema, classify_intent};
pub use router::AgentKind;
