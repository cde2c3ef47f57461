// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for the Intervu workspace.
//!
//! Provides [`MockModel`], a scripted [`intervu_core::LanguageModel`]
//! implementation for deterministic, CI-runnable tests without external API
//! calls.

pub mod mock_model;

pub use mock_model::{MockModel, StreamScript};
