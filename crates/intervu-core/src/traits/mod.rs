// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for external collaborators of the turn pipeline.

pub mod model;

pub use model::{BoxChunkStream, LanguageModel};
