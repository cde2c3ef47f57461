// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool infrastructure and built-in tools for Intervu agents.
//!
//! - [`Tool`] / [`ToolRegistry`]: the unified tool interface agents bind
//! - [`scoring`]: the deterministic résumé skill-evaluation engine
//! - [`builtin`]: the capability tools (weather, documents, suggestions,
//!   behavioural questions) and the scoring tool's model-facing wrapper

pub mod builtin;
pub mod scoring;
pub mod tool;

pub use scoring::{evaluate_skills, SkillEvaluation, SkillEvaluationDetails};
pub use tool::{Tool, ToolOutput, ToolRegistry};
