// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Specialized agents and the turn stream orchestrator.
//!
//! The entry point is [`create_turn_stream`]: classify the turn, route it to
//! one of the three agents, and stream the generated answer back as typed
//! events with tool and usage data merged in.

pub mod agents;
pub mod orchestrator;
pub mod prompts;
pub mod smooth;

pub use agents::{build_agent, has_resume_content, AgentSpec};
pub use orchestrator::{
    create_turn_stream, FinalizeFn, OnErrorFn, TurnDeps, TurnRequest, TurnStream,
};
pub use smooth::WordSmoother;
