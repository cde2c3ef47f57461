// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in tools bound to the specialized agents.

pub mod behavioural;
pub mod documents;
pub mod evaluate_skills;
pub mod suggestions;
pub mod weather;

pub use behavioural::BehaviouralQuestionsTool;
pub use documents::{CreateDocumentTool, UpdateDocumentTool};
pub use evaluate_skills::EvaluateSkillsTool;
pub use suggestions::RequestSuggestionsTool;
pub use weather::WeatherTool;

use std::sync::Arc;

use intervu_config::{ScoringConfig, ToolsConfig};
use intervu_core::StreamEvent;
use tokio::sync::mpsc;

use crate::ToolRegistry;

/// Registers the general agent's capability tools.
///
/// `events` is the outbound stream sender the document and suggestion tools
/// use to drive the client's artifact panel.
pub fn register_general_tools(
    registry: &mut ToolRegistry,
    tools: &ToolsConfig,
    events: mpsc::Sender<StreamEvent>,
) {
    registry.register(Arc::new(WeatherTool::new(tools.weather_api_url.clone())));
    registry.register(Arc::new(CreateDocumentTool::new(events.clone())));
    registry.register(Arc::new(UpdateDocumentTool::new(events.clone())));
    registry.register(Arc::new(RequestSuggestionsTool::new(events)));
    registry.register(Arc::new(BehaviouralQuestionsTool::new(
        tools.behavioural_questions_url.clone(),
    )));
}

/// Registers the résumé-optimization agent's scoring tool.
pub fn register_resume_tools(registry: &mut ToolRegistry, scoring: &ScoringConfig) {
    registry.register(Arc::new(EvaluateSkillsTool::new(scoring.clone())));
}
