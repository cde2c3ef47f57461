// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The three specialized agents.
//!
//! An agent is a fixed role prompt, a tool registry, and a history
//! preparation step. The resume-optimization agent is the only one with a
//! pre-generation guard: without résumé-looking content in the history it
//! appends a synthetic assistant turn asking for the résumé text, then still
//! generates so the model can reply naturally alongside the prompt-for-input.

use intervu_config::{IntervuConfig, ResumeHeuristicConfig};
use intervu_core::{ChatMessage, Role, StreamEvent};
use intervu_router::AgentKind;
use intervu_skill::builtin::{register_general_tools, register_resume_tools};
use intervu_skill::ToolRegistry;
use tokio::sync::mpsc;

use crate::prompts;

/// A configured agent for one turn: role prompt, bound tools, step cap, and
/// whether text deltas get word-boundary smoothing.
pub struct AgentSpec {
    pub kind: AgentKind,
    pub system_prompt: String,
    pub tools: ToolRegistry,
    pub max_steps: u32,
    pub smooth_output: bool,
}

/// Builds the agent for a routed turn.
///
/// The general agent binds its capability tools only for non-reasoning
/// models; the reasoning variant runs with zero tools. `events` feeds the
/// document and suggestion tools' side-channel data events.
pub fn build_agent(
    kind: AgentKind,
    selected_model: &str,
    config: &IntervuConfig,
    events: mpsc::Sender<StreamEvent>,
) -> AgentSpec {
    match kind {
        AgentKind::General => {
            let mut tools = ToolRegistry::new();
            if selected_model != config.models.reasoning_model {
                register_general_tools(&mut tools, &config.tools, events);
            }
            AgentSpec {
                kind,
                system_prompt: prompts::general_system_prompt(selected_model, &config.models),
                tools,
                max_steps: config.models.max_steps,
                smooth_output: true,
            }
        }
        AgentKind::ResumeOpt => {
            let mut tools = ToolRegistry::new();
            register_resume_tools(&mut tools, &config.scoring);
            AgentSpec {
                kind,
                system_prompt: prompts::RESUME_OPT_PROMPT.to_string(),
                tools,
                max_steps: config.models.max_steps,
                smooth_output: false,
            }
        }
        AgentKind::MockInterview => AgentSpec {
            kind,
            system_prompt: prompts::MOCK_INTERVIEW_PROMPT.to_string(),
            tools: ToolRegistry::new(),
            max_steps: 1,
            smooth_output: false,
        },
    }
}

impl AgentSpec {
    /// Prepares the history this agent generates from. Only the resume
    /// agent's guard modifies it, and only by appending.
    pub fn prepare_history(&self, messages: &[ChatMessage], config: &IntervuConfig) -> Vec<ChatMessage> {
        let mut history = messages.to_vec();
        if self.kind == AgentKind::ResumeOpt && !has_resume_content(messages, &config.resume) {
            tracing::debug!("no resume content in history, appending guard turn");
            history.push(ChatMessage::assistant(prompts::RESUME_GUARD_REPLY));
        }
        history
    }
}

/// Heuristic for "the user already pasted a résumé": any user message longer
/// than the configured minimum, or containing one of the résumé keywords.
pub fn has_resume_content(messages: &[ChatMessage], config: &ResumeHeuristicConfig) -> bool {
    messages
        .iter()
        .filter(|m| m.role == Role::User)
        .any(|m| {
            let text = m.text();
            text.chars().count() > config.min_chars
                || config.keywords.iter().any(|kw| text.contains(kw.as_str()))
        })
}
