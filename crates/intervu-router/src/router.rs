// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Agent selection from a classification result.
//!
//! The router is a pure priority mapping. The classifying model is supposed
//! to set exactly one flag, but nothing enforces that, so selection must be
//! deterministic for every possible flag combination.

use intervu_core::ClassificationResult;

/// The specialized agent handling a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    /// Résumé critique with the skill-evaluation tool bound.
    ResumeOpt,
    /// Technical interviewer persona, no tools.
    MockInterview,
    /// Broad three-domain assistant with capability tools.
    General,
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentKind::ResumeOpt => write!(f, "resume-opt"),
            AgentKind::MockInterview => write!(f, "mock-interview"),
            AgentKind::General => write!(f, "general"),
        }
    }
}

impl AgentKind {
    /// Selects an agent with the fixed priority order
    /// `resume_opt > mock_interview > (related_topics | others)`.
    ///
    /// The ordering holds even when zero or multiple flags are true; with
    /// all flags false the turn is treated as an in-scope related topic and
    /// routed to the general agent.
    pub fn from_classification(classification: &ClassificationResult) -> Self {
        if classification.resume_opt {
            AgentKind::ResumeOpt
        } else if classification.mock_interview {
            AgentKind::MockInterview
        } else {
            AgentKind::General
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(
        resume_opt: bool,
        mock_interview: bool,
        related_topics: bool,
        others: bool,
    ) -> ClassificationResult {
        ClassificationResult {
            resume_opt,
            mock_interview,
            related_topics,
            others,
        }
    }

    #[test]
    fn single_flag_routes_directly() {
        assert_eq!(
            AgentKind::from_classification(&flags(true, false, false, false)),
            AgentKind::ResumeOpt
        );
        assert_eq!(
            AgentKind::from_classification(&flags(false, true, false, false)),
            AgentKind::MockInterview
        );
        assert_eq!(
            AgentKind::from_classification(&flags(false, false, true, false)),
            AgentKind::General
        );
        assert_eq!(
            AgentKind::from_classification(&flags(false, false, false, true)),
            AgentKind::General
        );
    }

    #[test]
    fn all_false_defaults_to_general() {
        assert_eq!(
            AgentKind::from_classification(&flags(false, false, false, false)),
            AgentKind::General
        );
    }

    #[test]
    fn multiple_flags_follow_priority_order() {
        // resume_opt beats everything.
        assert_eq!(
            AgentKind::from_classification(&flags(true, true, true, true)),
            AgentKind::ResumeOpt
        );
        // mock_interview beats the general categories.
        assert_eq!(
            AgentKind::from_classification(&flags(false, true, true, true)),
            AgentKind::MockInterview
        );
    }

    #[test]
    fn every_flag_combination_is_deterministic() {
        // Exhaustive check over all 16 combinations: the selected agent must
        // equal the documented priority order.
        for bits in 0u8..16 {
            let c = flags(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
            let expected = if c.resume_opt {
                AgentKind::ResumeOpt
            } else if c.mock_interview {
                AgentKind::MockInterview
            } else {
                AgentKind::General
            };
            assert_eq!(AgentKind::from_classification(&c), expected, "bits {bits}");
        }
    }

    #[test]
    fn agent_kind_display() {
        assert_eq!(AgentKind::ResumeOpt.to_string(), "resume-opt");
        assert_eq!(AgentKind::MockInterview.to_string(), "mock-interview");
        assert_eq!(AgentKind::General.to_string(), "general");
    }
}
