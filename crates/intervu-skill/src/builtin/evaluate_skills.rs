// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Résumé skill-evaluation tool.
//!
//! Thin [`Tool`] wrapper over the pure engine in [`crate::scoring`]. The only
//! ambient input is the current year, taken from the wall clock at invocation
//! time so the engine itself stays testable with a fixed year.

use async_trait::async_trait;
use chrono::Datelike;
use intervu_config::ScoringConfig;
use intervu_core::IntervuError;
use serde::Deserialize;

use crate::scoring::evaluate_skills;
use crate::tool::{Tool, ToolOutput};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct EvaluateSkillsInput {
    graduation_year: i32,
    skills: Vec<String>,
}

/// Scores the professional-skills section of a résumé.
pub struct EvaluateSkillsTool {
    config: ScoringConfig,
}

impl EvaluateSkillsTool {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Tool for EvaluateSkillsTool {
    fn name(&self) -> &str {
        "evaluate_skills"
    }

    fn description(&self) -> &str {
        "评估简历中的专业技能部分，根据毕业时间和技能列表进行评分和建议"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "graduationYear": {
                    "type": "integer",
                    "description": "毕业年份，如 2020"
                },
                "skills": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "技能列表，如 ['熟悉 React', '熟练使用 TypeScript', '了解 Node.js']"
                }
            },
            "required": ["graduationYear", "skills"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, IntervuError> {
        let input: EvaluateSkillsInput = match serde_json::from_value(input) {
            Ok(parsed) => parsed,
            Err(e) => return Ok(ToolOutput::error(format!("invalid input: {e}"))),
        };

        let current_year = chrono::Utc::now().year();
        let evaluation = evaluate_skills(
            input.graduation_year,
            &input.skills,
            &self.config,
            current_year,
        );

        tracing::debug!(
            score = evaluation.score,
            skill_count = input.skills.len(),
            "skill evaluation complete"
        );

        let content = serde_json::to_value(&evaluation)
            .map_err(|e| IntervuError::tool(format!("serializing skill evaluation: {e}")))?;
        Ok(ToolOutput::ok(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invoke_scores_and_suggests() {
        let tool = EvaluateSkillsTool::new(ScoringConfig::default());
        let output = tool
            .invoke(serde_json::json!({
                "graduationYear": 2020,
                "skills": ["熟悉 React", "精通 Node.js 性能优化", "熟练 MySQL"]
            }))
            .await
            .unwrap();
        assert!(!output.is_error);
        let score = output.content["score"].as_f64().unwrap();
        assert!((5.0..=10.0).contains(&score));
        assert!(output.content["suggestion"].is_string());
        assert!(output.content["details"]["skill_count"].as_u64().unwrap() == 3);
    }

    #[tokio::test]
    async fn empty_skill_list_hits_the_floor() {
        let tool = EvaluateSkillsTool::new(ScoringConfig::default());
        let output = tool
            .invoke(serde_json::json!({"graduationYear": 2020, "skills": []}))
            .await
            .unwrap();
        assert_eq!(output.content["score"].as_f64().unwrap(), 5.0);
    }

    #[tokio::test]
    async fn malformed_input_is_a_tool_error_not_a_failure() {
        let tool = EvaluateSkillsTool::new(ScoringConfig::default());
        let output = tool
            .invoke(serde_json::json!({"graduationYear": "not a year"}))
            .await
            .unwrap();
        assert!(output.is_error);
    }
}
