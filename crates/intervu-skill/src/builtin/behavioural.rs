// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HR behavioural-interview question tool.
//!
//! Fetches a markdown question bank from a configured source URL and hands
//! it to the model, optionally tagged with the topic the user asked about.

use async_trait::async_trait;
use intervu_core::IntervuError;

use crate::tool::{Tool, ToolOutput};

pub struct BehaviouralQuestionsTool {
    client: reqwest::Client,
    source_url: String,
}

impl BehaviouralQuestionsTool {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            source_url: source_url.into(),
        }
    }
}

#[async_trait]
impl Tool for BehaviouralQuestionsTool {
    fn name(&self) -> &str {
        "behavioural_questions"
    }

    fn description(&self) -> &str {
        "获取 HR 行为面试题和答案。当用户询问关于 HR 行为面试、STAR 法则、行为面试技巧或需要行为面试题目练习时，使用此工具获取相关内容。"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "用户感兴趣的具体话题，例如：团队合作、领导力、冲突处理、压力管理等（可选）"
                }
            }
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, IntervuError> {
        let topic = input["topic"].as_str().map(str::to_string);

        let response = match self.client.get(&self.source_url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "behavioural question fetch failed");
                return Ok(ToolOutput::error(format!("获取行为面试题时发生错误：{e}")));
            }
        };

        if !response.status().is_success() {
            return Ok(ToolOutput::error(format!(
                "无法获取行为面试题数据，HTTP 状态码：{}",
                response.status().as_u16()
            )));
        }

        let content = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                return Ok(ToolOutput::error(format!("获取行为面试题时发生错误：{e}")));
            }
        };

        let message = match &topic {
            Some(topic) => {
                format!("已获取行为面试题内容，请根据用户关注的「{topic}」话题进行针对性解答。")
            }
            None => "已获取完整的行为面试题内容，可以帮助用户进行面试准备。".to_string(),
        };

        Ok(ToolOutput::ok(serde_json::json!({
            "content": content,
            "topic": topic.unwrap_or_else(|| "全部".to_string()),
            "source": self.source_url,
            "message": message,
        })))
    }
}
