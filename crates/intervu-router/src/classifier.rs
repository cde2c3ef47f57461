// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! LLM-backed intent classification for user turns.
//!
//! Classifies the most recent user message into four boolean intent flags
//! via a structured-output model call. The classifier is advisory: any
//! failure after the input check degrades to the safe default category
//! (`related_topics`) instead of aborting the turn.

use intervu_core::{ChatMessage, ClassificationResult, IntervuError, LanguageModel, Role};
use tracing::{debug, warn};

/// System prompt for the classification call.
const CLASSIFICATION_SYSTEM_PROMPT: &str = r#"你是一个互联网大公司的资深程序员和面试官，尤其擅长前端技术栈，包括 HTML、CSS、JavaScript、TypeScript、React、Vue、Node.js、小程序等技术。

请根据用户输入的内容，判断用户属于哪一种情况，并输出 JSON 格式。

## 分类说明

1. **resume_opt（简历优化）**
   - 用户想要优化、修改、审阅简历
   - 用户询问简历相关的建议
   - 用户提供了简历内容并寻求反馈
   - 关键词：简历、CV、resume、优化简历、修改简历、简历建议、帮我看看简历

2. **mock_interview（模拟面试）**
   - 用户想要进行模拟面试
   - 用户请求面试练习或面试场景模拟
   - 用户想要扮演面试者角色
   - 关键词：模拟面试、面试练习、面试场景、当面试官

3. **related_topics（编程/面试/简历相关话题）**
   - 用户询问编程技术问题
   - 用户询问面试题目或面试技巧
   - 用户讨论技术栈、框架、工具
   - 用户询问职业发展、技术学习路径
   - 关键词：技术问题、面试题、如何学习、技术选型、代码问题

4. **others（其他话题）**
   - 闲聊、问候
   - 与编程、面试、简历无关的话题
   - 生活问题、娱乐话题
   - 其他领域的咨询

## 输出格式

返回一个 JSON 对象，包含 4 个布尔值字段，只有一个应该为 true：
{
  "resume_opt": true/false,
  "mock_interview": true/false,
  "related_topics": true/false,
  "others": true/false
}

重要：4 个字段中只能有一个为 true，其他必须为 false。"#;

/// Returns the JSON schema for the four-boolean classification output.
pub fn classification_schema() -> serde_json::Value {
    schemars::schema_for!(ClassificationResult).to_value()
}

/// Classifies the intent of the latest user message in `history`.
///
/// Fails with [`IntervuError::NoUserMessage`] when the history contains no
/// `user`-role message — without a subject message the turn cannot proceed.
/// Every other failure (provider error, output that does not deserialize)
/// is logged and mapped to [`ClassificationResult::fallback`]; the history
/// is never mutated.
pub async fn classify_intent(
    model: &dyn LanguageModel,
    history: &[ChatMessage],
) -> Result<ClassificationResult, IntervuError> {
    let last_user = history
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .ok_or(IntervuError::NoUserMessage)?;

    let user_content = last_user.text();
    let prompt = format!("用户输入：{user_content}\n\n请判断用户意图并返回 JSON 格式的分类结果。");
    let schema = classification_schema();

    let classification = match model
        .generate_structured(CLASSIFICATION_SYSTEM_PROMPT, &prompt, &schema)
        .await
    {
        Ok(value) => match serde_json::from_value::<ClassificationResult>(value) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "classifier output did not match schema, using fallback");
                ClassificationResult::fallback()
            }
        },
        Err(e) => {
            warn!(error = %e, "classification call failed, using fallback");
            ClassificationResult::fallback()
        }
    };

    debug!(
        resume_opt = classification.resume_opt,
        mock_interview = classification.mock_interview,
        related_topics = classification.related_topics,
        others = classification.others,
        "classified user intent"
    );

    Ok(classification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use intervu_test_utils::MockModel;

    #[tokio::test]
    async fn classifies_from_structured_output() {
        let model = MockModel::new();
        model.push_structured(serde_json::json!({
            "resume_opt": true,
            "mock_interview": false,
            "related_topics": false,
            "others": false,
        }));

        let history = vec![ChatMessage::user("帮我看看简历")];
        let result = classify_intent(&model, &history).await.unwrap();
        assert!(result.resume_opt);
        assert!(!result.mock_interview);
    }

    #[tokio::test]
    async fn no_user_message_is_an_error() {
        let model = MockModel::new();
        let history = vec![ChatMessage::assistant("你好")];
        let err = classify_intent(&model, &history).await.unwrap_err();
        assert!(matches!(err, IntervuError::NoUserMessage));
    }

    #[tokio::test]
    async fn empty_history_is_an_error() {
        let model = MockModel::new();
        let err = classify_intent(&model, &[]).await.unwrap_err();
        assert!(matches!(err, IntervuError::NoUserMessage));
    }

    #[tokio::test]
    async fn provider_failure_falls_back_to_related_topics() {
        let model = MockModel::new();
        model.push_structured_error(IntervuError::provider("timeout"));

        let history = vec![ChatMessage::user("React 和 Vue 怎么选？")];
        let result = classify_intent(&model, &history).await.unwrap();
        assert_eq!(result, ClassificationResult::fallback());
    }

    #[tokio::test]
    async fn malformed_output_falls_back_to_related_topics() {
        let model = MockModel::new();
        model.push_structured(serde_json::json!({"unexpected": "shape"}));

        let history = vec![ChatMessage::user("你好")];
        let result = classify_intent(&model, &history).await.unwrap();
        assert_eq!(result, ClassificationResult::fallback());
    }

    #[tokio::test]
    async fn uses_latest_user_message() {
        let model = MockModel::new();
        model.push_structured(serde_json::json!({
            "resume_opt": false,
            "mock_interview": true,
            "related_topics": false,
            "others": false,
        }));

        let history = vec![
            ChatMessage::user("旧消息"),
            ChatMessage::assistant("好的"),
            ChatMessage::user("我们来模拟面试吧"),
        ];
        let result = classify_intent(&model, &history).await.unwrap();
        assert!(result.mock_interview);

        let prompts = model.structured_prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("我们来模拟面试吧"));
        assert!(!prompts[0].contains("旧消息"));
    }

    #[test]
    fn schema_has_exactly_four_boolean_fields() {
        let schema = classification_schema();
        let props = schema["properties"].as_object().unwrap();
        assert_eq!(props.len(), 4);
        for (_, prop) in props {
            assert_eq!(prop["type"], "boolean");
        }
    }
}
