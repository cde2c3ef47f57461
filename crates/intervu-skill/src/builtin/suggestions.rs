// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Writing-suggestion request tool.

use async_trait::async_trait;
use intervu_core::{IntervuError, StreamEvent};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::tool::{Tool, ToolOutput};

/// Asks for writing suggestions on an existing document. Emits a `data`
/// event so the client can show the suggestion pass in progress.
pub struct RequestSuggestionsTool {
    events: mpsc::Sender<StreamEvent>,
}

impl RequestSuggestionsTool {
    pub fn new(events: mpsc::Sender<StreamEvent>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl Tool for RequestSuggestionsTool {
    fn name(&self) -> &str {
        "request_suggestions"
    }

    fn description(&self) -> &str {
        "Request writing suggestions for a document"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "documentId": {
                    "type": "string",
                    "description": "ID of the document to request suggestions for"
                }
            },
            "required": ["documentId"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, IntervuError> {
        let document_id = match input["documentId"].as_str() {
            Some(v) => v.to_string(),
            None => return Ok(ToolOutput::error("missing required 'documentId' parameter")),
        };

        let request_id = Uuid::new_v4().to_string();
        let event = StreamEvent::Data {
            name: "suggestions".to_string(),
            value: serde_json::json!({
                "id": request_id,
                "documentId": document_id,
            }),
        };
        if self.events.send(event).await.is_err() {
            tracing::debug!("suggestions event dropped, outbound stream closed");
        }

        Ok(ToolOutput::ok(serde_json::json!({
            "id": request_id,
            "documentId": document_id,
            "message": "Suggestions have been requested and will appear on the document.",
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn emits_suggestions_event_for_document() {
        let (tx, mut rx) = mpsc::channel(4);
        let tool = RequestSuggestionsTool::new(tx);
        let output = tool
            .invoke(serde_json::json!({"documentId": "doc-7"}))
            .await
            .unwrap();
        assert!(!output.is_error);

        match rx.recv().await.unwrap() {
            StreamEvent::Data { name, value } => {
                assert_eq!(name, "suggestions");
                assert_eq!(value["documentId"], "doc-7");
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_document_id_is_an_error_payload() {
        let (tx, _rx) = mpsc::channel(4);
        let tool = RequestSuggestionsTool::new(tx);
        let output = tool.invoke(serde_json::json!({})).await.unwrap();
        assert!(output.is_error);
    }
}
