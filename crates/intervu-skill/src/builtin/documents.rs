// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document create/update tools.
//!
//! These tools drive the artifact panel on the client: they emit `data`
//! events on the outbound stream describing the document action, and return
//! a small acknowledgement payload to the model. Document content itself is
//! generated by the model in the turn; persistence lives outside the core.

use async_trait::async_trait;
use intervu_core::{IntervuError, StreamEvent};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::tool::{Tool, ToolOutput};

const DOCUMENT_KINDS: &[&str] = &["text", "code", "sheet"];

/// Creates a new document artifact.
pub struct CreateDocumentTool {
    events: mpsc::Sender<StreamEvent>,
}

impl CreateDocumentTool {
    pub fn new(events: mpsc::Sender<StreamEvent>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl Tool for CreateDocumentTool {
    fn name(&self) -> &str {
        "create_document"
    }

    fn description(&self) -> &str {
        "Create a document for writing or content creation activities"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "Title of the document"
                },
                "kind": {
                    "type": "string",
                    "enum": DOCUMENT_KINDS,
                    "description": "Kind of document to create"
                }
            },
            "required": ["title", "kind"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, IntervuError> {
        let title = match input["title"].as_str() {
            Some(t) => t.to_string(),
            None => return Ok(ToolOutput::error("missing required 'title' parameter")),
        };
        let kind = input["kind"].as_str().unwrap_or("text").to_string();
        if !DOCUMENT_KINDS.contains(&kind.as_str()) {
            return Ok(ToolOutput::error(format!("unknown document kind '{kind}'")));
        }

        let id = Uuid::new_v4().to_string();
        let event = StreamEvent::Data {
            name: "document".to_string(),
            value: serde_json::json!({
                "action": "create",
                "id": id,
                "title": title,
                "kind": kind,
            }),
        };
        if self.events.send(event).await.is_err() {
            tracing::debug!("document event dropped, outbound stream closed");
        }

        Ok(ToolOutput::ok(serde_json::json!({
            "id": id,
            "title": title,
            "kind": kind,
            "content": "A document was created and is now visible to the user.",
        })))
    }
}

/// Updates an existing document artifact.
pub struct UpdateDocumentTool {
    events: mpsc::Sender<StreamEvent>,
}

impl UpdateDocumentTool {
    pub fn new(events: mpsc::Sender<StreamEvent>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl Tool for UpdateDocumentTool {
    fn name(&self) -> &str {
        "update_document"
    }

    fn description(&self) -> &str {
        "Update a document with the given description of changes"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "ID of the document to update"
                },
                "description": {
                    "type": "string",
                    "description": "Description of the changes to make"
                }
            },
            "required": ["id", "description"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, IntervuError> {
        let id = match input["id"].as_str() {
            Some(v) => v.to_string(),
            None => return Ok(ToolOutput::error("missing required 'id' parameter")),
        };
        let description = match input["description"].as_str() {
            Some(v) => v.to_string(),
            None => {
                return Ok(ToolOutput::error(
                    "missing required 'description' parameter",
                ));
            }
        };

        let event = StreamEvent::Data {
            name: "document".to_string(),
            value: serde_json::json!({
                "action": "update",
                "id": id,
                "description": description,
            }),
        };
        if self.events.send(event).await.is_err() {
            tracing::debug!("document event dropped, outbound stream closed");
        }

        Ok(ToolOutput::ok(serde_json::json!({
            "id": id,
            "message": "The document has been updated.",
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_emits_data_event_and_acks() {
        let (tx, mut rx) = mpsc::channel(4);
        let tool = CreateDocumentTool::new(tx);
        let output = tool
            .invoke(serde_json::json!({"title": "面试准备清单", "kind": "text"}))
            .await
            .unwrap();
        assert!(!output.is_error);

        let event = rx.recv().await.unwrap();
        match event {
            StreamEvent::Data { name, value } => {
                assert_eq!(name, "document");
                assert_eq!(value["action"], "create");
                assert_eq!(value["title"], "面试准备清单");
                assert_eq!(value["id"], output.content["id"]);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_rejects_unknown_kind() {
        let (tx, _rx) = mpsc::channel(4);
        let tool = CreateDocumentTool::new(tx);
        let output = tool
            .invoke(serde_json::json!({"title": "t", "kind": "video"}))
            .await
            .unwrap();
        assert!(output.is_error);
    }

    #[tokio::test]
    async fn update_emits_data_event() {
        let (tx, mut rx) = mpsc::channel(4);
        let tool = UpdateDocumentTool::new(tx);
        let output = tool
            .invoke(serde_json::json!({"id": "doc-1", "description": "tighten wording"}))
            .await
            .unwrap();
        assert!(!output.is_error);

        let event = rx.recv().await.unwrap();
        match event {
            StreamEvent::Data { name, value } => {
                assert_eq!(name, "document");
                assert_eq!(value["action"], "update");
                assert_eq!(value["id"], "doc-1");
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn closed_channel_does_not_fail_the_invocation() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let tool = UpdateDocumentTool::new(tx);
        let output = tool
            .invoke(serde_json::json!({"id": "doc-1", "description": "x"}))
            .await
            .unwrap();
        assert!(!output.is_error);
    }
}
