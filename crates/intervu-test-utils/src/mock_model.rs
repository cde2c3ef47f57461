// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock language model for deterministic testing.
//!
//! `MockModel` implements [`LanguageModel`] with scripted responses popped
//! from FIFO queues. Stream scripts, structured outputs, and model id
//! mappings are all pre-configured; every received request is recorded for
//! later assertions.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use futures::stream;

use intervu_core::{
    BoxChunkStream, GenerationRequest, IntervuError, LanguageModel, ModelStreamChunk, TokenUsage,
};

/// A scripted response for one `stream()` call.
pub enum StreamScript {
    /// Emit the given chunks, then end.
    Chunks(Vec<Result<ModelStreamChunk, IntervuError>>),
    /// Fail the `stream()` call itself.
    Fail(IntervuError),
    /// Emit the given chunks, then never complete. Used for cancellation
    /// tests.
    Stall(Vec<Result<ModelStreamChunk, IntervuError>>),
}

/// A mock LLM that returns pre-configured responses.
///
/// Scripts are popped in FIFO order. When the stream queue is empty, a
/// default single-delta response with 10/20 token usage is produced.
pub struct MockModel {
    stream_scripts: Mutex<VecDeque<StreamScript>>,
    structured_scripts: Mutex<VecDeque<Result<serde_json::Value, IntervuError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
    structured_prompts: Mutex<Vec<String>>,
    model_ids: HashMap<String, String>,
}

impl MockModel {
    /// Creates a mock with empty script queues and no model id mappings.
    pub fn new() -> Self {
        Self {
            stream_scripts: Mutex::new(VecDeque::new()),
            structured_scripts: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            structured_prompts: Mutex::new(Vec::new()),
            model_ids: HashMap::new(),
        }
    }

    /// Registers an alias -> concrete model id mapping for
    /// `resolve_model_id`.
    pub fn with_model_id(mut self, alias: &str, id: &str) -> Self {
        self.model_ids.insert(alias.to_string(), id.to_string());
        self
    }

    /// Queues a successful stream of the given chunks.
    pub fn push_stream(&self, chunks: Vec<ModelStreamChunk>) {
        self.stream_scripts
            .lock()
            .unwrap()
            .push_back(StreamScript::Chunks(chunks.into_iter().map(Ok).collect()));
    }

    /// Queues a raw stream script.
    pub fn push_script(&self, script: StreamScript) {
        self.stream_scripts.lock().unwrap().push_back(script);
    }

    /// Queues a simple text response: one delta with the given text followed
    /// by a finish chunk.
    pub fn push_text(&self, text: &str) {
        self.push_stream(vec![
            ModelStreamChunk::TextDelta {
                text: text.to_string(),
            },
            ModelStreamChunk::Finish {
                usage: TokenUsage::new(10, 20),
                stop_reason: Some("stop".to_string()),
            },
        ]);
    }

    /// Queues a structured-output result.
    pub fn push_structured(&self, value: serde_json::Value) {
        self.structured_scripts.lock().unwrap().push_back(Ok(value));
    }

    /// Queues a structured-output failure.
    pub fn push_structured_error(&self, error: IntervuError) {
        self.structured_scripts
            .lock()
            .unwrap()
            .push_back(Err(error));
    }

    /// Returns all generation requests received so far.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Returns all structured-output prompts received so far.
    pub fn structured_prompts(&self) -> Vec<String> {
        self.structured_prompts.lock().unwrap().clone()
    }

    fn default_chunks() -> Vec<Result<ModelStreamChunk, IntervuError>> {
        vec![
            Ok(ModelStreamChunk::TextDelta {
                text: "mock response".to_string(),
            }),
            Ok(ModelStreamChunk::Finish {
                usage: TokenUsage::new(10, 20),
                stop_reason: Some("stop".to_string()),
            }),
        ]
    }
}

impl Default for MockModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LanguageModel for MockModel {
    async fn stream(&self, request: GenerationRequest) -> Result<BoxChunkStream, IntervuError> {
        self.requests.lock().unwrap().push(request);

        let script = self.stream_scripts.lock().unwrap().pop_front();
        match script {
            Some(StreamScript::Chunks(chunks)) => Ok(Box::pin(stream::iter(chunks))),
            Some(StreamScript::Fail(error)) => Err(error),
            Some(StreamScript::Stall(chunks)) => Ok(Box::pin(
                futures::StreamExt::chain(stream::iter(chunks), stream::pending()),
            )),
            None => Ok(Box::pin(stream::iter(Self::default_chunks()))),
        }
    }

    async fn generate_structured(
        &self,
        _system_prompt: &str,
        prompt: &str,
        _schema: &serde_json::Value,
    ) -> Result<serde_json::Value, IntervuError> {
        self.structured_prompts
            .lock()
            .unwrap()
            .push(prompt.to_string());

        self.structured_scripts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(IntervuError::provider(
                    "mock model has no structured output queued",
                ))
            })
    }

    fn resolve_model_id(&self, selected: &str) -> Option<String> {
        self.model_ids.get(selected).cloned()
    }
}
