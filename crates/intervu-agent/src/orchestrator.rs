// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stream orchestrator: one turn, one outbound event stream.
//!
//! Per-turn flow is strictly sequential: classify, select an agent, then
//! generate. Generation chunks are forwarded to the outbound channel as they
//! arrive, with word-boundary smoothing as the only buffering. Tool calls
//! run inline between generation steps, bounded by the configured step cap.
//! On finish the reconciled usage goes out as a single `data-usage` event,
//! then the finalize callback fires exactly once.
//!
//! Cancellation: dropping the [`TurnStream`] cancels the producer task mid
//! await. Nothing runs after the cancellation point, so neither the usage
//! event nor finalize can fire for an abandoned turn.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::{Stream, StreamExt};
use intervu_config::IntervuConfig;
use intervu_core::{
    ChatMessage, FinalizeOutcome, GenerationRequest, IntervuError, LanguageModel,
    ModelStreamChunk, SessionContext, StreamEvent, TokenUsage,
};
use intervu_router::{classify_intent, AgentKind};
use intervu_skill::ToolOutput;
use intervu_usage::{reconcile, CatalogCache};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::agents::{build_agent, AgentSpec};
use crate::smooth::WordSmoother;

/// Fallback user-facing text when no `on_error` hook is installed.
const GENERIC_ERROR_MESSAGE: &str = "Oops, an error occurred!";

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Persistence callback, invoked once per completed turn.
pub type FinalizeFn = Arc<dyn Fn(FinalizeOutcome) -> BoxFuture<()> + Send + Sync>;

/// Maps a stream-level failure to the user-facing error text.
pub type OnErrorFn = Arc<dyn Fn(&IntervuError) -> String + Send + Sync>;

/// Collaborators a turn runs against.
#[derive(Clone)]
pub struct TurnDeps {
    pub model: Arc<dyn LanguageModel>,
    pub catalog: Arc<CatalogCache>,
    pub config: Arc<IntervuConfig>,
    pub finalize: Option<FinalizeFn>,
    pub on_error: Option<OnErrorFn>,
}

/// One inbound conversational turn.
#[derive(Clone)]
pub struct TurnRequest {
    /// UI model alias (`chat-model` or `chat-model-reasoning`).
    pub selected_model: String,
    /// Full history including the new user message.
    pub messages: Vec<ChatMessage>,
    pub session: SessionContext,
}

/// Outbound event stream for one turn. Dropping it cancels the turn.
#[derive(Debug)]
pub struct TurnStream {
    receiver: mpsc::Receiver<StreamEvent>,
    cancel: CancellationToken,
}

impl TurnStream {
    /// Cancels the producing turn without dropping the stream.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Stream for TurnStream {
    type Item = StreamEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<StreamEvent>> {
        self.receiver.poll_recv(cx)
    }
}

impl Drop for TurnStream {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Classifies the turn, selects an agent, and starts generation.
///
/// Classification failure falls back to the general agent internally; the
/// only error surfaced here is [`IntervuError::NoUserMessage`], which aborts
/// the turn before any generation starts.
pub async fn create_turn_stream(
    deps: TurnDeps,
    request: TurnRequest,
) -> Result<TurnStream, IntervuError> {
    let classification = classify_intent(deps.model.as_ref(), &request.messages).await?;
    let kind = AgentKind::from_classification(&classification);

    info!(
        agent = %kind,
        model = %request.selected_model,
        chat_id = request.session.chat_id.as_deref().unwrap_or("-"),
        "turn routed"
    );

    let (tx, rx) = mpsc::channel(64);
    let cancel = CancellationToken::new();
    let task_cancel = cancel.clone();

    tokio::spawn(async move {
        tokio::select! {
            _ = task_cancel.cancelled() => {
                debug!(agent = %kind, "turn cancelled by consumer");
            }
            _ = run_turn(deps, request, kind, tx) => {}
        }
    });

    Ok(TurnStream { receiver: rx, cancel })
}

/// Drives one turn to completion. Returns early (skipping finalize) only
/// when the consumer is gone.
async fn run_turn(
    deps: TurnDeps,
    request: TurnRequest,
    kind: AgentKind,
    tx: mpsc::Sender<StreamEvent>,
) {
    let spec = build_agent(kind, &request.selected_model, &deps.config, tx.clone());
    let mut working = spec.prepare_history(&request.messages, &deps.config);
    let tool_definitions = spec.tools.definitions();

    let mut assistant_text = String::new();
    let mut total_usage: Option<TokenUsage> = None;
    let max_steps = spec.max_steps.max(1);

    for step in 1..=max_steps {
        // The last step runs without tools to force a final answer.
        let offered_tools = if step == max_steps {
            Vec::new()
        } else {
            tool_definitions.clone()
        };

        let generation = GenerationRequest {
            model: request.selected_model.clone(),
            system_prompt: spec.system_prompt.clone(),
            messages: working.clone(),
            tools: offered_tools,
        };

        let stream = match deps.model.stream(generation).await {
            Ok(s) => s,
            Err(e) => {
                finish_with_error(&deps, &tx, assistant_text, e).await;
                return;
            }
        };

        let step_outcome = match consume_step(stream, &spec, &tx).await {
            Ok(outcome) => outcome,
            Err(StepAbort::ConsumerGone) => return,
            Err(StepAbort::Generation(e)) => {
                finish_with_error(&deps, &tx, assistant_text, e).await;
                return;
            }
        };

        assistant_text.push_str(&step_outcome.text);
        total_usage = Some(add_usage(total_usage, step_outcome.usage));

        if step_outcome.tool_calls.is_empty() {
            break;
        }

        // Feed the model its own text and the tool results, then re-invoke.
        if !step_outcome.text.is_empty() {
            working.push(ChatMessage::assistant(step_outcome.text.clone()));
        }
        for call in step_outcome.tool_calls {
            let output = invoke_tool(&spec, &call).await;
            let event = StreamEvent::ToolResult {
                id: call.id.clone(),
                name: call.name.clone(),
                output: output.content.clone(),
            };
            if tx.send(event).await.is_err() {
                return;
            }
            working.push(tool_feedback_message(&call.name, &output));
        }
    }

    // Usage reconciliation, fail-open at every stage.
    let raw = total_usage.unwrap_or_default();
    let model_id = deps.model.resolve_model_id(&request.selected_model);
    let catalog = deps.catalog.get_or_fetch().await;
    let usage = reconcile(raw, model_id.as_deref(), catalog.as_deref());

    match serde_json::to_value(&usage) {
        Ok(value) => {
            let event = StreamEvent::Data {
                name: "usage".to_string(),
                value,
            };
            if tx.send(event).await.is_err() {
                return;
            }
        }
        Err(e) => warn!(error = %e, "failed to serialize usage event"),
    }

    if tx.send(StreamEvent::Finish).await.is_err() {
        return;
    }

    // tx stays alive until finalize completes, so the consumer observes the
    // channel close only after the turn is fully finalized.
    let messages = if assistant_text.is_empty() {
        Vec::new()
    } else {
        vec![ChatMessage::assistant(assistant_text)]
    };
    if let Some(finalize) = &deps.finalize {
        finalize(FinalizeOutcome {
            messages,
            usage: Some(usage),
        })
        .await;
    }
}

struct PendingToolCall {
    id: String,
    name: String,
    input: serde_json::Value,
}

struct StepOutcome {
    text: String,
    usage: Option<TokenUsage>,
    tool_calls: Vec<PendingToolCall>,
}

enum StepAbort {
    ConsumerGone,
    Generation(IntervuError),
}

/// Consumes one generation stream, forwarding chunks as they arrive.
async fn consume_step(
    mut stream: intervu_core::BoxChunkStream,
    spec: &AgentSpec,
    tx: &mpsc::Sender<StreamEvent>,
) -> Result<StepOutcome, StepAbort> {
    let mut smoother = spec.smooth_output.then(WordSmoother::new);
    let mut text = String::new();
    let mut usage = None;
    let mut tool_calls = Vec::new();

    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(ModelStreamChunk::TextDelta { text: delta }) => {
                text.push_str(&delta);
                match &mut smoother {
                    Some(smoother) => {
                        for word in smoother.push(&delta) {
                            send(tx, StreamEvent::TextDelta { text: word }).await?;
                        }
                    }
                    None => {
                        send(tx, StreamEvent::TextDelta { text: delta }).await?;
                    }
                }
            }
            Ok(ModelStreamChunk::ReasoningDelta { text: delta }) => {
                send(tx, StreamEvent::ReasoningDelta { text: delta }).await?;
            }
            Ok(ModelStreamChunk::ToolUse { id, name, input }) => {
                send(
                    tx,
                    StreamEvent::ToolCall {
                        id: id.clone(),
                        name: name.clone(),
                        input: input.clone(),
                    },
                )
                .await?;
                tool_calls.push(PendingToolCall { id, name, input });
            }
            Ok(ModelStreamChunk::Finish {
                usage: step_usage,
                stop_reason,
            }) => {
                debug!(
                    stop_reason = stop_reason.as_deref().unwrap_or("-"),
                    output_tokens = step_usage.output_tokens,
                    "generation step finished"
                );
                usage = Some(step_usage);
            }
            Ok(ModelStreamChunk::Error { message }) => {
                return Err(StepAbort::Generation(IntervuError::provider(message)));
            }
            Err(e) => return Err(StepAbort::Generation(e)),
        }
    }

    if let Some(smoother) = &mut smoother
        && let Some(tail) = smoother.flush()
    {
        send(tx, StreamEvent::TextDelta { text: tail }).await?;
    }

    Ok(StepOutcome {
        text,
        usage,
        tool_calls,
    })
}

async fn send(tx: &mpsc::Sender<StreamEvent>, event: StreamEvent) -> Result<(), StepAbort> {
    tx.send(event).await.map_err(|_| StepAbort::ConsumerGone)
}

/// Invokes a requested tool. Unknown tools and tool failures become error
/// payloads the model can react to; they never abort the turn.
async fn invoke_tool(spec: &AgentSpec, call: &PendingToolCall) -> ToolOutput {
    let Some(tool) = spec.tools.get(&call.name) else {
        warn!(tool = %call.name, "model requested unknown tool");
        return ToolOutput::error(format!("unknown tool '{}'", call.name));
    };

    match tool.invoke(call.input.clone()).await {
        Ok(output) => output,
        Err(e) => {
            warn!(tool = %call.name, error = %e, "tool invocation failed");
            ToolOutput::error(format!("tool '{}' failed", call.name))
        }
    }
}

/// Turns a tool output into the history message the next step generates from.
fn tool_feedback_message(name: &str, output: &ToolOutput) -> ChatMessage {
    let payload = output.content.to_string();
    let text = if output.is_error {
        format!("工具 {name} 执行失败：{payload}")
    } else {
        format!("工具 {name} 返回结果：{payload}")
    };
    ChatMessage::user(text)
}

/// Emits the single user-facing error event and closes the stream. The
/// message comes from the `on_error` hook; internal error text never leaks.
async fn finish_with_error(
    deps: &TurnDeps,
    tx: &mpsc::Sender<StreamEvent>,
    assistant_text: String,
    error: IntervuError,
) {
    warn!(error = %error, "generation failed, closing stream");

    let message = match &deps.on_error {
        Some(hook) => hook(&error),
        None => GENERIC_ERROR_MESSAGE.to_string(),
    };

    if tx.send(StreamEvent::Error { message }).await.is_err() {
        return;
    }
    if tx.send(StreamEvent::Finish).await.is_err() {
        return;
    }

    let messages = if assistant_text.is_empty() {
        Vec::new()
    } else {
        vec![ChatMessage::assistant(assistant_text)]
    };
    if let Some(finalize) = &deps.finalize {
        finalize(FinalizeOutcome {
            messages,
            usage: None,
        })
        .await;
    }
}

fn add_usage(total: Option<TokenUsage>, step: Option<TokenUsage>) -> TokenUsage {
    let total = total.unwrap_or_default();
    let step = step.unwrap_or_default();
    TokenUsage {
        input_tokens: total.input_tokens + step.input_tokens,
        output_tokens: total.output_tokens + step.output_tokens,
        total_tokens: total.total_tokens + step.total_tokens,
    }
}
