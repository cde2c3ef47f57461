// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token-usage reconciliation.
//!
//! Merges raw per-turn token counters with catalog pricing and context-limit
//! data. Enrichment is strictly best-effort: when the model id cannot be
//! resolved, the catalog is missing, or the model is not listed, the raw
//! counters pass through unchanged.

use intervu_core::{AppUsage, TokenUsage};

use crate::catalog::ModelCatalog;

const MTOK: f64 = 1_000_000.0;

/// Enriches raw usage with cost and context-window data.
///
/// `model_id` is the concrete provider model id resolved from the UI alias;
/// `None` means resolution failed and the raw record is returned as-is.
pub fn reconcile(
    raw: TokenUsage,
    model_id: Option<&str>,
    catalog: Option<&ModelCatalog>,
) -> AppUsage {
    let Some(model_id) = model_id else {
        return AppUsage::from(raw);
    };
    let Some(catalog) = catalog else {
        return AppUsage::from(raw);
    };
    let Some(info) = catalog.find_model(model_id) else {
        tracing::warn!(model_id = %model_id, "model not in catalog, emitting raw usage");
        return AppUsage::from(raw);
    };

    let cost_usd = match (info.cost.input, info.cost.output) {
        (Some(input), Some(output)) => Some(
            (f64::from(raw.input_tokens) / MTOK) * input
                + (f64::from(raw.output_tokens) / MTOK) * output,
        ),
        _ => None,
    };

    let context_window = info.limit.context;
    let context_used_fraction = context_window
        .filter(|&window| window > 0)
        .map(|window| f64::from(raw.total_tokens) / f64::from(window));

    let mut usage = AppUsage::from(raw);
    usage.model_id = Some(model_id.to_string());
    usage.cost_usd = cost_usd;
    usage.context_window = context_window;
    usage.context_used_fraction = context_used_fraction;
    usage
}
