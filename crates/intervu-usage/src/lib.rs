// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Usage reconciliation for Intervu.
//!
//! [`CatalogCache`] keeps a TTL-cached copy of an external model catalog;
//! [`reconcile`] merges a turn's raw token counters with catalog pricing and
//! context limits. Both fail open: a missing catalog degrades enrichment,
//! never the turn.

pub mod catalog;
pub mod reconcile;

pub use catalog::{
    CatalogCache, CatalogFetcher, HttpCatalogFetcher, ModelCatalog, ModelCost, ModelInfo,
    ModelLimit, ProviderInfo,
};
pub use reconcile::reconcile;
