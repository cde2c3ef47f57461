// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model catalog fetch and TTL cache.
//!
//! The catalog is a models.dev-style JSON document keyed by provider, each
//! carrying per-model pricing and context limits. It is reference data for
//! usage enrichment only: the pipeline works identically when it is absent,
//! so every failure path here degrades to `None` instead of propagating.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use intervu_config::CatalogConfig;
use intervu_core::IntervuError;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Per-model pricing in USD per million tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelCost {
    pub input: Option<f64>,
    pub output: Option<f64>,
}

/// Per-model token limits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelLimit {
    /// Context window, in tokens.
    pub context: Option<u32>,
    /// Maximum output tokens.
    pub output: Option<u32>,
}

/// Catalog entry for one concrete model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelInfo {
    pub cost: ModelCost,
    pub limit: ModelLimit,
}

/// One provider's model table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderInfo {
    pub models: HashMap<String, ModelInfo>,
}

/// The full catalog document, keyed by provider id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelCatalog {
    pub providers: HashMap<String, ProviderInfo>,
}

impl ModelCatalog {
    /// Finds a model by its concrete id, searching every provider.
    pub fn find_model(&self, model_id: &str) -> Option<&ModelInfo> {
        self.providers
            .values()
            .find_map(|provider| provider.models.get(model_id))
    }
}

/// Source of catalog documents. Injectable so tests can supply fixtures
/// without a network.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch(&self) -> Result<ModelCatalog, IntervuError>;
}

/// Default fetcher: HTTP GET of the configured catalog URL.
pub struct HttpCatalogFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl CatalogFetcher for HttpCatalogFetcher {
    async fn fetch(&self) -> Result<ModelCatalog, IntervuError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| IntervuError::CatalogUnavailable(format!("fetch failed: {e}")))?;

        if !response.status().is_success() {
            return Err(IntervuError::CatalogUnavailable(format!(
                "catalog endpoint returned HTTP {}",
                response.status()
            )));
        }

        response
            .json::<ModelCatalog>()
            .await
            .map_err(|e| IntervuError::CatalogUnavailable(format!("invalid catalog JSON: {e}")))
    }
}

struct CacheEntry {
    catalog: Arc<ModelCatalog>,
    fetched_at: Instant,
}

/// Process-wide catalog cache with a refresh window.
///
/// `get_or_fetch` returns the cached catalog while it is fresh and refetches
/// once it expires. A failed fetch is logged and returns `None` without
/// being cached, so the next call tries again. Concurrent callers serialize
/// on the internal mutex; a cold-start stampede collapsing into sequential
/// fetches is acceptable for reference data refreshed once a day.
pub struct CatalogCache {
    fetcher: Arc<dyn CatalogFetcher>,
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

impl CatalogCache {
    pub fn new(fetcher: Arc<dyn CatalogFetcher>, ttl: Duration) -> Self {
        Self {
            fetcher,
            ttl,
            entry: Mutex::new(None),
        }
    }

    /// Builds a cache with the default HTTP fetcher from configuration.
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(
            Arc::new(HttpCatalogFetcher::new(config.url.clone())),
            Duration::from_secs(config.ttl_secs),
        )
    }

    /// Returns the catalog, fetching if missing or stale. `None` means the
    /// catalog is unavailable right now; callers degrade to raw usage.
    pub async fn get_or_fetch(&self) -> Option<Arc<ModelCatalog>> {
        let mut entry = self.entry.lock().await;

        if let Some(cached) = entry.as_ref()
            && cached.fetched_at.elapsed() < self.ttl
        {
            return Some(Arc::clone(&cached.catalog));
        }

        match self.fetcher.fetch().await {
            Ok(catalog) => {
                let catalog = Arc::new(catalog);
                *entry = Some(CacheEntry {
                    catalog: Arc::clone(&catalog),
                    fetched_at: Instant::now(),
                });
                tracing::debug!(
                    providers = catalog.providers.len(),
                    "model catalog refreshed"
                );
                Some(catalog)
            }
            Err(e) => {
                tracing::warn!(error = %e, "model catalog fetch failed, continuing without it");
                // Keep serving a stale entry if we have one.
                entry
                    .as_ref()
                    .map(|cached| Arc::clone(&cached.catalog))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_catalog() -> serde_json::Value {
        serde_json::json!({
            "anthropic": {
                "models": {
                    "claude-sonnet-4": {
                        "cost": { "input": 3.0, "output": 15.0 },
                        "limit": { "context": 200000, "output": 64000 }
                    }
                }
            }
        })
    }

    struct CountingFetcher {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl CatalogFetcher for CountingFetcher {
        async fn fetch(&self) -> Result<ModelCatalog, IntervuError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(IntervuError::CatalogUnavailable("down".into()))
            } else {
                Ok(serde_json::from_value(sample_catalog()).unwrap())
            }
        }
    }

    #[tokio::test]
    async fn http_fetcher_parses_models_dev_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_catalog()))
            .mount(&server)
            .await;

        let fetcher = HttpCatalogFetcher::new(server.uri());
        let catalog = fetcher.fetch().await.unwrap();
        let model = catalog.find_model("claude-sonnet-4").unwrap();
        assert_eq!(model.cost.input, Some(3.0));
        assert_eq!(model.limit.context, Some(200_000));
    }

    #[tokio::test]
    async fn http_fetcher_maps_server_error_to_catalog_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let fetcher = HttpCatalogFetcher::new(server.uri());
        let err = fetcher.fetch().await.unwrap_err();
        assert!(matches!(err, IntervuError::CatalogUnavailable(_)));
    }

    #[tokio::test]
    async fn cache_serves_fresh_entry_without_refetching() {
        let fetcher = Arc::new(CountingFetcher {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let cache = CatalogCache::new(fetcher.clone(), Duration::from_secs(3600));

        assert!(cache.get_or_fetch().await.is_some());
        assert!(cache.get_or_fetch().await.is_some());
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cache_refetches_after_ttl_expiry() {
        let fetcher = Arc::new(CountingFetcher {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let cache = CatalogCache::new(fetcher.clone(), Duration::from_secs(60));

        assert!(cache.get_or_fetch().await.is_some());
        tokio::time::advance(Duration::from_secs(61)).await;
        assert!(cache.get_or_fetch().await.is_some());
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn fetch_failure_yields_none_and_retries_next_call() {
        let fetcher = Arc::new(CountingFetcher {
            calls: AtomicUsize::new(0),
            fail: true,
        });
        let cache = CatalogCache::new(fetcher.clone(), Duration::from_secs(3600));

        assert!(cache.get_or_fetch().await.is_none());
        assert!(cache.get_or_fetch().await.is_none());
        // Failure is not cached: every call retried the fetch.
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn find_model_searches_all_providers() {
        let catalog: ModelCatalog = serde_json::from_value(serde_json::json!({
            "a": { "models": { "m1": {} } },
            "b": { "models": { "m2": { "cost": { "input": 1.0 } } } }
        }))
        .unwrap();
        assert!(catalog.find_model("m1").is_some());
        assert_eq!(catalog.find_model("m2").unwrap().cost.input, Some(1.0));
        assert!(catalog.find_model("m3").is_none());
    }
}
