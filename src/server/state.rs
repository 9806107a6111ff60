//! Application state management

use std::sync::OnceLock;

use chrono::{DateTime, Utc};

use crate::datasets::{self, DatasetName, DatasetSummary};
use crate::error::Result;
use crate::pipeline::EvaluationConfig;

use super::ServerConfig;

/// Application state shared across handlers.
///
/// Nothing here changes between requests; every evaluation is recomputed
/// from the selection alone.
pub struct AppState {
    pub config: ServerConfig,
    pub evaluation: EvaluationConfig,
    pub started_at: DateTime<Utc>,
    catalog: OnceLock<Vec<DatasetSummary>>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            evaluation: EvaluationConfig::default(),
            started_at: Utc::now(),
            catalog: OnceLock::new(),
        }
    }

    /// Summaries of every dataset, loaded on first use
    pub fn catalog(&self) -> Result<&[DatasetSummary]> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(catalog);
        }
        let summaries = DatasetName::ALL
            .into_iter()
            .map(|name| datasets::load(name).map(|d| d.summary()))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.catalog.get_or_init(|| summaries))
    }

    pub fn uptime_secs(&self) -> i64 {
        Utc::now().signed_duration_since(self.started_at).num_seconds()
    }
}
