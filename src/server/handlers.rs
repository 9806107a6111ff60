//! HTTP request handlers

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::datasets::DatasetSummary;
use crate::pipeline::{self, EvaluationConfig, FitResult, Selection};
use crate::training::{ClassifierKind, ModelMetrics, SliderSpec};

use super::error::{Result, ServerError};
use super::page::INDEX_HTML;
use super::state::AppState;

// ============================================================================
// System
// ============================================================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.uptime_secs(),
    }))
}

pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Serialize)]
pub struct DatasetsResponse {
    pub datasets: Vec<DatasetSummary>,
}

/// List the dataset catalog with shapes and class counts
pub async fn list_datasets(State(state): State<Arc<AppState>>) -> Result<Json<DatasetsResponse>> {
    let datasets = tokio::task::spawn_blocking(move || state.catalog().map(|c| c.to_vec()))
        .await
        .map_err(|e| ServerError::Internal(format!("catalog task failed: {}", e)))??;
    Ok(Json(DatasetsResponse { datasets }))
}

#[derive(Debug, Serialize)]
pub struct ClassifierInfo {
    pub name: &'static str,
    pub key: &'static str,
    pub sliders: Vec<SliderSpec>,
}

#[derive(Debug, Serialize)]
pub struct ClassifiersResponse {
    pub classifiers: Vec<ClassifierInfo>,
}

/// List the classifiers with the sliders each one exposes
pub async fn list_classifiers() -> Json<ClassifiersResponse> {
    let classifiers = ClassifierKind::ALL
        .into_iter()
        .map(|kind| ClassifierInfo {
            name: kind.display_name(),
            key: kind.key(),
            sliders: kind.sliders(),
        })
        .collect();
    Json(ClassifiersResponse { classifiers })
}

// ============================================================================
// Evaluation
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub dataset: String,
    pub classifier: String,
    /// Raw slider values keyed by slider name
    #[serde(default)]
    pub params: HashMap<String, f64>,
}

#[derive(Debug, Serialize)]
pub struct ProjectionBody {
    pub points: Vec<[f64; 2]>,
    pub labels: Vec<usize>,
    pub explained_variance_ratio: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub dataset: DatasetSummary,
    pub classifier: String,
    /// Parameters after clamping to slider bounds
    pub params: BTreeMap<String, f64>,
    pub accuracy: f64,
    pub metrics: ModelMetrics,
    pub projection: ProjectionBody,
    pub plot_svg: String,
}

impl EvaluateResponse {
    fn new(result: FitResult, plot_svg: String) -> Self {
        let points = result
            .projection
            .points
            .rows()
            .into_iter()
            .map(|r| [r[0], r[1]])
            .collect();

        Self {
            classifier: result.classifier().display_name().to_string(),
            params: result.params.to_map(),
            accuracy: result.accuracy(),
            metrics: result.metrics,
            projection: ProjectionBody {
                points,
                labels: result.projection.labels.to_vec(),
                explained_variance_ratio: result.projection.explained_variance_ratio,
            },
            dataset: result.dataset,
            plot_svg,
        }
    }
}

/// Fit and plot on a blocking thread; the work is CPU-bound
async fn run_evaluation(selection: Selection, config: EvaluationConfig) -> Result<(FitResult, String)> {
    tokio::task::spawn_blocking(move || {
        let result = pipeline::evaluate_with(&selection, &config)?;
        let svg = result.plot()?;
        Ok::<_, crate::error::VoyageError>((result, svg))
    })
    .await
    .map_err(|e| ServerError::Internal(format!("evaluation task failed: {}", e)))?
    .map_err(ServerError::from)
}

/// Run one evaluation pass for the submitted selection
pub async fn evaluate(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<EvaluateResponse>> {
    let Json(request) = payload?;
    let selection = Selection::from_raw(&request.dataset, &request.classifier, &request.params)?;
    info!(
        dataset = %selection.dataset,
        classifier = %selection.classifier(),
        params = %selection.params,
        "Evaluation requested"
    );

    let (result, svg) = run_evaluation(selection, state.evaluation.clone()).await?;
    Ok(Json(EvaluateResponse::new(result, svg)))
}

/// The scatter plot alone, selected through query parameters
pub async fn plot_svg(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse> {
    let mut query = query;
    let dataset = query
        .remove("dataset")
        .ok_or_else(|| ServerError::BadRequest("missing query parameter: dataset".to_string()))?;
    let classifier = query
        .remove("classifier")
        .ok_or_else(|| ServerError::BadRequest("missing query parameter: classifier".to_string()))?;

    let mut sliders = HashMap::with_capacity(query.len());
    for (name, raw) in query {
        let value: f64 = raw
            .parse()
            .map_err(|_| ServerError::BadRequest(format!("{} must be a number, got {:?}", name, raw)))?;
        sliders.insert(name, value);
    }

    let selection = Selection::from_raw(&dataset, &classifier, &sliders)?;
    let (_, svg) = run_evaluation(selection, state.evaluation.clone()).await?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}
