//! Axum route handlers for the Insights API.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::errors::AppError;
use crate::identity::Caller;
use crate::insights::generator::get_industry_insights;
use crate::models::insight::IndustryInsight;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct InsightResponse {
    #[serde(flatten)]
    pub insight: IndustryInsight,
    pub is_stale: bool,
}

/// GET /api/v1/insights
///
/// Insight for the caller's industry, generated on first request.
pub async fn handle_get_insights(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<InsightResponse>, AppError> {
    let insight = get_industry_insights(state.store.as_ref(), state.llm.as_ref(), &caller).await?;
    let is_stale = insight.is_stale(Utc::now());
    Ok(Json(InsightResponse { insight, is_stale }))
}
