//! Axum route handlers for the Onboarding API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::errors::AppError;
use crate::identity::Caller;
use crate::models::user::{ProfileUpdate, User};
use crate::onboarding::profile::{onboarding_status, update_profile, OnboardingStatus};
use crate::state::AppState;

/// GET /api/v1/onboarding/status
pub async fn handle_onboarding_status(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<OnboardingStatus>, AppError> {
    Ok(Json(onboarding_status(state.store.as_ref(), &caller).await?))
}

/// PUT /api/v1/onboarding/profile
///
/// Identity is checked before the body is looked at.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<Json<ProfileUpdate>, JsonRejection>,
) -> Result<Json<User>, AppError> {
    caller.require()?;
    let Json(profile) = body?;
    let user = update_profile(state.store.as_ref(), state.llm.as_ref(), &caller, profile).await?;
    Ok(Json(user))
}
