pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::insights::handlers as insights;
use crate::interview::handlers as interview;
use crate::onboarding::handlers as onboarding;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Insights API
        .route("/api/v1/insights", get(insights::handle_get_insights))
        // Interview API
        .route("/api/v1/interview/quiz", post(interview::handle_generate_quiz))
        .route(
            "/api/v1/interview/assessments",
            get(interview::handle_list_assessments).post(interview::handle_save_quiz_result),
        )
        // Onboarding API
        .route(
            "/api/v1/onboarding/status",
            get(onboarding::handle_onboarding_status),
        )
        .route(
            "/api/v1/onboarding/profile",
            put(onboarding::handle_update_profile),
        )
        .with_state(state)
}
