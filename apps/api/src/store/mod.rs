//! Persistence Gateway: record reads/writes for users, industry insights and
//! assessments.
//!
//! Flows only see the `Store` trait. `AppState` carries an `Arc<dyn Store>`;
//! production uses `PgStore`, tests use the generated `MockStore`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::assessment::{Assessment, NewAssessment};
use crate::models::insight::{IndustryInsight, NewIndustryInsight};
use crate::models::user::{ProfileUpdate, User};

pub mod postgres;

pub use postgres::PgStore;

/// Reads return `None` on a miss. Writes either create or fail.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    async fn find_user_by_subject(&self, subject_id: &str) -> Result<Option<User>, sqlx::Error>;

    /// Creates the user on first onboarding, otherwise overwrites the profile fields.
    async fn upsert_user_profile(
        &self,
        subject_id: &str,
        profile: &ProfileUpdate,
    ) -> Result<User, sqlx::Error>;

    async fn find_insight(&self, industry: &str) -> Result<Option<IndustryInsight>, sqlx::Error>;

    /// At most one row per industry. A concurrent duplicate returns the row that won.
    async fn create_insight(
        &self,
        insight: NewIndustryInsight,
    ) -> Result<IndustryInsight, sqlx::Error>;

    async fn create_assessment(&self, assessment: NewAssessment)
        -> Result<Assessment, sqlx::Error>;

    /// Oldest first.
    async fn list_assessments(&self, user_id: Uuid) -> Result<Vec<Assessment>, sqlx::Error>;
}
