use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    /// Subject id issued by the identity provider.
    pub subject_id: String,
    pub email: Option<String>,
    pub industry: Option<String>,
    pub experience: Option<i32>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// A user counts as onboarded once an industry has been chosen.
    pub fn is_onboarded(&self) -> bool {
        self.industry
            .as_deref()
            .is_some_and(|industry| !industry.trim().is_empty())
    }
}

/// Profile fields written at onboarding. Already normalized when it reaches the store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileUpdate {
    pub industry: String,
    pub experience: Option<i32>,
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}
