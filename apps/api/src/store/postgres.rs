use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::assessment::{Assessment, NewAssessment};
use crate::models::insight::{IndustryInsight, NewIndustryInsight};
use crate::models::user::{ProfileUpdate, User};
use crate::store::Store;

/// `Store` backed by PostgreSQL. Schema lives in `migrations/`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn find_user_by_subject(&self, subject_id: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE subject_id = $1")
            .bind(subject_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn upsert_user_profile(
        &self,
        subject_id: &str,
        profile: &ProfileUpdate,
    ) -> Result<User, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, subject_id, industry, experience, bio, skills)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (subject_id) DO UPDATE
            SET industry = EXCLUDED.industry,
                experience = EXCLUDED.experience,
                bio = EXCLUDED.bio,
                skills = EXCLUDED.skills,
                updated_at = now()
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(subject_id)
        .bind(&profile.industry)
        .bind(profile.experience)
        .bind(&profile.bio)
        .bind(&profile.skills)
        .fetch_one(&self.pool)
        .await?;

        info!("Saved profile for user {} (industry {})", user.id, profile.industry);
        Ok(user)
    }

    async fn find_insight(&self, industry: &str) -> Result<Option<IndustryInsight>, sqlx::Error> {
        sqlx::query_as::<_, IndustryInsight>("SELECT * FROM industry_insights WHERE industry = $1")
            .bind(industry)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create_insight(
        &self,
        insight: NewIndustryInsight,
    ) -> Result<IndustryInsight, sqlx::Error> {
        // The no-op update makes RETURNING yield the existing row when another
        // request created this industry first.
        let row = sqlx::query_as::<_, IndustryInsight>(
            r#"
            INSERT INTO industry_insights
                (id, industry, salary_ranges, growth_rate, demand_level, top_skills,
                 market_outlook, key_trends, recommended_skills, last_updated, next_update)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (industry) DO UPDATE SET industry = EXCLUDED.industry
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&insight.industry)
        .bind(Json(&insight.salary_ranges))
        .bind(insight.growth_rate)
        .bind(insight.demand_level)
        .bind(&insight.top_skills)
        .bind(insight.market_outlook)
        .bind(&insight.key_trends)
        .bind(&insight.recommended_skills)
        .bind(insight.last_updated)
        .bind(insight.next_update)
        .fetch_one(&self.pool)
        .await?;

        info!("Stored industry insight {} for '{}'", row.id, row.industry);
        Ok(row)
    }

    async fn create_assessment(
        &self,
        assessment: NewAssessment,
    ) -> Result<Assessment, sqlx::Error> {
        let row = sqlx::query_as::<_, Assessment>(
            r#"
            INSERT INTO assessments
                (id, user_id, quiz_score, questions, category, improvement_tip)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(assessment.user_id)
        .bind(assessment.quiz_score)
        .bind(Json(&assessment.questions))
        .bind(&assessment.category)
        .bind(&assessment.improvement_tip)
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted assessment {} for user {}", row.id, row.user_id);
        Ok(row)
    }

    async fn list_assessments(&self, user_id: Uuid) -> Result<Vec<Assessment>, sqlx::Error> {
        sqlx::query_as::<_, Assessment>(
            "SELECT * FROM assessments WHERE user_id = $1 ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }
}
