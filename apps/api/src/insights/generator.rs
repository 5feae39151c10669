//! Insight generation: prompt → LLM → sanitize/parse → persist.
//!
//! An industry goes `Missing → Generated` exactly once. Existing rows are
//! returned as-is, even when `next_update` has passed.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::identity::{resolve_user, Caller};
use crate::insights::prompts::{INSIGHTS_PROMPT_TEMPLATE, INSIGHTS_SYSTEM, INSIGHTS_TEMPERATURE};
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::sanitize::null_as_default;
use crate::llm_client::{complete_json, CompletionOptions, CompletionProvider};
use crate::models::insight::{
    next_refresh, DemandLevel, IndustryInsight, MarketOutlook, NewIndustryInsight, SalaryRange,
};
use crate::store::Store;

/// Shape the model is asked to return. Every field tolerates absence and `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedInsights {
    #[serde(default, deserialize_with = "null_as_default")]
    pub salary_ranges: Vec<SalaryRange>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub growth_rate: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub demand_level: DemandLevel,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub market_outlook: MarketOutlook,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_trends: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommended_skills: Vec<String>,
}

impl GeneratedInsights {
    pub fn into_new_insight(self, industry: &str, now: DateTime<Utc>) -> NewIndustryInsight {
        NewIndustryInsight {
            industry: industry.to_string(),
            salary_ranges: self.salary_ranges,
            growth_rate: self.growth_rate,
            demand_level: self.demand_level,
            top_skills: self.top_skills,
            market_outlook: self.market_outlook,
            key_trends: self.key_trends,
            recommended_skills: self.recommended_skills,
            last_updated: now,
            next_update: next_refresh(now),
        }
    }
}

pub fn build_insights_prompt(industry: &str) -> String {
    INSIGHTS_PROMPT_TEMPLATE
        .replace("{industry}", industry)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
}

/// Asks the LLM for a fresh snapshot of `industry`. Nothing is persisted here.
pub async fn generate_ai_insights(
    llm: &dyn CompletionProvider,
    industry: &str,
) -> Result<GeneratedInsights, AppError> {
    let prompt = build_insights_prompt(industry);
    let options = CompletionOptions::with_temperature(INSIGHTS_TEMPERATURE).system(INSIGHTS_SYSTEM);
    Ok(complete_json::<GeneratedInsights>(llm, &prompt, options).await?)
}

/// Returns the stored insight for `industry`, generating and storing it first if missing.
pub async fn ensure_insight(
    store: &dyn Store,
    llm: &dyn CompletionProvider,
    industry: &str,
) -> Result<IndustryInsight, AppError> {
    if let Some(existing) = store.find_insight(industry).await? {
        return Ok(existing);
    }

    info!("No insight stored for '{industry}', generating");
    let generated = generate_ai_insights(llm, industry).await?;
    let insight = store
        .create_insight(generated.into_new_insight(industry, Utc::now()))
        .await?;

    info!(
        "Insight for '{}' generated, next update due {}",
        insight.industry, insight.next_update
    );
    Ok(insight)
}

/// Insight for the caller's industry.
pub async fn get_industry_insights(
    store: &dyn Store,
    llm: &dyn CompletionProvider,
    caller: &Caller,
) -> Result<IndustryInsight, AppError> {
    let user = resolve_user(caller, store).await?;
    let industry = user
        .industry
        .as_deref()
        .filter(|i| !i.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Complete onboarding to choose an industry".to_string()))?;

    ensure_insight(store, llm, industry).await
}
