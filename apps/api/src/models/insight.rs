use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::llm_client::sanitize::null_as_default;

/// Insights are regenerated weekly; the row records when the next refresh is due.
pub const INSIGHT_REFRESH_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "demand_level", rename_all = "UPPERCASE")]
pub enum DemandLevel {
    #[serde(alias = "High", alias = "high")]
    High,
    #[default]
    #[serde(alias = "Medium", alias = "medium")]
    Medium,
    #[serde(alias = "Low", alias = "low")]
    Low,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "market_outlook", rename_all = "UPPERCASE")]
pub enum MarketOutlook {
    #[serde(alias = "Positive", alias = "positive")]
    Positive,
    #[default]
    #[serde(alias = "Neutral", alias = "neutral")]
    Neutral,
    #[serde(alias = "Negative", alias = "negative")]
    Negative,
}

/// Salary band for one role, as reported by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub role: String,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct IndustryInsight {
    pub id: Uuid,
    pub industry: String,
    pub salary_ranges: Json<Vec<SalaryRange>>,
    /// Percentage, e.g. `7.5` for 7.5%.
    pub growth_rate: f64,
    pub demand_level: DemandLevel,
    pub top_skills: Vec<String>,
    pub market_outlook: MarketOutlook,
    pub key_trends: Vec<String>,
    pub recommended_skills: Vec<String>,
    pub last_updated: DateTime<Utc>,
    pub next_update: DateTime<Utc>,
}

impl IndustryInsight {
    /// Past its refresh date. Nothing regenerates on read; callers may surface this.
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        now > self.next_update
    }
}

/// Insert payload for `industry_insights`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIndustryInsight {
    pub industry: String,
    pub salary_ranges: Vec<SalaryRange>,
    pub growth_rate: f64,
    pub demand_level: DemandLevel,
    pub top_skills: Vec<String>,
    pub market_outlook: MarketOutlook,
    pub key_trends: Vec<String>,
    pub recommended_skills: Vec<String>,
    pub last_updated: DateTime<Utc>,
    pub next_update: DateTime<Utc>,
}

pub fn next_refresh(from: DateTime<Utc>) -> DateTime<Utc> {
    from + Duration::days(INSIGHT_REFRESH_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn insight(next_update: DateTime<Utc>) -> IndustryInsight {
        IndustryInsight {
            id: Uuid::new_v4(),
            industry: "tech-software-development".to_string(),
            salary_ranges: Json(vec![]),
            growth_rate: 5.0,
            demand_level: DemandLevel::High,
            top_skills: vec![],
            market_outlook: MarketOutlook::Positive,
            key_trends: vec![],
            recommended_skills: vec![],
            last_updated: next_update - Duration::days(INSIGHT_REFRESH_DAYS),
            next_update,
        }
    }

    #[test]
    fn test_next_refresh_is_seven_days_out() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        assert_eq!(
            next_refresh(now),
            Utc.with_ymd_and_hms(2026, 10, 26, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_is_stale_only_after_next_update() {
        let due = Utc.with_ymd_and_hms(2026, 10, 26, 0, 0, 0).unwrap();
        let row = insight(due);
        assert!(!row.is_stale(due - Duration::seconds(1)));
        assert!(!row.is_stale(due));
        assert!(row.is_stale(due + Duration::seconds(1)));
    }

    #[test]
    fn test_enum_serde_accepts_mixed_case() {
        let level: DemandLevel = serde_json::from_str(r#""High""#).unwrap();
        assert_eq!(level, DemandLevel::High);
        let outlook: MarketOutlook = serde_json::from_str(r#""NEGATIVE""#).unwrap();
        assert_eq!(outlook, MarketOutlook::Negative);
        assert_eq!(
            serde_json::to_string(&MarketOutlook::Neutral).unwrap(),
            r#""NEUTRAL""#
        );
    }

    #[test]
    fn test_salary_range_location_optional() {
        let range: SalaryRange =
            serde_json::from_str(r#"{"role":"SRE","min":90000,"max":160000,"median":120000}"#)
                .unwrap();
        assert_eq!(range.role, "SRE");
        assert!(range.location.is_empty());

        let range: SalaryRange = serde_json::from_str(
            r#"{"role":"SRE","min":90000,"max":160000,"median":120000,"location":null}"#,
        )
        .unwrap();
        assert!(range.location.is_empty());
    }
}
