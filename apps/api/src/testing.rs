//! Fixtures shared by the unit tests.

use chrono::Utc;
use sqlx::types::Json;
use uuid::Uuid;

use crate::interview::quiz::QuizQuestion;
use crate::models::assessment::{Assessment, NewAssessment};
use crate::models::insight::{IndustryInsight, NewIndustryInsight};
use crate::models::user::User;

pub fn user(industry: Option<&str>, skills: &[&str]) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        subject_id: "user_2abc".to_string(),
        email: Some("dev@example.com".to_string()),
        industry: industry.map(String::from),
        experience: Some(4),
        bio: None,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        created_at: now,
        updated_at: now,
    }
}

/// What the database would hand back after inserting `new`.
pub fn stored_insight(new: NewIndustryInsight) -> IndustryInsight {
    IndustryInsight {
        id: Uuid::new_v4(),
        industry: new.industry,
        salary_ranges: Json(new.salary_ranges),
        growth_rate: new.growth_rate,
        demand_level: new.demand_level,
        top_skills: new.top_skills,
        market_outlook: new.market_outlook,
        key_trends: new.key_trends,
        recommended_skills: new.recommended_skills,
        last_updated: new.last_updated,
        next_update: new.next_update,
    }
}

pub fn stored_assessment(new: NewAssessment) -> Assessment {
    let now = Utc::now();
    Assessment {
        id: Uuid::new_v4(),
        user_id: new.user_id,
        quiz_score: new.quiz_score,
        questions: Json(new.questions),
        category: new.category,
        improvement_tip: new.improvement_tip,
        created_at: now,
        updated_at: now,
    }
}

/// `n` questions whose correct answer is always option "B<i>".
pub fn quiz_questions(n: usize) -> Vec<QuizQuestion> {
    (0..n)
        .map(|i| QuizQuestion {
            question: format!("Question {i}?"),
            options: vec![
                format!("A{i}"),
                format!("B{i}"),
                format!("C{i}"),
                format!("D{i}"),
            ],
            correct_answer: format!("B{i}"),
            explanation: format!("B{i} is right because reasons."),
        })
        .collect()
}

pub const INSIGHT_JSON: &str = r#"{
    "salaryRanges": [
        {"role": "Backend Engineer", "min": 95000, "max": 170000, "median": 130000, "location": "US"},
        {"role": "Data Engineer", "min": 90000, "max": 160000, "median": 125000, "location": "US"}
    ],
    "growthRate": 6.5,
    "demandLevel": "HIGH",
    "topSkills": ["Rust", "Kubernetes", "SQL", "Distributed Systems", "Observability"],
    "marketOutlook": "POSITIVE",
    "keyTrends": ["AI tooling", "Platform engineering", "Cost optimisation", "Edge compute", "Security by default"],
    "recommendedSkills": ["LLM integration", "Terraform", "Go", "Data modelling", "System design"]
}"#;
