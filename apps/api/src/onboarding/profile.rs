//! Onboarding profile, the step that gives a user an industry and skills.
//!
//! Saving a profile makes sure the chosen industry already has an insight, so
//! the dashboard never waits on generation after onboarding.

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::identity::Caller;
use crate::insights::generator::ensure_insight;
use crate::llm_client::CompletionProvider;
use crate::models::user::{ProfileUpdate, User};
use crate::store::Store;

const MAX_EXPERIENCE_YEARS: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OnboardingStatus {
    pub is_onboarded: bool,
}

/// A signed-in caller without a user row is simply not onboarded yet.
pub async fn onboarding_status(
    store: &dyn Store,
    caller: &Caller,
) -> Result<OnboardingStatus, AppError> {
    let subject_id = caller.require()?;
    let user = store.find_user_by_subject(subject_id).await?;
    Ok(OnboardingStatus {
        is_onboarded: user.as_ref().is_some_and(User::is_onboarded),
    })
}

/// Trims fields, drops blank and duplicate skills (first occurrence wins) and
/// rejects an empty industry or out-of-range experience.
pub fn normalize_profile(profile: ProfileUpdate) -> Result<ProfileUpdate, AppError> {
    let industry = profile.industry.trim().to_string();
    if industry.is_empty() {
        return Err(AppError::Validation("industry is required".to_string()));
    }

    if let Some(years) = profile.experience {
        if !(0..=MAX_EXPERIENCE_YEARS).contains(&years) {
            return Err(AppError::Validation(format!(
                "experience must be between 0 and {MAX_EXPERIENCE_YEARS} years"
            )));
        }
    }

    let mut skills: Vec<String> = Vec::with_capacity(profile.skills.len());
    for skill in profile.skills {
        let skill = skill.trim();
        if !skill.is_empty() && !skills.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
            skills.push(skill.to_string());
        }
    }

    let bio = profile
        .bio
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty());

    Ok(ProfileUpdate {
        industry,
        experience: profile.experience,
        bio,
        skills,
    })
}

pub async fn update_profile(
    store: &dyn Store,
    llm: &dyn CompletionProvider,
    caller: &Caller,
    profile: ProfileUpdate,
) -> Result<User, AppError> {
    let subject_id = caller.require()?;
    let profile = normalize_profile(profile)?;

    ensure_insight(store, llm, &profile.industry).await?;
    let user = store.upsert_user_profile(subject_id, &profile).await?;

    info!("User {} onboarded into '{}'", user.id, profile.industry);
    Ok(user)
}
