//! Quiz grading, improvement tips, and assessment history.
//!
//! Answers are compared to questions by position. A question whose answer is
//! `null` or missing is recorded with `user_answer = None` and graded incorrect;
//! answers beyond the last question are ignored.
//!
//! The improvement tip is best-effort: a failed tip call is logged and the
//! assessment is stored without one.

use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::identity::{resolve_user, Caller};
use crate::interview::prompts::{IMPROVEMENT_TIP_PROMPT_TEMPLATE, IMPROVEMENT_TIP_TEMPERATURE};
use crate::interview::quiz::QuizQuestion;
use crate::llm_client::{CompletionOptions, CompletionProvider};
use crate::models::assessment::{Assessment, NewAssessment, QuestionResult, TECHNICAL_CATEGORY};
use crate::store::Store;

const FALLBACK_INDUSTRY: &str = "general";
const NO_ANSWER: &str = "(no answer)";

#[derive(Debug, Clone, Deserialize)]
pub struct SaveQuizRequest {
    pub questions: Vec<QuizQuestion>,
    /// `null` marks a skipped question.
    pub answers: Vec<Option<String>>,
    pub score: f64,
}

pub fn grade_answers(questions: &[QuizQuestion], answers: &[Option<String>]) -> Vec<QuestionResult> {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let user_answer = answers.get(i).cloned().flatten();
            QuestionResult {
                question: q.question.clone(),
                answer: q.correct_answer.clone(),
                is_correct: user_answer.as_deref() == Some(q.correct_answer.as_str()),
                user_answer,
                explanation: q.explanation.clone(),
            }
        })
        .collect()
}

pub fn build_improvement_prompt(industry: &str, wrong: &[&QuestionResult]) -> String {
    let wrong_answers = wrong
        .iter()
        .map(|r| {
            format!(
                "Question: \"{}\"\nCorrect Answer: \"{}\"\nUser Answer: \"{}\"",
                r.question,
                r.answer,
                r.user_answer.as_deref().unwrap_or(NO_ANSWER)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    IMPROVEMENT_TIP_PROMPT_TEMPLATE
        .replace("{industry}", industry)
        .replace("{wrong_answers}", &wrong_answers)
}

/// `None` when there is nothing to improve on or the provider call fails.
pub async fn generate_improvement_tip(
    llm: &dyn CompletionProvider,
    industry: &str,
    results: &[QuestionResult],
) -> Option<String> {
    let wrong: Vec<&QuestionResult> = results.iter().filter(|r| !r.is_correct).collect();
    if wrong.is_empty() {
        return None;
    }

    let prompt = build_improvement_prompt(industry, &wrong);
    match llm
        .complete(
            &prompt,
            CompletionOptions::with_temperature(IMPROVEMENT_TIP_TEMPERATURE),
        )
        .await
    {
        Ok(tip) => Some(tip.trim().to_string()).filter(|t| !t.is_empty()),
        Err(e) => {
            warn!("Improvement tip generation failed, saving without tip: {e}");
            None
        }
    }
}

/// Grades a submission and stores it as an Assessment.
pub async fn save_quiz_result(
    store: &dyn Store,
    llm: &dyn CompletionProvider,
    caller: &Caller,
    request: SaveQuizRequest,
) -> Result<Assessment, AppError> {
    let user = resolve_user(caller, store).await?;

    if request.answers.len() != request.questions.len() {
        warn!(
            "Quiz submission has {} answers for {} questions",
            request.answers.len(),
            request.questions.len()
        );
    }

    let results = grade_answers(&request.questions, &request.answers);
    let industry = user.industry.as_deref().unwrap_or(FALLBACK_INDUSTRY);
    let improvement_tip = generate_improvement_tip(llm, industry, &results).await;

    let assessment = store
        .create_assessment(NewAssessment {
            user_id: user.id,
            quiz_score: request.score,
            questions: results,
            category: TECHNICAL_CATEGORY.to_string(),
            improvement_tip,
        })
        .await?;

    info!(
        "Saved assessment {} for user {} (score {})",
        assessment.id, user.id, assessment.quiz_score
    );
    Ok(assessment)
}

/// The caller's assessments, oldest first.
pub async fn list_assessments(store: &dyn Store, caller: &Caller) -> Result<Vec<Assessment>, AppError> {
    let user = resolve_user(caller, store).await?;
    Ok(store.list_assessments(user.id).await?)
}
