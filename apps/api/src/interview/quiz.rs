//! Quiz generation: 10 multiple-choice questions tailored to the caller's
//! industry and skills. Questions are returned to the client, not stored.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::identity::{resolve_user, Caller};
use crate::interview::prompts::{
    QUIZ_OPTION_COUNT, QUIZ_PROMPT_TEMPLATE, QUIZ_QUESTION_COUNT, QUIZ_TEMPERATURE,
};
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::sanitize::null_as_default;
use crate::llm_client::{complete_json, CompletionOptions, CompletionProvider};
use crate::store::Store;

/// One multiple-choice question. Field names follow the JSON envelope the
/// model is asked for, and the client posts them back unchanged for grading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation: String,
}

#[derive(Debug, Deserialize)]
struct QuizEnvelope {
    questions: Vec<QuizQuestion>,
}

pub fn build_quiz_prompt(industry: &str, skills: &[String]) -> String {
    let skills_clause = if skills.is_empty() {
        String::new()
    } else {
        format!(" with expertise in {}", skills.join(", "))
    };

    QUIZ_PROMPT_TEMPLATE
        .replace("{count}", &QUIZ_QUESTION_COUNT.to_string())
        .replace("{options}", &QUIZ_OPTION_COUNT.to_string())
        .replace("{industry}", industry)
        .replace("{skills_clause}", &skills_clause)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
}

/// Identity and user lookup failures surface as-is; anything that goes wrong
/// while building, calling or parsing is wrapped in `QuizGeneration`.
pub async fn generate_quiz(
    store: &dyn Store,
    llm: &dyn CompletionProvider,
    caller: &Caller,
) -> Result<Vec<QuizQuestion>, AppError> {
    let user = resolve_user(caller, store).await?;

    request_questions(llm, user.industry.as_deref(), &user.skills)
        .await
        .map_err(|e| AppError::QuizGeneration(Box::new(e)))
}

async fn request_questions(
    llm: &dyn CompletionProvider,
    industry: Option<&str>,
    skills: &[String],
) -> Result<Vec<QuizQuestion>, AppError> {
    let industry = industry
        .filter(|i| !i.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Complete onboarding to choose an industry".to_string()))?;

    let prompt = build_quiz_prompt(industry, skills);
    let envelope: QuizEnvelope =
        complete_json(llm, &prompt, CompletionOptions::with_temperature(QUIZ_TEMPERATURE)).await?;

    if envelope.questions.is_empty() {
        return Err(AppError::MalformedResponse(
            "quiz response contained no questions".to_string(),
        ));
    }

    info!(
        "Generated {} quiz questions for industry '{industry}'",
        envelope.questions.len()
    );
    Ok(envelope.questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{LlmError, MockCompletionProvider};
    use crate::store::MockStore;
    use crate::testing::{quiz_questions, user};

    fn store_with_user(industry: Option<&'static str>, skills: &'static [&'static str]) -> MockStore {
        let mut store = MockStore::new();
        store
            .expect_find_user_by_subject()
            .returning(move |_| Ok(Some(user(industry, skills))));
        store
    }

    fn envelope_json(n: usize) -> String {
        serde_json::json!({ "questions": quiz_questions(n) }).to_string()
    }

    #[test]
    fn test_prompt_with_skills_clause() {
        let prompt = build_quiz_prompt(
            "tech-software-development",
            &["Rust".to_string(), "PostgreSQL".to_string()],
        );
        assert!(prompt.starts_with(
            "Generate 10 technical interview questions for a tech-software-development professional with expertise in Rust, PostgreSQL."
        ));
        assert!(prompt.contains("multiple choice with 4 options"));
        assert!(prompt.contains("\"correctAnswer\": \"string\""));
    }

    #[test]
    fn test_prompt_without_skills_has_no_clause() {
        let prompt = build_quiz_prompt("finance-banking", &[]);
        assert!(prompt.contains("for a finance-banking professional.\n"));
        assert!(!prompt.contains("with expertise in"));
        assert!(!prompt.contains("{skills_clause}"));
    }

    #[test]
    fn test_question_serde_uses_camel_case() {
        let q = &quiz_questions(1)[0];
        let value = serde_json::to_value(q).unwrap();
        assert_eq!(value["correctAnswer"], "B0");
        assert!(value.get("correct_answer").is_none());
    }

    #[tokio::test]
    async fn test_generate_quiz_parses_fenced_envelope() {
        let store = store_with_user(Some("tech-software-development"), &["Rust"]);
        let mut llm = MockCompletionProvider::new();
        llm.expect_complete()
            .withf(|prompt, options| {
                prompt.contains("with expertise in Rust")
                    && options.temperature == QUIZ_TEMPERATURE
                    && options.system.is_none()
            })
            .times(1)
            .returning(|_, _| Ok(format!("```json\n{}\n```", envelope_json(10))));

        let questions = generate_quiz(&store, &llm, &Caller::subject("user_2abc"))
            .await
            .unwrap();
        assert_eq!(questions.len(), 10);
        assert_eq!(questions[3].correct_answer, "B3");
        assert_eq!(questions[3].options.len(), 4);
    }

    #[tokio::test]
    async fn test_unauthenticated_is_not_wrapped() {
        let store = MockStore::new();
        let llm = MockCompletionProvider::new();

        let err = generate_quiz(&store, &llm, &Caller::anonymous())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[tokio::test]
    async fn test_provider_failure_wrapped_as_quiz_generation() {
        let store = store_with_user(Some("tech-software-development"), &[]);
        let mut llm = MockCompletionProvider::new();
        llm.expect_complete().times(1).returning(|_, _| {
            Err(LlmError::Api {
                status: 429,
                message: "rate limited".to_string(),
            })
        });

        let err = generate_quiz(&store, &llm, &Caller::subject("user_2abc"))
            .await
            .unwrap_err();
        match err {
            AppError::QuizGeneration(source) => assert!(matches!(*source, AppError::Provider(_))),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_questions_key_wrapped_as_quiz_generation() {
        let store = store_with_user(Some("tech-software-development"), &[]);
        let mut llm = MockCompletionProvider::new();
        llm.expect_complete()
            .returning(|_, _| Ok(r#"{"items": []}"#.to_string()));

        let err = generate_quiz(&store, &llm, &Caller::subject("user_2abc"))
            .await
            .unwrap_err();
        match err {
            AppError::QuizGeneration(source) => {
                assert!(matches!(*source, AppError::MalformedResponse(_)))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_question_list_is_a_generation_failure() {
        let store = store_with_user(Some("tech-software-development"), &[]);
        let mut llm = MockCompletionProvider::new();
        llm.expect_complete()
            .returning(|_, _| Ok(r#"{"questions": []}"#.to_string()));

        let err = generate_quiz(&store, &llm, &Caller::subject("user_2abc"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::QuizGeneration(_)));
    }

    #[tokio::test]
    async fn test_user_without_industry_never_calls_llm() {
        let store = store_with_user(None, &[]);
        let llm = MockCompletionProvider::new();

        let err = generate_quiz(&store, &llm, &Caller::subject("user_2abc"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::QuizGeneration(_)));
    }
}
