// Interview preparation: AI-generated mock quizzes, grading, and assessment history.

pub mod grading;
pub mod handlers;
pub mod prompts;
pub mod quiz;
