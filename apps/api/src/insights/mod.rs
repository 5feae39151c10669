// Industry insights: weekly labor-market snapshot per industry, generated by the LLM.

pub mod generator;
pub mod handlers;
pub mod prompts;
