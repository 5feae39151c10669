// Shared prompt fragments.
// Each module that calls the LLM defines its own prompts.rs alongside it.

/// Appended to every prompt whose answer is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Return ONLY the JSON. \
    No additional text, notes, explanations, or markdown formatting.";
