//! Response sanitizer: removes markdown code-fence wrapping from model output
//! before it is handed to `serde_json`.
//!
//! Purely textual. Shape checking is whatever the target type's `Deserialize`
//! enforces; optional fields must carry `#[serde(default)]`, plus
//! `deserialize_with = "null_as_default"` when the model may send `null`.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;

use super::LlmError;

const FENCE: &str = "```";
const JSON_TAG: &str = "json";

/// Strips a leading ```` ``` ```` / ```` ```json ```` fence and a trailing
/// ```` ``` ```` fence. Each side is handled independently, so partially fenced
/// output is cleaned on whichever side carries a fence.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        text = strip_language_tag(rest);
    }

    if let Some(rest) = text.trim_end().strip_suffix(FENCE) {
        text = rest;
    }

    text.trim()
}

fn strip_language_tag(text: &str) -> &str {
    match text.get(..JSON_TAG.len()) {
        Some(tag) if tag.eq_ignore_ascii_case(JSON_TAG) => &text[JSON_TAG.len()..],
        _ => text,
    }
}

/// Reads an explicit `null` as `T::default()`. Pair with `#[serde(default)]`
/// so an absent field behaves the same.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Sanitizes `raw` and parses it as `T`.
pub fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T, LlmError> {
    serde_json::from_str(strip_code_fences(raw)).map_err(LlmError::Malformed)
}
