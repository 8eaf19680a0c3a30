use serde::Serialize;

pub const MISSING_PROMPT_ERROR: &str = "Missing `prompt` query parameter";
pub const NO_RESPONSE: &str = "No response";

/// Raw query pairs, kept as a list so a repeated `prompt` key can be told
/// apart from a single string value.
pub type QueryPairs = Vec<(String, String)>;

/// Returns the prompt only when the query holds exactly one non-empty
/// `prompt` value. Anything else is treated as missing.
pub fn extract_prompt(pairs: &[(String, String)]) -> Option<&str> {
    let mut values = pairs
        .iter()
        .filter(|(key, _)| key == "prompt")
        .map(|(_, value)| value.as_str());

    match (values.next(), values.next()) {
        (Some(prompt), None) if !prompt.is_empty() => Some(prompt),
        _ => None,
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
