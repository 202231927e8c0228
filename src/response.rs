//! Helpers for presenting repository responses.

/// Re-indents a raw error body when it is valid JSON.
///
/// Dataverse error responses are JSON documents; pretty-printing them
/// keeps diagnostics readable. Non-JSON bodies are passed through
/// untouched.
pub(crate) fn format_error_body(raw: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => serde_json::to_string_pretty(&json).unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}
