//! Response adapters: map a platform's raw JSON reply to an answer string.
//!
//! Each platform type has one expected reply shape. Every lookup is
//! presence-checked; a missing or mistyped field yields
//! [`ResponseFormatError`] instead of a panic.

use serde_json::Value;
use thiserror::Error;

use super::platform::PlatformType;

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";

/// The reply did not have the shape expected for its platform type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid {} response format", .0.label())]
pub struct ResponseFormatError(pub PlatformType);

/// Extract the answer from a reply according to the platform type.
pub fn extract_answer(platform_type: PlatformType, reply: &Value) -> Result<String, ResponseFormatError> {
    let content = match platform_type {
        PlatformType::Ollama => ollama_content(reply).map(strip_think_tags),
        PlatformType::Deepseek => deepseek_content(reply).map(str::to_string),
        PlatformType::Unspecified => generic_content(reply).map(str::to_string),
    };
    content.ok_or(ResponseFormatError(platform_type))
}

/// `{ "message": { "content": "..." } }`
fn ollama_content(reply: &Value) -> Option<&str> {
    reply.get("message")?.get("content")?.as_str()
}

/// `{ "choices": [ { "message": { "content": "..." } } ] }`
fn deepseek_content(reply: &Value) -> Option<&str> {
    reply
        .get("choices")?
        .as_array()?
        .first()?
        .get("message")?
        .get("content")?
        .as_str()
}

/// `{ "response": "..." }`
fn generic_content(reply: &Value) -> Option<&str> {
    reply.get("response")?.as_str()
}

/// Remove reasoning markup from model output and trim the result.
///
/// Complete `<think>…</think>` blocks are dropped with their contents, then
/// any unmatched `<think>` or `</think>` literal is removed. Matching is
/// textual and case-sensitive.
pub fn strip_think_tags(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(THINK_OPEN) {
        let after_open = &rest[open + THINK_OPEN.len()..];
        let Some(close) = after_open.find(THINK_CLOSE) else {
            break;
        };
        result.push_str(&rest[..open]);
        rest = &after_open[close + THINK_CLOSE.len()..];
    }
    result.push_str(rest);

    result
        .replace(THINK_OPEN, "")
        .replace(THINK_CLOSE, "")
        .trim()
        .to_string()
}
