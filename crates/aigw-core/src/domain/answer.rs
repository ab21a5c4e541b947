//! Answer generation request and result types.

use serde::{Deserialize, Serialize};

/// Role used for the single prompt message.
pub const USER_ROLE: &str = "user";

/// A chat message in the upstream request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Non-streaming chat request posted to a platform.
///
/// Serializes as `{"model":…,"messages":[{"role":"user","content":…}],"stream":false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

impl ChatRequest {
    /// Build a request holding one user message.
    pub fn user_prompt(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage {
                role: USER_ROLE.to_string(),
                content: prompt.into(),
            }],
            stream: false,
        }
    }
}

/// Outcome of one answer request.
///
/// Upstream failures are a normal outcome, not an error. On the wire this is
/// `{"success":true,"answer":…}` or `{"success":false,"errorMessage":…}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "AnswerResultWire", try_from = "AnswerResultWire")]
pub enum AnswerResult {
    Answered { answer: String },
    Failed { error_message: String },
}

impl AnswerResult {
    pub fn answered(answer: impl Into<String>) -> Self {
        Self::Answered {
            answer: answer.into(),
        }
    }

    pub fn failed(error_message: impl Into<String>) -> Self {
        Self::Failed {
            error_message: error_message.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Answered { .. })
    }

    pub fn answer(&self) -> Option<&str> {
        match self {
            Self::Answered { answer } => Some(answer),
            Self::Failed { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Answered { .. } => None,
            Self::Failed { error_message } => Some(error_message),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnswerResultWire {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

impl From<AnswerResult> for AnswerResultWire {
    fn from(result: AnswerResult) -> Self {
        match result {
            AnswerResult::Answered { answer } => Self {
                success: true,
                answer: Some(answer),
                error_message: None,
            },
            AnswerResult::Failed { error_message } => Self {
                success: false,
                answer: None,
                error_message: Some(error_message),
            },
        }
    }
}

impl TryFrom<AnswerResultWire> for AnswerResult {
    type Error = String;

    fn try_from(wire: AnswerResultWire) -> Result<Self, Self::Error> {
        match (wire.success, wire.answer, wire.error_message) {
            (true, Some(answer), None) => Ok(Self::Answered { answer }),
            (false, None, Some(error_message)) => Ok(Self::Failed { error_message }),
            _ => Err("answer result must carry exactly one of answer or errorMessage".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_request_shape() {
        let body = serde_json::to_value(ChatRequest::user_prompt("llama3", "hi")).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "llama3",
                "messages": [{"role": "user", "content": "hi"}],
                "stream": false
            })
        );
    }

    #[test]
    fn test_answer_result_wire_shape() {
        let ok = serde_json::to_value(AnswerResult::answered("42")).unwrap();
        assert_eq!(ok, json!({"success": true, "answer": "42"}));

        let failed = serde_json::to_value(AnswerResult::failed("boom")).unwrap();
        assert_eq!(failed, json!({"success": false, "errorMessage": "boom"}));
    }

    #[test]
    fn test_answer_result_rejects_mixed_payload() {
        let mixed = json!({"success": true, "answer": "a", "errorMessage": "b"});
        assert!(serde_json::from_value::<AnswerResult>(mixed).is_err());

        let parsed: AnswerResult =
            serde_json::from_value(json!({"success": false, "errorMessage": "x"})).unwrap();
        assert_eq!(parsed.error_message(), Some("x"));
        assert!(!parsed.is_success());
    }
}
