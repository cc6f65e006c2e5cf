use serde::{Deserialize, Serialize};

/// Response wrapper used by the backend for success and error payloads alike:
/// `{"type": "success" | "error", "message": ..., "data": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// The backend mostly answers `success`/`error`, but validation paths emit
/// `warning` and logout emits `info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    Success,
    Error,
    Warning,
    Info,
}

impl<T> Envelope<T> {
    pub fn is_error(&self) -> bool {
        self.kind == ResponseKind::Error
    }

    /// Server message, or `fallback` when the envelope carries none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let env: Envelope<Vec<String>> =
            serde_json::from_str(r#"{"type":"success","data":["a","b"]}"#).unwrap();
        assert!(!env.is_error());
        assert_eq!(env.data.unwrap(), vec!["a", "b"]);
        assert_eq!(env.message, None);
    }

    #[test]
    fn test_error_envelope_without_data() {
        let env: Envelope<()> =
            serde_json::from_str(r#"{"type":"error","message":"Invalid credentials"}"#).unwrap();
        assert!(env.is_error());
        assert_eq!(env.message_or("fallback"), "Invalid credentials");
    }

    #[test]
    fn test_message_fallback() {
        let env: Envelope<()> = serde_json::from_str(r#"{"type":"error"}"#).unwrap();
        assert_eq!(env.message_or("Operation failed"), "Operation failed");
    }
}
