//! Error Types
//!
//! Failures of the curation API calls and of client-side form validation.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Shown when loading a curation fails without a better message
pub const LOAD_FAILED: &str = "큐레이션 데이터를 불러오는 데 실패했습니다.";
/// Shown when updating a curation fails without a better message
pub const UPDATE_FAILED: &str = "큐레이션 수정에 실패했습니다.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// fetch itself rejected (offline, CORS, DNS...)
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP status {status}")]
    Http { status: u16 },

    /// Envelope code other than the success code
    #[error("application error {code}: {}", .msg.as_deref().unwrap_or("-"))]
    Application { code: String, msg: Option<String> },

    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text to put in front of the user for this failure
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Network(message) if !message.trim().is_empty() => message.clone(),
            ApiError::Application { msg: Some(msg), .. } if !msg.trim().is_empty() => msg.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Wrap a rejected JS promise
    pub fn network(value: JsValue) -> Self {
        ApiError::Network(js_error_message(&value))
    }

    pub fn decode(value: JsValue) -> Self {
        ApiError::Decode(js_error_message(&value))
    }
}

/// Best-effort readable message from a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Client-side validation failures; never reach the network
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("제목을 입력해주세요.")]
    MissingTitle,

    #[error("내용을 입력해주세요.")]
    MissingContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_message_preferred() {
        let err = ApiError::Application {
            code: "403-1".to_string(),
            msg: Some("권한이 없습니다.".to_string()),
        };
        assert_eq!(err.user_message(UPDATE_FAILED), "권한이 없습니다.");
    }

    #[test]
    fn test_blank_application_message_falls_back() {
        let err = ApiError::Application { code: "500-1".to_string(), msg: Some("  ".to_string()) };
        assert_eq!(err.user_message(LOAD_FAILED), LOAD_FAILED);

        let err = ApiError::Application { code: "500-1".to_string(), msg: None };
        assert_eq!(err.user_message(LOAD_FAILED), LOAD_FAILED);
    }

    #[test]
    fn test_http_and_decode_use_fallback() {
        assert_eq!(ApiError::Http { status: 500 }.user_message(LOAD_FAILED), LOAD_FAILED);
        assert_eq!(
            ApiError::Decode("expected value".to_string()).user_message(UPDATE_FAILED),
            UPDATE_FAILED
        );
    }

    #[test]
    fn test_network_message_shown() {
        let err = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(err.user_message(LOAD_FAILED), "Failed to fetch");
    }

    #[test]
    fn test_validation_notices() {
        assert_eq!(ValidationError::MissingTitle.to_string(), "제목을 입력해주세요.");
        assert_eq!(ValidationError::MissingContent.to_string(), "내용을 입력해주세요.");
    }
}
