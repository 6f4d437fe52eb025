//! Frontend Models
//!
//! Data structures matching the curation API payloads.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiError;

/// Envelope code the backend uses for a successful call
pub const SUCCESS_CODE: &str = "200-1";

/// Link attached to a curation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkDto {
    pub url: String,
}

/// Tag attached to a curation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagDto {
    pub name: String,
}

/// Curation as returned by `GET /api/v1/curation/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurationRecord {
    pub title: String,
    pub content: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub urls: Vec<LinkDto>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<TagDto>,
}

/// Body of `PUT /api/v1/curation/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurationUpdateRequest {
    pub title: String,
    pub content: String,
    pub link_req_dtos: Vec<LinkDto>,
    pub tag_req_dtos: Vec<TagDto>,
}

impl CurationUpdateRequest {
    /// Build a request, dropping blank links and tags while keeping order
    pub fn new(title: &str, content: &str, links: &[String], tags: &[String]) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            link_req_dtos: non_blank(links).map(|url| LinkDto { url }).collect(),
            tag_req_dtos: non_blank(tags).map(|name| TagDto { name }).collect(),
        }
    }
}

/// True for empty or whitespace-only strings
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn non_blank(values: &[String]) -> impl Iterator<Item = String> + '_ {
    values.iter().filter(|v| !is_blank(v)).cloned()
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// `{code, msg, data}` wrapper around every API response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub code: String,
    pub msg: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Payload of a successful response
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(self.into_failure());
        }
        self.data
            .ok_or_else(|| ApiError::Decode("success response without data".to_string()))
    }

    /// Success check for calls whose payload is not needed
    pub fn into_ack(self) -> Result<(), ApiError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self.into_failure())
        }
    }

    fn into_failure(self) -> ApiError {
        ApiError::Application {
            code: self.code,
            msg: self.msg,
        }
    }
}

/// Decode a response body into an envelope
pub fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<Envelope<T>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_record_envelope() {
        let body = r#"{
            "code": "200-1",
            "msg": "ok",
            "data": {
                "title": "Rust",
                "content": "body",
                "urls": [{"url": "https://rust-lang.org"}],
                "tags": [{"name": "lang"}, {"name": "systems"}]
            }
        }"#;

        let record = parse_envelope::<CurationRecord>(body).unwrap().into_data().unwrap();
        assert_eq!(record.title, "Rust");
        assert_eq!(record.urls, vec![LinkDto { url: "https://rust-lang.org".to_string() }]);
        assert_eq!(record.tags.len(), 2);
    }

    #[test]
    fn test_missing_or_null_lists_are_empty() {
        let body = r#"{"code":"200-1","data":{"title":"t","content":"c","urls":null}}"#;
        let record = parse_envelope::<CurationRecord>(body).unwrap().into_data().unwrap();
        assert!(record.urls.is_empty());
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_failure_code_carries_msg() {
        let body = r#"{"code":"404-1","msg":"not found"}"#;
        let err = parse_envelope::<CurationRecord>(body).unwrap().into_data().unwrap_err();
        assert_eq!(
            err,
            ApiError::Application { code: "404-1".to_string(), msg: Some("not found".to_string()) }
        );
    }

    #[test]
    fn test_success_without_data_is_decode_error() {
        let envelope = parse_envelope::<CurationRecord>(r#"{"code":"200-1"}"#).unwrap();
        assert!(matches!(envelope.into_data(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_ack_ignores_payload() {
        let envelope = parse_envelope::<serde_json::Value>(r#"{"code":"200-1","data":{"id":3}}"#).unwrap();
        assert!(envelope.into_ack().is_ok());

        let envelope = parse_envelope::<serde_json::Value>(r#"{"code":"500-1"}"#).unwrap();
        assert!(envelope.into_ack().is_err());
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        assert!(matches!(
            parse_envelope::<CurationRecord>("<html>"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_update_request_filters_blank_entries() {
        let links = vec!["".to_string(), "a".to_string(), "  ".to_string(), "b".to_string()];
        let tags = vec!["\t".to_string(), "dev".to_string()];
        let request = CurationUpdateRequest::new("title", "content", &links, &tags);

        let urls: Vec<_> = request.link_req_dtos.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(urls, vec!["a", "b"]);
        assert_eq!(request.tag_req_dtos, vec![TagDto { name: "dev".to_string() }]);
    }

    #[test]
    fn test_update_request_wire_names() {
        let request = CurationUpdateRequest::new("t", "c", &["u".to_string()], &[]);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "t",
                "content": "c",
                "linkReqDtos": [{"url": "u"}],
                "tagReqDtos": []
            })
        );
    }
}
