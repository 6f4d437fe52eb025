//! Curation Endpoints
//!
//! `GET` / `PUT /api/v1/curation/{id}`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::http::{self, Method};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{parse_envelope, CurationRecord, CurationUpdateRequest};

/// Characters that cannot appear raw inside one path segment
pub const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// `{base}/api/v1/curation/{id}`
pub fn curation_url(base: &str, id: &str) -> String {
    format!(
        "{}/api/v1/curation/{}",
        base.trim_end_matches('/'),
        utf8_percent_encode(id, PATH_SEGMENT)
    )
}

pub async fn get_curation(config: &AppConfig, id: &str) -> Result<CurationRecord, ApiError> {
    let url = curation_url(&config.api_base_url, id);
    let body = http::send(Method::Get, &url, None).await?;
    let record = parse_envelope::<CurationRecord>(&body)?.into_data()?;
    log::info!(
        "Loaded curation {} ({} links, {} tags)",
        id,
        record.urls.len(),
        record.tags.len()
    );
    Ok(record)
}

pub async fn update_curation(
    config: &AppConfig,
    id: &str,
    request: &CurationUpdateRequest,
) -> Result<(), ApiError> {
    let url = curation_url(&config.api_base_url, id);
    let json = serde_json::to_string(request).map_err(|e| ApiError::Decode(e.to_string()))?;
    let body = http::send(Method::Put, &url, Some(json)).await?;
    parse_envelope::<serde_json::Value>(&body)?.into_ack()?;
    log::info!("Updated curation {}", id);
    Ok(())
}
