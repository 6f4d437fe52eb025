//! App Configuration
//!
//! Where the curation API lives. Resolved once at startup and provided via context.

use leptos::prelude::*;

/// `<meta name="curation-api-base" content="...">` in index.html overrides the build default
pub const API_BASE_META: &str = "curation-api-base";
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Read configuration from the host page and build environment
    pub fn from_document() -> Self {
        Self::resolve(read_meta(API_BASE_META), option_env!("CURATION_API_BASE"))
    }

    /// First non-blank source wins: page meta, then build env, then default
    pub fn resolve(meta: Option<String>, build_env: Option<&str>) -> Self {
        let api_base_url = meta
            .as_deref()
            .and_then(normalize_base)
            .or_else(|| build_env.and_then(normalize_base))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self { api_base_url }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    meta.get_attribute("content")
}

/// Get the app config from context
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
