//! Curation API Bindings
//!
//! Browser `fetch` wrappers for the backend REST endpoints, organized by domain.

mod curation;
mod http;

pub use curation::*;
