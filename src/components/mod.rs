//! UI Components
//!
//! Leptos components for the page chrome and the curation edit screen.

mod header;
mod field_list_editor;
mod edit_curation_page;

pub use header::Header;
pub use field_list_editor::FieldListEditor;
pub use edit_curation_page::EditCurationPage;
