//! Routes
//!
//! Maps `location.pathname` to pages, builds the paths we link to, and
//! navigates: in place via the History API for pages this app renders,
//! full document loads for everything else.

use leptos::prelude::*;
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen::JsValue;

use crate::api::PATH_SEGMENT;

pub const HOME_PATH: &str = "/";
pub const NEW_CURATION_PATH: &str = "/curation/new";
pub const MY_PAGE_PATH: &str = "/mypage";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    CurationDetail(String),
    EditCuration(String),
    NotFound,
}

impl Route {
    pub fn parse(pathname: &str) -> Self {
        let segments: Vec<String> = pathname
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            // The new-post editor is served by the rest of the site
            [curation, new] if curation == "curation" && new == "new" => Route::NotFound,
            [curation, id] if curation == "curation" => Route::CurationDetail(id.clone()),
            [curation, id, edit] if curation == "curation" && edit == "edit" => {
                Route::EditCuration(id.clone())
            }
            _ => Route::NotFound,
        }
    }
}

pub fn detail_path(id: &str) -> String {
    format!("/curation/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

pub fn edit_path(id: &str) -> String {
    format!("{}/edit", detail_path(id))
}

pub fn search_path(query: &str) -> String {
    format!("/search?q={}", utf8_percent_encode(query.trim(), NON_ALPHANUMERIC))
}

/// How a navigation to some path is carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Rendered by this app: push a history entry and swap the page in place
    InApp,
    /// Anything else: full document load
    Document,
}

impl Navigation {
    pub fn for_path(path: &str) -> Self {
        let pathname = path.split(['?', '#']).next().unwrap_or_default();
        match Route::parse(pathname) {
            Route::NotFound => Navigation::Document,
            _ => Navigation::InApp,
        }
    }
}

fn current_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| HOME_PATH.to_string())
}

/// Current location provided via context
#[derive(Clone, Copy)]
pub struct RouterContext {
    pub pathname: ReadSignal<String>,
    set_pathname: WriteSignal<String>,
}

impl RouterContext {
    /// Start tracking the location; back/forward refresh the pathname
    pub fn new() -> Self {
        let (pathname, set_pathname) = signal(current_pathname());
        let handle = window_event_listener(leptos::ev::popstate, move |_| {
            set_pathname.set(current_pathname());
        });
        on_cleanup(move || handle.remove());
        Self { pathname, set_pathname }
    }

    pub fn navigate(&self, path: &str) {
        log::info!("Navigating to {}", path);
        let Some(window) = web_sys::window() else {
            return;
        };
        match Navigation::for_path(path) {
            Navigation::InApp => {
                let pushed = window
                    .history()
                    .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path)));
                match pushed {
                    Ok(()) => self.set_pathname.set(current_pathname()),
                    Err(e) => {
                        log::warn!("pushState to {} failed, reloading: {:?}", path, e);
                        assign(&window, path);
                    }
                }
            }
            Navigation::Document => assign(&window, path),
        }
    }
}

fn assign(window: &web_sys::Window, path: &str) {
    if let Err(e) = window.location().assign(path) {
        log::error!("Navigation to {} failed: {:?}", path, e);
    }
}

/// Get the router from context
pub fn use_router() -> RouterContext {
    use_context::<RouterContext>().expect("RouterContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/curation/12"), Route::CurationDetail("12".to_string()));
        assert_eq!(Route::parse("/curation/12/edit"), Route::EditCuration("12".to_string()));
        assert_eq!(Route::parse("/curation/12/edit/"), Route::EditCuration("12".to_string()));
        assert_eq!(Route::parse("/curation"), Route::NotFound);
        assert_eq!(Route::parse("/curation/12/delete"), Route::NotFound);
        assert_eq!(Route::parse("/bookmarks/12/edit"), Route::NotFound);
    }

    #[test]
    fn test_parse_decodes_segments() {
        assert_eq!(Route::parse("/curation/a%20b/edit"), Route::EditCuration("a b".to_string()));
    }

    #[test]
    fn test_paths() {
        assert_eq!(detail_path("5"), "/curation/5");
        assert_eq!(edit_path("5"), "/curation/5/edit");
        assert_eq!(Route::parse(&edit_path("a/b")), Route::EditCuration("a/b".to_string()));
    }

    #[test]
    fn test_new_post_path_is_not_a_curation() {
        assert_eq!(Route::parse(NEW_CURATION_PATH), Route::NotFound);
        assert_eq!(Route::parse("/curation/new/"), Route::NotFound);
        assert_eq!(Route::parse("/curation/newer"), Route::CurationDetail("newer".to_string()));
    }

    #[test]
    fn test_navigation_kind() {
        assert_eq!(Navigation::for_path(&detail_path("1")), Navigation::InApp);
        assert_eq!(Navigation::for_path(&edit_path("1")), Navigation::InApp);
        assert_eq!(Navigation::for_path(HOME_PATH), Navigation::InApp);
        assert_eq!(Navigation::for_path(NEW_CURATION_PATH), Navigation::Document);
        assert_eq!(Navigation::for_path(MY_PAGE_PATH), Navigation::Document);
        assert_eq!(Navigation::for_path(&search_path("rust")), Navigation::Document);
        assert_eq!(Navigation::for_path("/curation/3#top"), Navigation::InApp);
    }

    #[test]
    fn test_search_path_encodes_query() {
        assert_eq!(search_path(" rust async "), "/search?q=rust%20async");
    }
}
