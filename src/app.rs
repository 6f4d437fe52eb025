//! Curation Web App
//!
//! Root component: header, the page for the current location, and toasts.

use leptos::prelude::*;

use crate::components::{EditCurationPage, Header};
use crate::config::AppConfig;
use crate::routes::{self, Route, RouterContext, HOME_PATH};
use crate::toast::{ToastContext, ToastHost};

/// Which page body is mounted. The edit page stays mounted across id changes.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Page {
    Edit,
    Detail(String),
    Home,
    NotFound,
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(config);
    provide_context(ToastContext::new());
    let router = RouterContext::new();
    provide_context(router);

    let route = Memo::new(move |_| Route::parse(&router.pathname.get()));

    let edit_id = Memo::new(move |_| match route.get() {
        Route::EditCuration(id) => id,
        _ => String::new(),
    });
    let page = Memo::new(move |_| match route.get() {
        Route::EditCuration(_) => Page::Edit,
        Route::CurationDetail(id) => Page::Detail(id),
        Route::Home => Page::Home,
        Route::NotFound => Page::NotFound,
    });

    view! {
        <div class="app-layout">
            <Header />

            <main class="main-content">
                {move || match page.get() {
                    Page::Edit => view! { <EditCurationPage id=edit_id /> }.into_any(),
                    Page::Detail(id) => view! { <DetailLinks id=id /> }.into_any(),
                    Page::Home => view! {
                        <div class="page-container">
                            <h1 class="page-title">"큐레이션"</h1>
                        </div>
                    }.into_any(),
                    Page::NotFound => view! { <NotFound /> }.into_any(),
                }}
            </main>

            <ToastHost />
        </div>
    }
}

/// Detail pages are rendered by the server; this only offers the edit entry point
#[component]
fn DetailLinks(id: String) -> impl IntoView {
    view! {
        <div class="page-container">
            <a href=routes::edit_path(&id) class="back-link">"큐레이션 수정하기 →"</a>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page-container">
            <h1 class="page-title">"페이지를 찾을 수 없습니다"</h1>
            <a href=HOME_PATH class="back-link">"← 홈으로 돌아가기"</a>
        </div>
    }
}
