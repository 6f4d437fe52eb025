//! Header Component
//!
//! Top bar with logo, section links, search box, new-post action and avatar menu.

use leptos::prelude::*;

use crate::routes::{self, use_router, HOME_PATH, MY_PAGE_PATH, NEW_CURATION_PATH};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=32&width=32";

/// Section links shown next to the logo
const NAV_LINKS: &[(&str, &str)] = &[
    ("/활동외", "활동외"),
    ("/북마크", "북마크"),
];

/// Site-wide navigation bar
#[component]
pub fn Header() -> impl IntoView {
    let router = use_router();
    let (query, set_query) = signal(String::new());
    let (menu_open, set_menu_open) = signal(false);

    let on_search = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let q = query.get();
        if q.trim().is_empty() {
            return;
        }
        router.navigate(&routes::search_path(&q));
    };

    view! {
        <header class="site-header">
            <div class="header-inner">
                <div class="header-left">
                    <a href=HOME_PATH class="header-logo">
                        <img src=PLACEHOLDER_IMAGE alt="Logo" width="32" height="32" class="rounded" />
                    </a>
                    <nav class="header-nav">
                        {NAV_LINKS.iter().map(|(href, label)| view! {
                            <a href=*href class="header-nav-link">{*label}</a>
                        }).collect_view()}
                    </nav>
                </div>

                <div class="header-right">
                    <div class="header-search">
                        <span class="search-icon">"🔍"</span>
                        <input
                            type="search"
                            class="search-input"
                            placeholder="인사이트 검색..."
                            prop:value=move || query.get()
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                            on:keydown=on_search
                        />
                    </div>
                    <button
                        type="button"
                        class="new-post-btn"
                        on:click=move |_| router.navigate(NEW_CURATION_PATH)
                    >
                        "새 글쓰기"
                    </button>
                    <div class="avatar-menu">
                        <button
                            type="button"
                            class="avatar-btn"
                            aria-haspopup="true"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <img src=PLACEHOLDER_IMAGE alt="Avatar" width="32" height="32" class="rounded-full" />
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class="avatar-dropdown" on:click=move |_| set_menu_open.set(false)>
                                <a href=MY_PAGE_PATH class="avatar-dropdown-item">"마이페이지"</a>
                                <a href=NEW_CURATION_PATH class="avatar-dropdown-item">"새 글쓰기"</a>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </header>
    }
}
