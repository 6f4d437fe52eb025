//! Edit Curation Page
//!
//! Loads one curation, lets the user edit title, content, links and tags,
//! and submits the update back to the API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::FieldListEditor;
use crate::config::use_config;
use crate::form::{
    EditFormState, EditFormStateStoreFields, ListEdit, LoadOutcome, Phase, SubmitOutcome, SubmitRejection,
};
use crate::routes::{self, use_router, HOME_PATH};
use crate::toast::use_toast;

const UPDATE_SUCCEEDED: &str = "큐레이션이 성공적으로 수정되었습니다.";
/// Recent log lines attached to the load error panel
const DIAGNOSTIC_LINES: usize = 20;

/// What the page body shows; `Ready`/`Submitting` share the form
#[derive(Debug, Clone, PartialEq, Eq)]
enum Screen {
    Loading,
    Failed(String),
    Form,
}

/// Form fields only exist once a record has loaded
fn screen_for(phase: &Phase) -> Screen {
    match phase {
        Phase::Loading => Screen::Loading,
        Phase::Failed(message) => Screen::Failed(message.clone()),
        Phase::Ready | Phase::Submitting | Phase::Navigated(_) => Screen::Form,
    }
}

#[component]
pub fn EditCurationPage(#[prop(into)] id: Signal<String>) -> impl IntoView {
    let config = use_config();
    let toast = use_toast();
    let router = use_router();
    let form = Store::new(EditFormState::new());

    // Load once per distinct id; late responses for an older id are dropped by the ticket
    let load_config = config.clone();
    Effect::new(move |_| {
        let id = id.get();
        if id.is_empty() {
            return;
        }
        let Some(ticket) = form.try_update(|f| f.begin_load(&id)) else {
            return;
        };
        let config = load_config.clone();
        spawn_local(async move {
            let result = api::get_curation(&config, &ticket.id).await;
            if let Err(e) = &result {
                log::error!("Failed to load curation {}: {}", ticket.id, e);
            }
            match form.try_update(|f| f.apply_load(&ticket, result)) {
                Some(LoadOutcome::Failed(message)) => toast.error(message),
                Some(LoadOutcome::Stale) => log::debug!("Dropped stale load for curation {}", ticket.id),
                _ => {}
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (ticket, request) = match form.try_update(|f| f.prepare_submit()) {
            Some(Ok(prepared)) => prepared,
            Some(Err(SubmitRejection::Invalid(reason))) => {
                toast.error(reason.to_string());
                return;
            }
            Some(Err(SubmitRejection::NotReady)) | None => return,
        };

        let config = config.clone();
        spawn_local(async move {
            let result = api::update_curation(&config, &ticket.id, &request).await;
            if let Err(e) = &result {
                log::error!("Failed to update curation {}: {}", ticket.id, e);
            }
            match form.try_update(|f| f.apply_submit(&ticket, result)) {
                Some(SubmitOutcome::Navigate(path)) => {
                    toast.success(UPDATE_SUCCEEDED);
                    router.navigate(&path);
                }
                Some(SubmitOutcome::Failed(message)) => toast.error(message),
                _ => {}
            }
        });
    };

    let screen = Memo::new(move |_| form.phase().with(screen_for));
    let is_submitting = move || form.phase().get() == Phase::Submitting;
    let detail_href = move || routes::detail_path(&id.get());

    view! {
        {move || match screen.get() {
            Screen::Loading => view! { <LoadingSpinner /> }.into_any(),
            Screen::Failed(message) => view! { <LoadErrorPanel message=message /> }.into_any(),
            Screen::Form => view! {
                <div class="page-container">
                    <div class="back-link-row">
                        <a href=detail_href class="back-link">"← 큐레이션으로 돌아가기"</a>
                    </div>

                    <h1 class="page-title">"큐레이션 수정"</h1>

                    <form class="edit-form" on:submit=on_submit.clone()>
                        <div class="form-field">
                            <label for="title" class="field-label">
                                "제목 " <span class="required">"*"</span>
                            </label>
                            <input
                                type="text"
                                id="title"
                                class="text-input"
                                placeholder="제목을 입력하세요"
                                required
                                prop:value=move || form.title().get()
                                on:input=move |ev| *form.title().write() = event_target_value(&ev)
                            />
                        </div>

                        <div class="form-field">
                            <label for="content" class="field-label">
                                "내용 " <span class="required">"*"</span>
                            </label>
                            <textarea
                                id="content"
                                class="text-input"
                                placeholder="내용을 입력하세요"
                                rows="8"
                                required
                                prop:value=move || form.content().get()
                                on:input=move |ev| *form.content().write() = event_target_value(&ev)
                            ></textarea>
                        </div>

                        <FieldListEditor
                            label="링크"
                            add_label="링크 추가"
                            remove_label="링크 삭제"
                            placeholder="https://example.com"
                            input_type="url"
                            rows=Signal::derive(move || form.links().get())
                            on_edit=move |edit: ListEdit| {
                                form.links().write().apply(edit);
                            }
                        />

                        <FieldListEditor
                            label="태그"
                            add_label="태그 추가"
                            remove_label="태그 삭제"
                            placeholder="태그 입력 (예: 개발, AI, 생산성)"
                            input_type="text"
                            rows=Signal::derive(move || form.tags().get())
                            on_edit=move |edit: ListEdit| {
                                form.tags().write().apply(edit);
                            }
                        />

                        <div class="form-actions">
                            <a href=detail_href class="cancel-btn">"취소"</a>
                            <button type="submit" class="submit-btn" disabled=is_submitting>
                                {move || if is_submitting() { "저장 중..." } else { "저장하기" }}
                            </button>
                        </div>
                    </form>
                </div>
            }.into_any(),
        }}
    }
}

/// Full-page spinner while the initial load is outstanding
#[component]
fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="page-container page-center">
            <div class="spinner" aria-label="로딩 중"></div>
        </div>
    }
}

/// Shown instead of the form when the initial load failed
#[component]
fn LoadErrorPanel(message: String) -> impl IntoView {
    let log_dump = rolling_logger::recent_lines(DIAGNOSTIC_LINES).join("\n");

    view! {
        <div class="page-container">
            <div class="error-panel">
                <h2 class="error-title">"오류가 발생했습니다"</h2>
                <p>"⚠️ " {message}</p>
                <a href=HOME_PATH class="back-link">"← 홈으로 돌아가기"</a>
                <Show when={
                    let empty = log_dump.is_empty();
                    move || !empty
                }>
                    <details class="log-dump">
                        <summary>"진단 로그"</summary>
                        <pre>{log_dump.clone()}</pre>
                    </details>
                </Show>
            </div>
        </div>
    }
}
