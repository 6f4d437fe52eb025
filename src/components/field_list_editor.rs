//! Field List Editor Component
//!
//! Growable list of text inputs with add/remove controls, used for links and tags.

use leptos::prelude::*;

use crate::form::{FieldList, ListEdit};

/// Editable list of single-line inputs
///
/// Rows are keyed by position; each input reads its value reactively so
/// removing a row shifts the remaining values up without rebuilding them.
#[component]
pub fn FieldListEditor(
    #[prop(into)] label: String,
    #[prop(into)] add_label: String,
    #[prop(into)] remove_label: String,
    #[prop(into)] placeholder: String,
    /// HTML input type ("url", "text")
    #[prop(into)] input_type: String,
    #[prop(into)] rows: Signal<FieldList>,
    #[prop(into)] on_edit: Callback<ListEdit>,
) -> impl IntoView {
    view! {
        <div class="field-list">
            <div class="field-list-header">
                <label class="field-label">{label}</label>
                <button type="button" class="field-list-add" on:click=move |_| on_edit.run(ListEdit::Append)>
                    "+ " {add_label}
                </button>
            </div>
            <div class="field-list-rows">
                <For
                    each=move || 0..rows.with(|r| r.len())
                    key=|index| *index
                    children=move |index| {
                        let value = move || rows.with(|r| r.values().get(index).cloned().unwrap_or_default());
                        view! {
                            <div class="field-list-row">
                                <input
                                    type=input_type.clone()
                                    class="field-input"
                                    placeholder=placeholder.clone()
                                    prop:value=value
                                    on:input=move |ev| on_edit.run(ListEdit::Update(index, event_target_value(&ev)))
                                />
                                <button
                                    type="button"
                                    class="field-list-remove"
                                    aria-label=remove_label.clone()
                                    on:click=move |_| on_edit.run(ListEdit::Remove(index))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
