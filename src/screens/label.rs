//! Label Screen
//!
//! Table of labels with their category, and a form whose category is picked
//! from the category list loaded alongside.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{
    cancel_edit, delete_callback, dismiss_error, draft_name, edit_callback, error_message,
    is_editing, row_ids, row_number, set_draft_name, start_new, submit_handler,
    LoadingPlaceholder,
};
use crate::collection::{self, CollectionState};
use crate::components::{ErrorBanner, FormActions, NameInput, RowActions};
use crate::context::use_app_context;
use crate::lookup::category_name;
use crate::models::{Category, CategoryDraft, Label, LabelDraft, Record};

type LabelState = RwSignal<CollectionState<Label, LabelDraft>>;
type CategoryState = RwSignal<CollectionState<Category, CategoryDraft>>;

#[component]
fn LabelRow(
    number: Signal<usize>,
    label: Label,
    labels: LabelState,
    categories: CategoryState,
) -> impl IntoView {
    let ctx = use_app_context();
    let href = label.detail_href();
    let name = label.name.clone();
    let category_id = label.category_id;
    let category = move || categories.with(|s| category_name(&s.items, category_id).to_string());
    let on_edit = edit_callback(labels, label.clone());
    let on_delete = delete_callback(ctx, labels, label.id);

    view! {
        <tr class="entity-row">
            <td>{move || number.get()}</td>
            <td>
                <a class="entity-link" href=href>{name}</a>
            </td>
            <td>{category}</td>
            <td>
                <RowActions record=label on_edit=on_edit on_delete=on_delete />
            </td>
        </tr>
    }
}

/// Category `<select>` bound to the label draft
#[component]
fn CategorySelect(labels: LabelState, categories: CategoryState) -> impl IntoView {
    let selected = move || labels.with(|s| s.draft.category_id);

    view! {
        <select
            id="categoryId"
            class="field-select"
            on:change=move |ev| {
                let value = event_target_value(&ev);
                labels.update(|s| s.draft.category_id = value.parse().ok());
            }
        >
            <option value="" prop:selected=move || selected().is_none()>"Pilih Kategori"</option>
            {move || {
                categories
                    .with(|s| s.items.clone())
                    .into_iter()
                    .map(|category| {
                        let id = category.id;
                        view! {
                            <option value=id.to_string() prop:selected=move || selected() == Some(id)>
                                {category.name}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}

#[component]
pub fn LabelScreen() -> impl IntoView {
    let ctx = use_app_context();
    let labels: LabelState = RwSignal::new(CollectionState::new());
    let categories: CategoryState = RwSignal::new(CollectionState::new());

    // Both lists load together; the screen waits for both to settle
    Effect::new(move |_| {
        spawn_local(async move {
            let api = ctx.api();
            collection::load_pair((&labels, &api), (&categories, &api)).await;
        });
    });

    let ready = move || labels.with(|s| s.is_ready()) && categories.with(|s| s.is_ready());
    let on_submit = submit_handler(ctx, labels);
    // Typing in the form must not rebuild the table
    let items = Memo::new(move |_| labels.with(|s| s.items.clone()));
    let ids = row_ids(labels);

    view! {
        <Show when=ready fallback=|| view! { <LoadingPlaceholder /> }>
            <section class="screen">
                <div class="screen-header">
                    <h2>"Labels"</h2>
                    <button type="button" class="add-btn" on:click=move |_| start_new(labels)>
                        "+ Add Label"
                    </button>
                </div>

                <ErrorBanner message=error_message(labels) on_dismiss=dismiss_error(labels) />
                <ErrorBanner message=error_message(categories) on_dismiss=dismiss_error(categories) />

                <form class="entity-form" on:submit=on_submit>
                    <label class="field-label" for="labelName">"Nama Label"</label>
                    <NameInput
                        id="labelName"
                        placeholder="Nama label"
                        value=draft_name(labels)
                        on_input=set_draft_name(labels)
                    />
                    <label class="field-label" for="categoryId">"Kategori"</label>
                    <CategorySelect labels=labels categories=categories />
                    <FormActions editing=is_editing(labels) on_cancel=cancel_edit(labels) />
                </form>

                <table class="entity-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Nama Label"</th>
                            <th>"Kategori"</th>
                            <th>"Aksi"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || items.with(Vec::is_empty)>
                            <tr>
                                <td colspan="4" class="empty-row">"Belum ada label"</td>
                            </tr>
                        </Show>
                        <For
                            each=move || items.get()
                            key=|label| (label.id, label.name.clone(), label.category_id)
                            children=move |label| {
                                let number = row_number(ids, label.id);
                                view! {
                                    <LabelRow
                                        number=number
                                        label=label
                                        labels=labels
                                        categories=categories
                                    />
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>
        </Show>
    }
}
