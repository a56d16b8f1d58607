//! Category Screen
//!
//! Table of categories with a create/edit form above it.

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
use crate::models::{Category, CategoryDraft, Record};

type CategoryState = RwSignal<CollectionState<Category, CategoryDraft>>;

#[component]
fn CategoryRow(number: Signal<usize>, category: Category, state: CategoryState) -> impl IntoView {
    let ctx = use_app_context();
    let href = category.detail_href();
    let name = category.name.clone();
    let on_edit = edit_callback(state, category.clone());
    let on_delete = delete_callback(ctx, state, category.id);

    view! {
        <tr class="entity-row">
            <td>{move || number.get()}</td>
            <td>
                <a class="entity-link" href=href>{name}</a>
            </td>
            <td>
                <RowActions record=category on_edit=on_edit on_delete=on_delete />
            </td>
        </tr>
    }
}

#[component]
pub fn CategoryScreen() -> impl IntoView {
    let ctx = use_app_context();
    let state: CategoryState = RwSignal::new(CollectionState::new());

    // Load once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let api = ctx.api();
            collection::load(&state, &api).await;
        });
    });

    let on_submit = submit_handler(ctx, state);
    // Typing in the form must not rebuild the table
    let items = Memo::new(move |_| state.with(|s| s.items.clone()));
    let ids = row_ids(state);

    view! {
        <Show when=move || state.with(|s| s.is_ready()) fallback=|| view! { <LoadingPlaceholder /> }>
            <section class="screen">
                <div class="screen-header">
                    <h2>"Categories"</h2>
                    <button type="button" class="add-btn" on:click=move |_| start_new(state)>
                        "+ Add Category"
                    </button>
                </div>

                <ErrorBanner message=error_message(state) on_dismiss=dismiss_error(state) />

                <form class="entity-form" on:submit=on_submit>
                    <label class="field-label" for="categoryName">"Nama Kategori"</label>
                    <NameInput
                        id="categoryName"
                        placeholder="Nama kategori"
                        value=draft_name(state)
                        on_input=set_draft_name(state)
                    />
                    <FormActions editing=is_editing(state) on_cancel=cancel_edit(state) />
                </form>

                <table class="entity-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Nama Kategori"</th>
                            <th>"Aksi"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || items.with(Vec::is_empty)>
                            <tr>
                                <td colspan="3" class="empty-row">"Belum ada kategori"</td>
                            </tr>
                        </Show>
                        <For
                            each=move || items.get()
                            key=|category| (category.id, category.name.clone())
                            children=move |category| {
                                let number = row_number(ids, category.id);
                                view! { <CategoryRow number=number category=category state=state /> }
                            }
                        />
                    </tbody>
                </table>
            </section>
        </Show>
    }
}
