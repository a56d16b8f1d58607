//! Label & Category Screen
//!
//! Compact lists of labels and categories on one page, each with its own
//! name-only form. Labels created here carry no category.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use super::{
    cancel_edit, delete_callback, dismiss_error, draft_name, edit_callback, error_message,
    is_editing, set_draft_name, submit_handler, LoadingPlaceholder,
};
use crate::collection::{self, CollectionState};
use crate::components::{ErrorBanner, FormActions, NameInput, RowActions};
use crate::context::{use_app_context, AppContext};
use crate::models::{Category, CategoryDraft, Draft, Label, LabelNameDraft, Record};

fn compact_section<R, D>(
    ctx: AppContext,
    state: RwSignal<CollectionState<R, D>>,
    title: &'static str,
    placeholder: &'static str,
) -> impl IntoView
where
    R: Record + DeserializeOwned + Send + Sync,
    D: Draft<R> + Send + Sync,
{
    let on_submit = submit_handler(ctx, state);

    view! {
        <section class="compact-section">
            <h2>{title}</h2>

            <ErrorBanner message=error_message(state) on_dismiss=dismiss_error(state) />

            <form class="compact-form" on:submit=on_submit>
                <NameInput
                    placeholder=placeholder
                    value=draft_name(state)
                    on_input=set_draft_name(state)
                />
                <FormActions editing=is_editing(state) on_cancel=cancel_edit(state) />
            </form>

            <ul class="compact-list">
                <For
                    each=move || state.with(|s| s.items.clone())
                    key=|record| (record.id(), record.name().to_string())
                    children=move |record| {
                        let href = record.detail_href();
                        let name = record.name().to_string();
                        let on_edit = edit_callback(state, record.clone());
                        let on_delete = delete_callback(ctx, state, record.id());
                        view! {
                            <li class="compact-row">
                                <a class="entity-link" href=href>{name}</a>
                                <RowActions record=record on_edit=on_edit on_delete=on_delete compact=true />
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}

#[component]
pub fn LabelCategoryScreen() -> impl IntoView {
    let ctx = use_app_context();
    let labels = RwSignal::new(CollectionState::<Label, LabelNameDraft>::new());
    let categories = RwSignal::new(CollectionState::<Category, CategoryDraft>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            let api = ctx.api();
            collection::load_pair((&labels, &api), (&categories, &api)).await;
        });
    });

    let ready = move || labels.with(|s| s.is_ready()) && categories.with(|s| s.is_ready());

    view! {
        <Show when=ready fallback=|| view! { <LoadingPlaceholder /> }>
            <div class="screen compact">
                {compact_section(ctx, labels, "Labels", "Nama label")}
                {compact_section(ctx, categories, "Categories", "Nama kategori")}
            </div>
        </Show>
    }
}
