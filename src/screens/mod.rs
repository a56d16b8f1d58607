//! Screens
//!
//! One screen per admin page. Each screen owns its collection state in a
//! signal; unmounting the screen disposes the signal, and calls that settle
//! afterwards find nothing to write to.

mod category;
mod label;
mod label_category;

pub use category::CategoryScreen;
pub use label::LabelScreen;
pub use label_category::LabelCategoryScreen;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::collection::{self, CollectionState, StateCell};
use crate::context::AppContext;
use crate::models::{Draft, Record};

impl<R, D> StateCell<R, D> for RwSignal<CollectionState<R, D>>
where
    R: Send + Sync + 'static,
    D: Send + Sync + 'static,
{
    fn read<T>(&self, f: impl FnOnce(&CollectionState<R, D>) -> T) -> Option<T> {
        self.try_with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut CollectionState<R, D>)) -> bool {
        self.try_update(f).is_some()
    }
}

// ========================
// Signal/Callback adapters for the shared form components
// ========================

fn draft_name<R, D>(state: RwSignal<CollectionState<R, D>>) -> Signal<String>
where
    R: Record + Send + Sync,
    D: Draft<R> + Send + Sync,
{
    Signal::derive(move || state.with(|s| s.draft.name().to_string()))
}

fn set_draft_name<R, D>(state: RwSignal<CollectionState<R, D>>) -> Callback<String>
where
    R: Record + Send + Sync,
    D: Draft<R> + Send + Sync,
{
    Callback::new(move |name: String| state.update(|s| s.draft.set_name(name)))
}

fn is_editing<R, D>(state: RwSignal<CollectionState<R, D>>) -> Signal<bool>
where
    R: Record + Send + Sync,
    D: Draft<R> + Send + Sync,
{
    Signal::derive(move || state.with(|s| s.editing.is_some()))
}

fn cancel_edit<R, D>(state: RwSignal<CollectionState<R, D>>) -> Callback<()>
where
    R: Record + Send + Sync,
    D: Draft<R> + Send + Sync,
{
    Callback::new(move |_| state.update(|s| s.cancel_edit()))
}

fn error_message<R, D>(state: RwSignal<CollectionState<R, D>>) -> Signal<Option<String>>
where
    R: Record + Send + Sync,
    D: Draft<R> + Send + Sync,
{
    Signal::derive(move || state.with(|s| s.error.as_ref().map(|err| err.user_message())))
}

/// Ids in display order; rows keyed by id read their number from here
fn row_ids<R, D>(state: RwSignal<CollectionState<R, D>>) -> Memo<Vec<u32>>
where
    R: Record + Send + Sync,
    D: Draft<R> + Send + Sync,
{
    Memo::new(move |_| state.with(|s| s.ids()))
}

fn row_number(ids: Memo<Vec<u32>>, id: u32) -> Signal<usize> {
    Signal::derive(move || ids.with(|ids| collection::row_number(ids, id)))
}

fn edit_callback<R, D>(state: RwSignal<CollectionState<R, D>>, record: R) -> Callback<()>
where
    R: Record + Send + Sync,
    D: Draft<R> + Send + Sync,
{
    Callback::new(move |_| state.update(|s| s.begin_edit(&record)))
}

fn dismiss_error<R, D>(state: RwSignal<CollectionState<R, D>>) -> Callback<()>
where
    R: Record + Send + Sync,
    D: Draft<R> + Send + Sync,
{
    Callback::new(move |_| state.update(|s| s.dismiss_error()))
}

// ========================
// Remote actions
// ========================

/// Form submit handler: create or update, per the form's mode
fn submit_handler<R, D>(
    ctx: AppContext,
    state: RwSignal<CollectionState<R, D>>,
) -> impl Fn(web_sys::SubmitEvent) + Copy + 'static
where
    R: Record + DeserializeOwned + Send + Sync,
    D: Draft<R> + Send + Sync,
{
    move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let api = ctx.api();
            collection::submit(&state, &api).await;
        });
    }
}

fn delete_callback<R, D>(
    ctx: AppContext,
    state: RwSignal<CollectionState<R, D>>,
    id: u32,
) -> Callback<()>
where
    R: Record + DeserializeOwned + Send + Sync,
    D: Draft<R> + Send + Sync,
{
    Callback::new(move |_| {
        spawn_local(async move {
            let api = ctx.api();
            collection::delete(&state, &api, id).await;
        });
    })
}

/// Header "+ Add" button: leave edit mode and bring the form into view
fn start_new<R, D>(state: RwSignal<CollectionState<R, D>>)
where
    R: Record + Send + Sync,
    D: Draft<R> + Send + Sync,
{
    state.update(|s| s.cancel_edit());
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[component]
fn LoadingPlaceholder() -> impl IntoView {
    view! { <div class="loading">"Loading..."</div> }
}
