//! Row Actions Component
//!
//! Edit and delete buttons for one record row. Delete asks first, naming
//! the record, and the Edit button steps aside while the question is open.

use leptos::prelude::*;

use crate::models::Record;

/// Edit/delete controls for `record`
///
/// # Arguments
/// * `record` - Row's record; its name goes into the delete question
/// * `on_edit` - Load the record into the form
/// * `on_delete` - Send the delete once confirmed
/// * `compact` - Smaller buttons for list layouts
#[component]
pub fn RowActions<R>(
    record: R,
    #[prop(into)] on_edit: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
    #[prop(optional)] compact: bool,
) -> impl IntoView
where
    R: Record + Send + Sync,
{
    let (confirming, set_confirming) = signal(false);
    let size = if compact { " small" } else { "" };
    let delete_label = record.delete_label();
    let prompt = record.delete_prompt();

    view! {
        <span class="row-actions">
            <Show
                when=move || confirming.get()
                fallback=move || {
                    view! {
                        <button
                            type="button"
                            class=format!("edit-btn{size}")
                            on:click=move |_| on_edit.run(())
                        >
                            "Edit"
                        </button>
                        <button
                            type="button"
                            class=format!("delete-btn{size}")
                            aria-label=delete_label.clone()
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_confirming.set(true);
                            }
                        >
                            "Hapus"
                        </button>
                    }
                }
            >
                <span class="delete-confirm" role="alertdialog">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button
                        type="button"
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(false);
                            on_delete.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(false);
                        }
                    >
                        "✗"
                    </button>
                </span>
            </Show>
        </span>
    }
}
