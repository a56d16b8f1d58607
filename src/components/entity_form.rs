//! Entity Form Pieces
//!
//! Name input, submit/cancel buttons and the error banner shared by every screen.

use leptos::prelude::*;

/// Text input bound to a draft's name
#[component]
pub fn NameInput(
    #[prop(optional, into)] id: Option<String>,
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class="name-input"
            id=id
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

/// Submit button ("Tambah" or "Update") plus "Batal" while editing
#[component]
pub fn FormActions(
    #[prop(into)] editing: Signal<bool>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="form-actions">
            <button type="submit" class="submit-btn">
                {move || if editing.get() { "Update" } else { "Tambah" }}
            </button>
            <Show when=move || editing.get()>
                <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                    "Batal"
                </button>
            </Show>
        </div>
    }
}

/// Last failed call, if any, with a dismiss button
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-text">{text}</span>
                    <button type="button" class="error-dismiss" on:click=move |_| on_dismiss.run(())>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
