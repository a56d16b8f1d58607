//! Screen Tab Bar Component
//!
//! Tab bar for switching between the admin screens.

use leptos::prelude::*;

use crate::context::{use_app_context, Screen};

#[component]
pub fn ScreenTabBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="screen-tab-bar">
            {Screen::ALL.into_iter().map(|screen| {
                let is_active = move || ctx.screen.get() == screen;
                let tab_class = move || {
                    if is_active() { "screen-tab active" } else { "screen-tab" }
                };

                view! {
                    <button
                        type="button"
                        class=tab_class
                        on:click=move |_| ctx.show(screen)
                    >
                        {screen.title()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
