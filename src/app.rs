//! Catalog Admin App
//!
//! Root component: tab bar plus the mounted screen.

use leptos::prelude::*;

use crate::components::ScreenTabBar;
use crate::config::ApiConfig;
use crate::context::{AppContext, Screen};
use crate::screens::{CategoryScreen, LabelCategoryScreen, LabelScreen};

#[component]
pub fn App() -> impl IntoView {
    let (screen, set_screen) = signal(Screen::Categories);

    // Provide context to all children
    provide_context(AppContext::new((screen, set_screen), ApiConfig::from_build_env()));

    view! {
        <div class="app-layout">
            <ScreenTabBar />

            // Switching remounts the screen, so its cache starts empty again
            <main class="main-content">
                {move || match screen.get() {
                    Screen::Categories => view! { <CategoryScreen /> }.into_any(),
                    Screen::Labels => view! { <LabelScreen /> }.into_any(),
                    Screen::LabelsAndCategories => view! { <LabelCategoryScreen /> }.into_any(),
                }}
            </main>
        </div>
    }
}
