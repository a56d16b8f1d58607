//! UI Components
//!
//! Reusable Leptos components.

mod entity_form;
mod row_actions;
mod screen_tab_bar;

pub use entity_form::{ErrorBanner, FormActions, NameInput};
pub use row_actions::RowActions;
pub use screen_tab_bar::ScreenTabBar;
