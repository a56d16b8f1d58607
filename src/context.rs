//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpResource;
use crate::config::ApiConfig;

/// Top-level screens reachable from the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Categories,
    Labels,
    LabelsAndCategories,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Categories, Screen::Labels, Screen::LabelsAndCategories];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Categories => "Kategori",
            Screen::Labels => "Label",
            Screen::LabelsAndCategories => "Label & Kategori",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Screen currently mounted - read
    pub screen: ReadSignal<Screen>,
    /// Screen currently mounted - write
    set_screen: WriteSignal<Screen>,
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(screen: (ReadSignal<Screen>, WriteSignal<Screen>), config: ApiConfig) -> Self {
        Self {
            screen: screen.0,
            set_screen: screen.1,
            config: StoredValue::new(config),
        }
    }

    /// Switch screens; the old screen's state is dropped with it
    pub fn show(&self, screen: Screen) {
        log::info!("switching to {screen:?}");
        self.set_screen.set(screen);
    }

    /// REST client for the configured API base
    pub fn api(&self) -> HttpResource {
        HttpResource::new(self.config.get_value())
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
