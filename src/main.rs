//! Catalog Admin Frontend Entry Point
//!
//! Browser-only views are compiled for `wasm32`; the synchronizer, models and
//! API contract are also compiled natively for unit tests.

#[cfg(any(target_arch = "wasm32", test))]
mod api;
#[cfg(any(target_arch = "wasm32", test))]
mod collection;
#[cfg(any(target_arch = "wasm32", test))]
mod config;
#[cfg(any(target_arch = "wasm32", test))]
mod lookup;
#[cfg(any(target_arch = "wasm32", test))]
mod models;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod context;
#[cfg(target_arch = "wasm32")]
mod screens;

#[cfg(target_arch = "wasm32")]
fn main() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("catalog admin using API at {}", config::ApiConfig::from_build_env().base_url());

    mount_to_body(app::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("catalog-admin-ui runs in the browser; build it with `trunk build`.");
}
