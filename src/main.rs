//! Curation Web Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod error;
mod form;
mod models;
mod routes;
mod toast;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = rolling_logger::init(level, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }

    let config = AppConfig::from_document();
    log::info!("Curation API at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
