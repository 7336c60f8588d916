//! Product List Frontend Entry Point

mod models;
mod error;
mod config;
mod catalog;
mod state;
mod loader;
mod context;
mod logging;
mod components;
mod app;

use app::App;
use config::WidgetConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let config = WidgetConfig::from_body();
    mount_to_body(move || view! { <App config=config /> });
}
