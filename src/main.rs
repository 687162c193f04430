//! Dream List Frontend Entry Point

mod app;
mod browser_storage;
mod components;
mod context;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("Logger not installed: {}", e).into());
    }
    log::info!("Dream List starting");
    mount_to_body(App);
}
