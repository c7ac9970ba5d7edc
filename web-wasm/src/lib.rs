//! AgriAI Web Dashboard (Leptos + WASM)

mod app;
mod components;
mod scan_task;
mod screens;
mod timer;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("AgriAI dashboard starting");
    leptos::mount::mount_to_body(app::App);
}
