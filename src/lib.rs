pub mod analytics;
mod app;
pub mod config;
pub mod easter_egg;
pub mod error;
pub mod nav;
pub mod notification;
pub mod phone;
pub mod scroll;
mod sections;
pub mod storage;
pub mod store;
pub mod supabase;
pub mod types;
pub mod validation;
pub mod waitlist;

use leptos::*;
use wasm_bindgen::prelude::*;

pub use app::App;
pub use config::Config;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = Config::from_env();
    // Ignore a second init, the logger may already be installed
    let _ = console_log::init_with_level(config.log_level);
    log::info!("Fluent landing starting, {} store", config.backend_name());

    mount_to_body(move || view! { <App config=config/> });
}
