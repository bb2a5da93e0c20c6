use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;

/// Wire logging and configuration, then mount the page
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_logger(Box::new(infrastructure::ConsoleLogger::for_build()));
    domain::logging::init_time_provider(Box::new(infrastructure::BrowserTimeProvider));
    config::init_config(config::AppConfig::from_build_env());

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!("🚀 Forecast chart ready, endpoint {}", config::config().endpoint),
    );

    leptos::mount_to_body(app::App);
}
