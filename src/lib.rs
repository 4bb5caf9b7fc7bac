// src/lib.rs

//! StockLens - inventory lookup with QR scanning and an AR stock overlay

#![deny(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::result_large_err)]

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = tracing_wasm::try_set_as_global_default() {
        web_sys::console::error_1(&format!("Failed to set up tracing: {:?}", e).into());
    }

    dioxus::launch(ui::App);
}

// Core modules (always available)
pub mod ar;
pub mod config;
pub mod error;
pub mod inventory;
pub mod manager;
pub mod platform;
pub mod scanner;
pub mod types;
pub mod ui;

// Native-only modules
#[cfg(not(target_arch = "wasm32"))]
pub mod app;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

// Re-export commonly used types
pub use error::{Error, ErrorKind, Result, ResultExt};
pub use manager::{Manager, ManagerState, ManagerStatus};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
