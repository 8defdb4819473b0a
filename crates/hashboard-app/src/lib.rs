//! Hashboard Application
//!
//! The application shell: assembles the demo dashboard and hosts it
//! with eframe, natively or in the browser.

mod app;

pub use app::HashboardApp;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
