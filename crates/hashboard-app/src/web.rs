//! WebAssembly entry point and platform-specific code.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::HashboardApp;
use hashboard_core::{FragmentStore, LocationAccessor};
use std::rc::Rc;

/// Id of the canvas element the dashboard renders into.
const CANVAS_ID: &str = "hashboard_canvas";

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub async fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    log::info!("Starting Hashboard (WASM)");

    let canvas = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CANVAS_ID))
        .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        .expect("Canvas element not found");

    // Persist widget state straight into the address bar.
    let store = FragmentStore::new(Rc::new(LocationAccessor::new()));

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|_cc| Ok(Box::new(HashboardApp::new(store)))),
        )
        .await
        .expect("Failed to start eframe");
}
