//! Main application entry point (native).

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting Hashboard");

    let accessor = hashboard_core::create_default_accessor().unwrap_or_else(|e| {
        log::warn!("Falling back to in-memory fragment store: {}", e);
        std::sync::Arc::new(hashboard_core::MemoryAccessor::new())
    });
    let store = hashboard_core::FragmentStore::new(accessor);

    eframe::run_native(
        "Hashboard",
        eframe::NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(hashboard_app::HashboardApp::new(store)))),
    )
}

#[cfg(not(all(feature = "native", not(target_arch = "wasm32"))))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
