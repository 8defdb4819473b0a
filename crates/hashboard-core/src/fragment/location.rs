//! Browser location fragment accessor for WebAssembly.
//!
//! Reads and writes `window.location.hash` directly, so persisted
//! state lives in the address bar and survives reloads (and travels
//! with a copy-pasted URL).

use super::{FragmentAccessor, FragmentError, FragmentResult};

/// Accessor over the current browser location.
///
/// Note: This is intentionally not Send/Sync since WASM is
/// single-threaded and the location handle is not thread-safe.
pub struct LocationAccessor;

impl LocationAccessor {
    /// Create a new location accessor.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocationAccessor {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentAccessor for LocationAccessor {
    fn fragment(&self) -> FragmentResult<String> {
        let window = web_sys::window()
            .ok_or_else(|| FragmentError::Access("No window object".to_string()))?;
        window
            .location()
            .hash()
            .map_err(|e| FragmentError::Access(format!("Failed to read location hash: {:?}", e)))
    }

    fn set_fragment(&self, fragment: &str) -> FragmentResult<()> {
        let window = web_sys::window()
            .ok_or_else(|| FragmentError::Access("No window object".to_string()))?;
        window
            .location()
            .set_hash(fragment)
            .map_err(|e| FragmentError::Access(format!("Failed to set location hash: {:?}", e)))
    }
}
