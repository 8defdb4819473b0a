//! Fragment access abstraction.
//!
//! The URL fragment is process-wide shared mutable state. It is never
//! touched through a hidden global: everything goes through the
//! [`FragmentAccessor`] trait, so the medium can be swapped for an
//! in-memory or file-backed implementation outside the browser.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

#[cfg(target_arch = "wasm32")]
mod location;

pub use memory::MemoryAccessor;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileAccessor;

#[cfg(target_arch = "wasm32")]
pub use location::LocationAccessor;

use thiserror::Error;

/// Fragment access and decoding errors.
#[derive(Debug, Error)]
pub enum FragmentError {
    /// The fragment exists but is not a JSON object.
    #[error("Malformed fragment: {0}")]
    Malformed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Fragment access error: {0}")]
    Access(String),
}

/// Result type for fragment operations.
pub type FragmentResult<T> = Result<T, FragmentError>;

/// Trait for the medium holding the raw fragment string.
///
/// The contract mirrors the browser `Location` API: `fragment` reports
/// the fragment *including* the leading `#` when one is present (and
/// the empty string when absent), while `set_fragment` takes the
/// fragment *without* the leading `#` and the medium adds it.
///
/// Note: On native platforms, implementations must be Send + Sync.
/// On WASM, these bounds are relaxed since it's single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub trait FragmentAccessor: Send + Sync {
    /// Current raw fragment, `#` included (empty if absent).
    fn fragment(&self) -> FragmentResult<String>;

    /// Replace the fragment. `fragment` carries no leading `#`.
    fn set_fragment(&self, fragment: &str) -> FragmentResult<()>;
}

/// Trait for the medium holding the raw fragment string (WASM version
/// without Send + Sync).
#[cfg(target_arch = "wasm32")]
pub trait FragmentAccessor {
    /// Current raw fragment, `#` included (empty if absent).
    fn fragment(&self) -> FragmentResult<String>;

    /// Replace the fragment. `fragment` carries no leading `#`.
    fn set_fragment(&self, fragment: &str) -> FragmentResult<()>;
}

/// Platform-appropriate shared handle to a fragment accessor.
#[cfg(not(target_arch = "wasm32"))]
pub type SharedAccessor = std::sync::Arc<dyn FragmentAccessor>;

/// Platform-appropriate shared handle to a fragment accessor.
#[cfg(target_arch = "wasm32")]
pub type SharedAccessor = std::rc::Rc<dyn FragmentAccessor>;

/// Create the platform-default fragment accessor.
///
/// Native builds persist the fragment string to a file under the local
/// data directory, standing in for the browser URL bar. WASM builds
/// use the current browser location.
#[cfg(not(target_arch = "wasm32"))]
pub fn create_default_accessor() -> FragmentResult<SharedAccessor> {
    Ok(std::sync::Arc::new(FileAccessor::default_location()?))
}

/// Create the platform-default fragment accessor.
#[cfg(target_arch = "wasm32")]
pub fn create_default_accessor() -> FragmentResult<SharedAccessor> {
    Ok(std::rc::Rc::new(LocationAccessor::new()))
}
