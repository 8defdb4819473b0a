//! Hashboard Core Library
//!
//! Platform-agnostic state persistence for dashboard widgets: a single
//! JSON document round-tripped through the URL fragment, partitioned
//! into per-widget namespaces by widget instance identifier.

pub mod fragment;
pub mod state;
pub mod store;

pub use fragment::{
    FragmentAccessor, FragmentError, FragmentResult, MemoryAccessor, SharedAccessor,
    create_default_accessor,
};
pub use state::WidgetState;
pub use store::{FragmentDocument, FragmentStore};

#[cfg(not(target_arch = "wasm32"))]
pub use fragment::FileAccessor;

#[cfg(target_arch = "wasm32")]
pub use fragment::LocationAccessor;
