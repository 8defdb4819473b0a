//! In-memory fragment accessor for testing and ephemeral use.

use super::{FragmentAccessor, FragmentError, FragmentResult};
use std::sync::RwLock;

/// Holds the raw fragment string in memory.
///
/// Reproduces browser normalization: after `set_fragment("x")` the
/// stored fragment reads back as `"#x"`, and setting the empty string
/// clears the fragment entirely.
#[derive(Default)]
pub struct MemoryAccessor {
    fragment: RwLock<String>,
}

impl MemoryAccessor {
    /// Create a new accessor with no fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an accessor seeded with a raw fragment string.
    ///
    /// `raw` is stored verbatim, `#` and all, so tests can stage any
    /// state a browser address bar could be in (including corrupted
    /// fragments such as `"#not-json"`).
    pub fn with_fragment(raw: &str) -> Self {
        Self {
            fragment: RwLock::new(raw.to_string()),
        }
    }
}

impl FragmentAccessor for MemoryAccessor {
    fn fragment(&self) -> FragmentResult<String> {
        let fragment = self
            .fragment
            .read()
            .map_err(|e| FragmentError::Access(format!("Lock error: {}", e)))?;
        Ok(fragment.clone())
    }

    fn set_fragment(&self, fragment: &str) -> FragmentResult<()> {
        let mut stored = self
            .fragment
            .write()
            .map_err(|e| FragmentError::Access(format!("Lock error: {}", e)))?;
        *stored = if fragment.is_empty() {
            String::new()
        } else {
            format!("#{}", fragment)
        };
        Ok(())
    }
}
