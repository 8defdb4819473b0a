//! Fragment-backed document store.

use crate::fragment::{FragmentError, FragmentResult, SharedAccessor};
use crate::state::WidgetState;
use serde_json::{Map, Value};

/// The decoded JSON document held in the URL fragment.
///
/// Top-level keys are widget instance identifiers; values are the
/// opaque per-widget state objects. Key order is preserved across
/// round trips.
pub type FragmentDocument = Map<String, Value>;

/// Reads and writes a single JSON document encoded in the URL fragment.
///
/// The store caches nothing: every read re-derives the document from
/// the current fragment, so externally applied changes (back/forward
/// navigation, manual edits) are picked up immediately. Writes rewrite
/// the whole fragment synchronously.
#[derive(Clone)]
pub struct FragmentStore {
    accessor: SharedAccessor,
}

impl FragmentStore {
    /// Create a store over the given fragment accessor.
    pub fn new(accessor: SharedAccessor) -> Self {
        Self { accessor }
    }

    /// Decode the current fragment.
    ///
    /// An absent fragment or a bare `#` decodes to an empty document.
    /// Anything else must be a JSON object; invalid JSON and
    /// non-object JSON both surface as [`FragmentError::Malformed`].
    /// No default is substituted here, callers decide how to recover.
    pub fn read(&self) -> FragmentResult<FragmentDocument> {
        let raw = self.accessor.fragment()?;
        let json = raw.strip_prefix('#').unwrap_or(&raw);
        if json.is_empty() {
            return Ok(FragmentDocument::new());
        }
        serde_json::from_str(json).map_err(|e| FragmentError::Malformed(e.to_string()))
    }

    /// Encode `doc` and install it as the fragment.
    ///
    /// The side effect is immediately visible to anything else reading
    /// the fragment; the previous document is fully replaced.
    pub fn write(&self, doc: &FragmentDocument) -> FragmentResult<()> {
        let json =
            serde_json::to_string(doc).map_err(|e| FragmentError::Serialization(e.to_string()))?;
        log::debug!("Writing fragment document ({} widget entries)", doc.len());
        self.accessor.set_fragment(&json)
    }

    /// Create the namespaced state view for a widget instance.
    ///
    /// Identifiers are not validated; two views sharing an identifier
    /// share a single namespace.
    pub fn state_for(&self, widget_id: impl Into<String>) -> WidgetState {
        WidgetState::new(self.clone(), widget_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::{FragmentAccessor, MemoryAccessor};
    use serde_json::json;
    use std::sync::Arc;

    fn store_over(accessor: Arc<MemoryAccessor>) -> FragmentStore {
        FragmentStore::new(accessor)
    }

    #[test]
    fn test_absent_fragment_reads_empty_document() {
        let store = store_over(Arc::new(MemoryAccessor::new()));
        assert!(store.read().unwrap().is_empty());
    }

    #[test]
    fn test_bare_hash_reads_empty_document() {
        let store = store_over(Arc::new(MemoryAccessor::with_fragment("#")));
        assert!(store.read().unwrap().is_empty());
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let accessor = Arc::new(MemoryAccessor::new());
        let store = store_over(accessor);

        let mut doc = FragmentDocument::new();
        doc.insert("w1".to_string(), json!({"k": [1, 2, 3]}));
        store.write(&doc).unwrap();

        assert_eq!(store.read().unwrap(), doc);
    }

    #[test]
    fn test_write_produces_compact_json() {
        let accessor = Arc::new(MemoryAccessor::new());
        let store = store_over(accessor.clone());

        let mut doc = FragmentDocument::new();
        doc.insert("WidgetState-1".to_string(), json!({"message": "hi"}));
        store.write(&doc).unwrap();

        assert_eq!(
            accessor.fragment().unwrap(),
            r##"#{"WidgetState-1":{"message":"hi"}}"##
        );
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let store = store_over(Arc::new(MemoryAccessor::with_fragment("#not-json")));
        assert!(matches!(store.read(), Err(FragmentError::Malformed(_))));
    }

    #[test]
    fn test_non_object_json_is_malformed() {
        for raw in ["#[1,2,3]", "#42", "#\"text\""] {
            let store = store_over(Arc::new(MemoryAccessor::with_fragment(raw)));
            assert!(
                matches!(store.read(), Err(FragmentError::Malformed(_))),
                "expected Malformed for {raw}"
            );
        }
    }

    #[test]
    fn test_key_order_survives_round_trip() {
        let accessor = Arc::new(MemoryAccessor::new());
        let store = store_over(accessor.clone());

        let mut doc = FragmentDocument::new();
        doc.insert("zebra".to_string(), json!({}));
        doc.insert("alpha".to_string(), json!({}));
        store.write(&doc).unwrap();

        assert_eq!(accessor.fragment().unwrap(), r##"#{"zebra":{},"alpha":{}}"##);
        let keys: Vec<_> = store.read().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["zebra", "alpha"]);
    }

    #[test]
    fn test_interleaved_writes_are_last_write_wins() {
        let accessor = Arc::new(MemoryAccessor::new());
        let store = store_over(accessor);

        // Both writers snapshot the same initial document.
        let base = store.read().unwrap();

        let mut first = base.clone();
        first.insert("w1".to_string(), json!({"k": "from-w1"}));

        let mut second = base.clone();
        second.insert("w2".to_string(), json!({"k": "from-w2"}));

        store.write(&first).unwrap();
        store.write(&second).unwrap();

        // The second write replaces the whole document: w1's entry,
        // which landed between the second writer's read and write, is
        // gone.
        let final_doc = store.read().unwrap();
        assert!(final_doc.get("w1").is_none());
        assert_eq!(final_doc.get("w2"), Some(&json!({"k": "from-w2"})));
    }
}
