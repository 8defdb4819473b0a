//! Per-widget namespaced state view.

use crate::fragment::FragmentResult;
use crate::store::FragmentStore;
use serde_json::{Map, Value};

/// Namespaced key/value view over a [`FragmentStore`], bound to one
/// widget instance identifier.
///
/// This is the surface a widget sees: `get` and `set` against its own
/// slice of the shared fragment document. Every call re-reads the
/// fragment, so the view always reflects the latest persisted state
/// even when something else mutated it in between.
#[derive(Clone)]
pub struct WidgetState {
    widget_id: String,
    store: FragmentStore,
}

impl WidgetState {
    /// Bind a state view to a widget instance identifier.
    ///
    /// The identifier is taken as-is. An empty string, or one that
    /// collides with another instance, silently shares that namespace
    /// (see the shared-identifier hazard in DESIGN.md).
    pub fn new(store: FragmentStore, widget_id: impl Into<String>) -> Self {
        Self {
            widget_id: widget_id.into(),
            store,
        }
    }

    /// The identifier this view is bound to.
    pub fn widget_id(&self) -> &str {
        &self.widget_id
    }

    /// Look up a value in this widget's namespace.
    ///
    /// An absent namespace or key yields `Ok(None)`, never an error. A
    /// stored JSON `null` comes back as `Some(Value::Null)`, keeping
    /// the stored-null / absent distinction. A malformed fragment
    /// propagates.
    pub fn get(&self, key: &str) -> FragmentResult<Option<Value>> {
        let doc = self.store.read()?;
        Ok(doc
            .get(&self.widget_id)
            .and_then(|entry| entry.get(key))
            .cloned())
    }

    /// Store a value under `key` in this widget's namespace.
    ///
    /// A full read-modify-write of the shared document: reads the
    /// current fragment (never a cached copy), ensures the namespace
    /// is an object, inserts, and writes the whole document back.
    /// Writes that land between this read and write are lost, the
    /// document is last-write-wins at whole-document granularity.
    pub fn set(&self, key: &str, value: Value) -> FragmentResult<()> {
        let mut doc = self.store.read()?;
        let entry = doc
            .entry(self.widget_id.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        match entry {
            Value::Object(namespace) => {
                namespace.insert(key.to_string(), value);
            }
            // The namespace slot held a non-object; reclaim it.
            other => {
                let mut namespace = Map::new();
                namespace.insert(key.to_string(), value);
                *other = Value::Object(namespace);
            }
        }
        self.store.write(&doc)
    }
}
