//! Widget type registry.

use crate::widget::Widget;
use hashboard_core::WidgetState;
use std::collections::HashMap;

/// Factory producing a widget instance bound to a state handle.
pub type WidgetFactory = Box<dyn Fn(WidgetState) -> Box<dyn Widget>>;

/// Maps widget type names to instance factories.
///
/// Each widget type registers once under a name; the dashboard then
/// creates any number of instances from configuration, handing every
/// one its own state handle.
#[derive(Default)]
pub struct WidgetRegistry {
    factories: HashMap<String, WidgetFactory>,
}

impl WidgetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget type under `kind`.
    ///
    /// Re-registering a name replaces the previous factory.
    pub fn register<F>(&mut self, kind: impl Into<String>, factory: F)
    where
        F: Fn(WidgetState) -> Box<dyn Widget> + 'static,
    {
        self.factories.insert(kind.into(), Box::new(factory));
    }

    /// Create an instance of `kind` over the given state handle.
    ///
    /// Returns `None` for unregistered kinds.
    pub fn instantiate(&self, kind: &str, state: WidgetState) -> Option<Box<dyn Widget>> {
        self.factories.get(kind).map(|factory| factory(state))
    }

    /// Registered type names.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashboard_core::{FragmentStore, MemoryAccessor};
    use std::sync::Arc;

    struct NullWidget {
        state: WidgetState,
    }

    impl Widget for NullWidget {
        fn title(&self) -> &str {
            self.state.widget_id()
        }

        fn render(&mut self, _ui: &mut egui::Ui) {}
    }

    fn store() -> FragmentStore {
        FragmentStore::new(Arc::new(MemoryAccessor::new()))
    }

    #[test]
    fn test_instantiate_registered_kind() {
        let mut registry = WidgetRegistry::new();
        registry.register("null", |state| Box::new(NullWidget { state }));

        let widget = registry
            .instantiate("null", store().state_for("null-1"))
            .unwrap();
        assert_eq!(widget.title(), "null-1");
    }

    #[test]
    fn test_unknown_kind_yields_none() {
        let registry = WidgetRegistry::new();
        assert!(
            registry
                .instantiate("missing", store().state_for("x"))
                .is_none()
        );
    }

    #[test]
    fn test_kinds_lists_registrations() {
        let mut registry = WidgetRegistry::new();
        registry.register("a", |state| Box::new(NullWidget { state }));
        registry.register("b", |state| Box::new(NullWidget { state }));

        let mut kinds: Vec<_> = registry.kinds().collect();
        kinds.sort_unstable();
        assert_eq!(kinds, ["a", "b"]);
    }
}
