//! Dashboard shell: owns widget instances and renders them.

use crate::config::DashboardConfig;
use crate::registry::WidgetRegistry;
use crate::sizing;
use crate::widget::Widget;
use egui::{Margin, Ui};
use hashboard_core::{FragmentStore, WidgetState};

/// Hosts a set of widget instances over one fragment store.
///
/// The shell supplies the lifecycle contract widgets rely on: a stable
/// per-instance identifier, a state handle bound to that identifier
/// before the first render, and a render entry point invoked every
/// frame.
pub struct Dashboard {
    store: FragmentStore,
    widgets: Vec<Box<dyn Widget>>,
}

impl Dashboard {
    /// Create an empty dashboard over the given store.
    pub fn new(store: FragmentStore) -> Self {
        Self {
            store,
            widgets: Vec::new(),
        }
    }

    /// Build a dashboard from a configuration.
    ///
    /// Instances whose kind is not registered are skipped with a
    /// warning.
    pub fn from_config(
        store: FragmentStore,
        registry: &WidgetRegistry,
        config: &DashboardConfig,
    ) -> Self {
        let mut dashboard = Self::new(store);
        for instance in &config.widgets {
            dashboard.add_from_registry(registry, &instance.kind, &instance.widget_id);
        }
        dashboard
    }

    /// Add a widget instance under the given identifier.
    ///
    /// The state handle is bound to `widget_id` and handed to the
    /// factory before the first render. Identifiers are not validated;
    /// instances sharing one identifier share a state namespace.
    pub fn add_widget<F>(&mut self, widget_id: &str, make: F)
    where
        F: FnOnce(WidgetState) -> Box<dyn Widget>,
    {
        let state = self.store.state_for(widget_id);
        self.widgets.push(make(state));
    }

    /// Instantiate a registered widget kind under `widget_id`.
    ///
    /// Returns false when the kind is not registered.
    pub fn add_from_registry(
        &mut self,
        registry: &WidgetRegistry,
        kind: &str,
        widget_id: &str,
    ) -> bool {
        match registry.instantiate(kind, self.store.state_for(widget_id)) {
            Some(widget) => {
                log::debug!("Instantiated widget '{}' of kind '{}'", widget_id, kind);
                self.widgets.push(widget);
                true
            }
            None => {
                log::warn!("Unknown widget kind '{}', skipping '{}'", kind, widget_id);
                false
            }
        }
    }

    /// Number of hosted widget instances.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether the dashboard hosts no widgets.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// The shared store all hosted widgets persist through.
    pub fn store(&self) -> &FragmentStore {
        &self.store
    }

    /// Render every widget, each inside a titled, padded frame.
    pub fn show(&mut self, ui: &mut Ui) {
        for widget in &mut self.widgets {
            egui::Frame::group(ui.style())
                .inner_margin(Margin::same(sizing::WIDGET_MARGIN))
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.heading(widget.title());
                    ui.separator();
                    widget.render(ui);
                });
            ui.add_space(sizing::WIDGET_GAP);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetInstance;
    use hashboard_core::MemoryAccessor;
    use serde_json::json;
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

    fn null_registry() -> WidgetRegistry {
        let mut registry = WidgetRegistry::new();
        registry.register("null", |state| Box::new(NullWidget { state }));
        registry
    }

    #[test]
    fn test_add_widget_binds_identifier() {
        let mut dashboard = Dashboard::new(store());
        let mut seen = String::new();
        dashboard.add_widget("WidgetState-1", |state| {
            seen = state.widget_id().to_string();
            Box::new(NullWidget { state })
        });

        assert_eq!(seen, "WidgetState-1");
        assert_eq!(dashboard.len(), 1);
    }

    #[test]
    fn test_widget_writes_land_under_its_identifier() {
        let dashboard = {
            let mut dashboard = Dashboard::new(store());
            dashboard.add_widget("w1", |state| {
                state.set("k", json!("v")).unwrap();
                Box::new(NullWidget { state })
            });
            dashboard
        };

        let doc = dashboard.store().read().unwrap();
        assert_eq!(doc.get("w1"), Some(&json!({"k": "v"})));
    }

    #[test]
    fn test_from_config_skips_unknown_kinds() {
        let config = DashboardConfig {
            widgets: vec![
                WidgetInstance::new("null", "a"),
                WidgetInstance::new("missing", "b"),
                WidgetInstance::new("null", "c"),
            ],
        };

        let dashboard = Dashboard::from_config(store(), &null_registry(), &config);
        assert_eq!(dashboard.len(), 2);
    }

    #[test]
    fn test_empty_dashboard() {
        let dashboard = Dashboard::new(store());
        assert!(dashboard.is_empty());
    }
}
