//! Application shell hosting the dashboard.

use hashboard_core::FragmentStore;
use hashboard_widgets::{
    CounterWidget, Dashboard, DashboardConfig, MessageWidget, WidgetInstance, WidgetRegistry,
};

/// The demo dashboard application.
pub struct HashboardApp {
    dashboard: Dashboard,
}

impl HashboardApp {
    /// Build the demo dashboard over the given store.
    pub fn new(store: FragmentStore) -> Self {
        let mut registry = WidgetRegistry::new();
        registry.register("WidgetState", |state| Box::new(MessageWidget::new(state)));
        registry.register("Counter", |state| Box::new(CounterWidget::new(state)));

        let config = DashboardConfig {
            widgets: vec![
                WidgetInstance::new("WidgetState", "WidgetState-1"),
                WidgetInstance::new("Counter", "Counter-1"),
            ],
        };

        Self {
            dashboard: Dashboard::from_config(store, &registry, &config),
        }
    }

    /// The hosted dashboard.
    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }
}

impl eframe::App for HashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.dashboard.show(ui);
            });
        });
    }
}
