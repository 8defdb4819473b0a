//! Dashboard configuration.
//!
//! Dashboards are defined as data: an ordered list of widget
//! instances, each naming a registered widget type and the stable
//! identifier its persisted state is namespaced under.

use serde::{Deserialize, Serialize};

/// One widget instance in a dashboard definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetInstance {
    /// Registered widget type name.
    pub kind: String,
    /// Stable instance identifier, used as the state namespace.
    pub widget_id: String,
}

impl WidgetInstance {
    /// Create an instance entry.
    pub fn new(kind: impl Into<String>, widget_id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            widget_id: widget_id.into(),
        }
    }
}

/// A dashboard definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Widget instances, in render order.
    pub widgets: Vec<WidgetInstance>,
}

impl DashboardConfig {
    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
