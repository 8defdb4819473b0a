//! Hashboard widget toolkit.
//!
//! This crate provides the pieces a dashboard is assembled from:
//!
//! - **Widget**: the capability interface concrete widgets implement
//! - **Registry**: maps widget type names to instance factories
//! - **Dashboard**: the shell hosting instances over one fragment store
//! - **Config**: dashboard definitions as data
//! - **Reference widgets**: message persistence and a counter

pub mod config;
pub mod counter;
pub mod dashboard;
pub mod message;
pub mod registry;
pub mod widget;

pub use config::{DashboardConfig, WidgetInstance};
pub use counter::CounterWidget;
pub use dashboard::Dashboard;
pub use message::MessageWidget;
pub use registry::{WidgetFactory, WidgetRegistry};
pub use widget::Widget;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Inner margin of a widget frame.
    pub const WIDGET_MARGIN: i8 = 12;
    /// Vertical gap between widget frames.
    pub const WIDGET_GAP: f32 = 8.0;
    /// Inner margin of the console panel.
    pub const CONSOLE_MARGIN: i8 = 10;
    /// Minimum console panel height.
    pub const CONSOLE_HEIGHT: f32 = 64.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Console panel background.
    pub const CONSOLE_BG: Color32 = Color32::from_rgb(0, 0, 0);
    /// Console panel text.
    pub const CONSOLE_TEXT: Color32 = Color32::WHITE;
    /// Error text.
    pub const ERROR_TEXT: Color32 = Color32::from_rgb(220, 68, 68);
}
