//! Widget abstraction rendered by the dashboard shell.

use egui::Ui;

/// A dashboard widget instance.
///
/// A capability interface rather than a base class: implementations
/// hold their [`hashboard_core::WidgetState`] handle as a field
/// injected at construction and draw themselves into the `Ui` the
/// hosting shell hands them each frame. Input buffers and other
/// transient UI state live in the implementing struct; only what the
/// widget explicitly writes through its state handle is persisted.
pub trait Widget {
    /// Title shown in the widget's frame.
    fn title(&self) -> &str;

    /// Draw the widget.
    fn render(&mut self, ui: &mut Ui);
}
