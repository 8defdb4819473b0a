//! Supplemental widget: a persisted click counter.

use crate::theme;
use crate::widget::Widget;
use egui::Ui;
use hashboard_core::{FragmentResult, WidgetState};
use serde_json::Value;

/// State key the count is persisted under.
const COUNT_KEY: &str = "count";

/// Counter whose value lives in the widget's namespace.
///
/// Exercises numeric round-trips and the read-modify-write cycle:
/// every adjustment re-reads the persisted count before writing the
/// new one.
pub struct CounterWidget {
    state: WidgetState,
    error: Option<String>,
}

impl CounterWidget {
    /// Create the widget over its injected state handle.
    pub fn new(state: WidgetState) -> Self {
        Self { state, error: None }
    }

    /// Current persisted count. Unset, or set to a non-integer, reads
    /// as zero.
    pub fn count(&self) -> FragmentResult<i64> {
        Ok(self
            .state
            .get(COUNT_KEY)?
            .and_then(|value| value.as_i64())
            .unwrap_or(0))
    }

    /// Add `delta` to the persisted count and return the new value.
    pub fn add(&self, delta: i64) -> FragmentResult<i64> {
        let next = self.count()? + delta;
        self.state.set(COUNT_KEY, Value::from(next))?;
        Ok(next)
    }

    fn adjust(&mut self, delta: i64) {
        self.error = match self.add(delta) {
            Ok(_) => None,
            Err(e) => Some(e.to_string()),
        };
    }
}

impl Widget for CounterWidget {
    fn title(&self) -> &str {
        "Counter"
    }

    fn render(&mut self, ui: &mut Ui) {
        let shown = match self.count() {
            Ok(count) => count.to_string(),
            Err(e) => {
                ui.colored_label(theme::ERROR_TEXT, e.to_string());
                return;
            }
        };

        ui.horizontal(|ui| {
            if ui.button("-").clicked() {
                self.adjust(-1);
            }
            ui.monospace(shown);
            if ui.button("+").clicked() {
                self.adjust(1);
            }
        });
        if let Some(error) = &self.error {
            ui.colored_label(theme::ERROR_TEXT, error);
        }
    }
}
