//! Reference widget: a message persisted across reloads.

use crate::widget::Widget;
use crate::{sizing, theme};
use egui::{Margin, Ui};
use hashboard_core::{FragmentResult, WidgetState};
use serde_json::Value;

/// State key the message is persisted under.
const MESSAGE_KEY: &str = "message";

/// Text-input widget whose message survives page reloads.
///
/// The input buffer is plain in-memory UI state; nothing is persisted
/// on keystrokes. Only the explicit "Persist State" action writes the
/// message into the widget's namespace.
pub struct MessageWidget {
    state: WidgetState,
    input: String,
    status: Option<String>,
}

impl MessageWidget {
    /// Create the widget over its injected state handle.
    pub fn new(state: WidgetState) -> Self {
        Self {
            state,
            input: String::new(),
            status: None,
        }
    }

    /// The persisted message, if any.
    pub fn persisted_message(&self) -> FragmentResult<Option<String>> {
        Ok(self
            .state
            .get(MESSAGE_KEY)?
            .and_then(|value| value.as_str().map(str::to_string)))
    }

    /// Persist the current input buffer.
    pub fn persist(&self) -> FragmentResult<()> {
        self.state
            .set(MESSAGE_KEY, Value::String(self.input.clone()))
    }

    /// Line shown in the console panel.
    ///
    /// An empty persisted message counts as no state found. A
    /// malformed fragment is reported rather than hidden.
    pub fn console_line(&self) -> String {
        match self.persisted_message() {
            Ok(Some(message)) if !message.is_empty() => {
                format!("Persisted message found: {}", message)
            }
            Ok(_) => "No persisted state found".to_string(),
            Err(e) => e.to_string(),
        }
    }
}

impl Widget for MessageWidget {
    fn title(&self) -> &str {
        "Widget State"
    }

    fn render(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.strong("Message:");
            ui.text_edit_singleline(&mut self.input);
            if ui.button("Persist State").clicked() {
                self.status = Some(match self.persist() {
                    Ok(()) => "State persisted successfully!".to_string(),
                    Err(e) => e.to_string(),
                });
            }
        });
        if let Some(status) = &self.status {
            ui.label(status);
        }

        let line = self.console_line();
        egui::Frame::new()
            .fill(theme::CONSOLE_BG)
            .inner_margin(Margin::same(sizing::CONSOLE_MARGIN))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(sizing::CONSOLE_HEIGHT);
                ui.colored_label(theme::CONSOLE_TEXT, line);
            });
    }
}
