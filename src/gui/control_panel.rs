//! Control Panel Widget
//! Bottom bar with the function input, Add / Clear buttons, help and status.

use egui::{Color32, RichText};

pub const INPUT_HINT: &str = "enter a function, e.g. sin(x)*2";
pub const HELP_TEXT: &str = "Available functions: sin(x), cos(x), tan(x), sqrt(x), exp(x), \
log(x), abs(x), pow(x, y), pi, e (math.sin(x) also accepted)";

const BUTTON_SIZE: [f32; 2] = [70.0, 24.0];

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Input field and buttons below the plot.
pub struct ControlPanel {
    pub input: String,
    pub status: String,
    pub status_kind: StatusKind,
    /// Plot coordinate under the pointer, if it is over the plot.
    pub cursor: Option<(f64, f64)>,
    focus_input: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            input: String::new(),
            status: "Ready".to_string(),
            status_kind: StatusKind::Info,
            cursor: None,
            focus_input: true,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let buttons_width = 2.0 * (BUTTON_SIZE[0] + ui.spacing().item_spacing.x);
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.input)
                    .hint_text(INPUT_HINT)
                    .desired_width((ui.available_width() - buttons_width).max(100.0)),
            );
            if self.focus_input {
                response.request_focus();
                self.focus_input = false;
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action = ControlPanelAction::Add;
            }

            if ui
                .add(egui::Button::new("Add").min_size(BUTTON_SIZE.into()))
                .clicked()
            {
                action = ControlPanelAction::Add;
            }
            if ui
                .add(egui::Button::new("Clear").min_size(BUTTON_SIZE.into()))
                .clicked()
            {
                action = ControlPanelAction::Clear;
            }
        });

        ui.add_space(4.0);
        ui.label(RichText::new(HELP_TEXT).size(12.0).color(Color32::GRAY));

        ui.horizontal(|ui| {
            let status_color = match self.status_kind {
                StatusKind::Error => Color32::from_rgb(220, 53, 69),
                StatusKind::Info => Color32::GRAY,
            };
            ui.label(RichText::new(&self.status).size(11.0).color(status_color));

            if let Some((x, y)) = self.cursor {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("x = {:.2}, y = {:.2}", x, y))
                            .size(11.0)
                            .monospace(),
                    );
                });
            }
        });
        ui.add_space(4.0);

        if action == ControlPanelAction::Add {
            self.focus_input = true;
        }
        action
    }

    pub fn set_status(&mut self, kind: StatusKind, status: impl Into<String>) {
        self.status_kind = kind;
        self.status = status.into();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    Add,
    Clear,
}
