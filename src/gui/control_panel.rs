//! Control Panel Widget
//! Left side column of chart selection buttons.

use crate::charts::ChartKind;
use crate::dashboard::ViewState;
use egui::{Color32, RichText, Stroke};

const BUTTON_SIZE: egui::Vec2 = egui::vec2(250.0, 44.0);

/// Chart selection buttons.
#[derive(Default)]
pub struct ControlPanel;

impl ControlPanel {
    pub fn new() -> Self {
        Self
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui, state: ViewState) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.add_space(10.0);
        ui.label(RichText::new("Charts").size(14.0).strong());
        ui.add_space(8.0);

        for kind in ChartKind::ALL {
            let selected = state == ViewState::Shown(kind);
            let button = egui::Button::new(
                RichText::new(kind.button_label())
                    .size(13.0)
                    .strong()
                    .color(Color32::WHITE),
            )
            .fill(kind.accent())
            .stroke(if selected {
                Stroke::new(2.5, Color32::BLACK)
            } else {
                Stroke::NONE
            })
            .min_size(BUTTON_SIZE);

            if ui.add(button).clicked() {
                action = ControlPanelAction::Select(kind);
            }
            ui.add_space(8.0);
        }

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlPanelAction {
    None,
    Select(ChartKind),
}
