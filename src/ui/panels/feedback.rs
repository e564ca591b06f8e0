// GaitLab - ui/panels/feedback.rs
//
// Static AI feedback card. The text is fixed analysis flavour; no model
// runs behind it.

use crate::ui::theme;
use crate::util::constants;

/// Render the feedback card.
pub fn render(ui: &mut egui::Ui) {
    egui::Frame::new()
        .fill(theme::CARD_BG)
        .stroke(egui::Stroke::new(1.0, theme::ACCENT.gamma_multiply(0.25)))
        .corner_radius(theme::CARD_ROUNDING)
        .inner_margin(theme::CARD_PADDING)
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new("AI FEEDBACK")
                    .small()
                    .strong()
                    .color(theme::ACCENT),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(constants::AI_FEEDBACK_TEXT)
                    .italics()
                    .size(13.0),
            );
        });
}
