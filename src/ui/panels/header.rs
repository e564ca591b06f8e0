// GaitLab - ui/panels/header.rs
//
// Dashboard header strip: the SESSION_ACTIVE marker on the left and the
// dashboard version badge on the right.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;

/// Render the header strip (top panel).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("\u{25b2}").color(theme::ACCENT));
        ui.label(egui::RichText::new("SESSION_ACTIVE").strong());
        if !state.login.session_id.is_empty() {
            ui.label(
                egui::RichText::new(format!("[{}]", state.login.session_id))
                    .monospace()
                    .color(theme::TEXT_MUTED),
            );
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("\u{24d8}").on_hover_text("About GaitLab").clicked() {
                state.show_about = true;
            }
            egui::Frame::new()
                .fill(theme::CARD_BG)
                .stroke(egui::Stroke::new(1.0, theme::CARD_BORDER))
                .corner_radius(theme::CARD_ROUNDING)
                .inner_margin(egui::Margin::symmetric(10, 3))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(constants::DASHBOARD_BADGE)
                            .small()
                            .color(theme::TEXT_MUTED),
                    );
                });
        });
    });
}
