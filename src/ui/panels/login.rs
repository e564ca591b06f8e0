// GaitLab - ui/panels/login.rs
//
// Login screen: a centred card with the operator credential fields, the
// OpenCap session id field, and the Launch Session button.
//
// Nothing here is validated or authenticated: the fields are
// presentational and the launch action always succeeds.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the login card as the full central panel content.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let card_frame = egui::Frame::new()
        .fill(theme::CARD_BG)
        .stroke(egui::Stroke::new(1.0, theme::CARD_BORDER))
        .corner_radius(theme::CARD_ROUNDING)
        .inner_margin(theme::CARD_PADDING * 2);

    ui.vertical_centered(|ui| {
        // Push the card toward the vertical centre of the window.
        ui.add_space((ui.available_height() * 0.25).max(24.0));

        ui.set_max_width(theme::LOGIN_CARD_WIDTH);

        card_frame.show(ui, |ui| {
            ui.vertical_centered(|ui| {
                // Two-tone wordmark: GAIT in foreground, LAB in accent.
                ui.horizontal(|ui| {
                    ui.add_space(ui.available_width() / 2.0 - 46.0);
                    ui.label(egui::RichText::new("GAIT").size(24.0).strong());
                    ui.label(
                        egui::RichText::new("LAB")
                            .size(24.0)
                            .strong()
                            .color(theme::ACCENT),
                    );
                });
                ui.label(
                    egui::RichText::new("OPENCAP BIOMECHANICAL ANALYSIS")
                        .small()
                        .color(theme::TEXT_MUTED),
                );
            });

            ui.add_space(18.0);

            ui.add(
                egui::TextEdit::singleline(&mut state.login.login_id)
                    .hint_text("Login ID")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);
            ui.add(
                egui::TextEdit::singleline(&mut state.login.password)
                    .hint_text("Password")
                    .password(true)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);
            // The session id field carries the accent colour: it is the one
            // input the rest of the dashboard actually references.
            ui.add(
                egui::TextEdit::singleline(&mut state.login.session_id)
                    .hint_text("OpenCap Session ID")
                    .text_color(theme::ACCENT)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(14.0);

            let launch = egui::Button::new(
                egui::RichText::new("Launch Session")
                    .strong()
                    .color(egui::Color32::WHITE),
            )
            .fill(theme::ACCENT)
            .min_size(egui::vec2(ui.available_width(), 32.0));

            if ui.add(launch).clicked() {
                state.launch();
            }
        });
    });
}
