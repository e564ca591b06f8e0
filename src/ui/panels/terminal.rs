// GaitLab - ui/panels/terminal.rs
//
// Terminal panel: the pipeline run control and the emitted line log.
// The run request is communicated back to the update loop via the
// `request_run` flag; while a run is active the control is disabled
// (the sequence manager's busy flag remains the authoritative guard).

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the terminal card.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::Frame::new()
        .fill(theme::WELL_BG)
        .stroke(egui::Stroke::new(1.0, theme::CARD_BORDER))
        .corner_radius(theme::CARD_ROUNDING)
        .inner_margin(theme::CARD_PADDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("TERMINAL_CORE")
                        .small()
                        .color(theme::TEXT_MUTED),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let run_colour = if state.run_in_progress {
                        theme::TEXT_DIM
                    } else {
                        theme::ACCENT
                    };
                    let run_button = egui::Button::new(
                        egui::RichText::new("\u{25b6} Run sequence").color(run_colour),
                    );
                    if ui
                        .add_enabled(!state.run_in_progress, run_button)
                        .clicked()
                    {
                        state.request_run = true;
                    }
                });
            });

            ui.add_space(6.0);

            egui::ScrollArea::vertical()
                .id_salt("terminal_lines")
                .max_height(theme::TERMINAL_HEIGHT)
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if state.terminal.is_empty() {
                        ui.label(
                            egui::RichText::new("Ready for sequence...")
                                .monospace()
                                .size(12.0)
                                .color(theme::TEXT_DIM),
                        );
                        return;
                    }
                    for line in &state.terminal {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(
                                    line.emitted_at.format("%H:%M:%S").to_string(),
                                )
                                .monospace()
                                .size(12.0)
                                .color(theme::TEXT_DIM),
                            );
                            ui.label(
                                egui::RichText::new(&line.text)
                                    .monospace()
                                    .size(12.0)
                                    .color(theme::ACCENT),
                            );
                        });
                    }
                });
        });
}
