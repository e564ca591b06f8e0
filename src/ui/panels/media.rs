// GaitLab - ui/panels/media.rs
//
// The two dashboard media cards: raw OpenCap capture and RL-optimised
// model. Sources are opaque display sinks: the card renders the reference
// and never attempts to open or decode it. The raw-capture card offers a
// file chooser; the actual dialog runs in the update loop via the
// `request_pick_capture` flag.

use crate::app::state::AppState;
use crate::core::model::MediaSource;
use crate::ui::theme;

/// Render the media card grid.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.columns(2, |cols| {
        raw_capture_card(&mut cols[0], state);
        model_card(&mut cols[1], &state.model_source);
    });
}

fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(theme::CARD_BG)
        .stroke(egui::Stroke::new(1.0, theme::CARD_BORDER))
        .corner_radius(theme::CARD_ROUNDING)
        .inner_margin(theme::CARD_PADDING)
}

/// The media placeholder well: source reference text over a black fill.
fn placeholder(ui: &mut egui::Ui, source: &MediaSource) {
    egui::Frame::new()
        .fill(theme::WELL_BG)
        .corner_radius(theme::CARD_ROUNDING)
        .show(ui, |ui| {
            ui.set_min_height(theme::MEDIA_PLACEHOLDER_HEIGHT);
            ui.set_width(ui.available_width());
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new(source.display_label())
                        .monospace()
                        .size(11.5)
                        .color(theme::TEXT_MUTED),
                );
            });
        });
}

fn raw_capture_card(ui: &mut egui::Ui, state: &mut AppState) {
    card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("\u{26a0} RAW OPENCAP DATA")
                    .small()
                    .strong()
                    .color(theme::RAW_MARKER),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Choose file\u{2026}").clicked() {
                    state.request_pick_capture = true;
                }
            });
        });
        ui.add_space(6.0);
        placeholder(ui, &state.capture_source);
    });
}

fn model_card(ui: &mut egui::Ui, source: &MediaSource) {
    card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new("\u{2714} RL OPTIMIZED MODEL")
                .small()
                .strong()
                .color(theme::MODEL_MARKER),
        );
        ui.add_space(6.0);
        placeholder(ui, source);
    });
}
