// GaitLab - ui/panels/about.rs
//
// About dialog: shown from the menu bar. Rendered as a centred,
// non-resizable, non-collapsible modal window.

use crate::app::state::AppState;
use crate::ui::theme;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const REPO_URL: &str = "https://github.com/gaitlab/gaitlab";

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new("About GaitLab")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.horizontal(|ui| {
                    ui.add_space(ui.available_width() / 2.0 - 50.0);
                    ui.label(egui::RichText::new("GAIT").size(26.0).strong());
                    ui.label(
                        egui::RichText::new("LAB")
                            .size(26.0)
                            .strong()
                            .color(theme::ACCENT),
                    );
                });
                ui.add_space(4.0);
                ui.label(egui::RichText::new(format!("v{VERSION}")).size(14.0).weak());
            });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label("Desktop dashboard for OpenCap");
                ui.label("biomechanical gait-analysis sessions.");
            });

            ui.add_space(10.0);

            ui.vertical_centered(|ui| {
                ui.hyperlink_to(REPO_URL, REPO_URL);
            });

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(6.0);

            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("MIT License").small().weak());
                ui.label(egui::RichText::new("Built with Rust & egui").small().weak());
            });

            ui.add_space(8.0);
        });

    if !open {
        state.show_about = false;
    }
}
