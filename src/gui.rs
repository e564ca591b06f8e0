// GaitLab - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and manages the pipeline run lifecycle.

use crate::app::sequence::SequenceManager;
use crate::app::session::{self, SessionData, SESSION_VERSION};
use crate::app::state::AppState;
use crate::core::model::{MediaSource, RunProgress, ScreenMode};
use crate::core::script::PipelineScript;
use crate::ui;
use crate::util::constants;
use std::path::PathBuf;

/// The GaitLab application.
pub struct GaitLabApp {
    pub state: AppState,
    pub sequence_manager: SequenceManager,
    session_file: PathBuf,
}

impl GaitLabApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState, session_file: PathBuf) -> Self {
        Self {
            state,
            sequence_manager: SequenceManager::new(),
            session_file,
        }
    }

    /// Persist the session id and media overrides. Failures are logged and
    /// otherwise ignored: persistence is a convenience, not a requirement.
    fn save_session(&self) {
        let data = SessionData {
            version: SESSION_VERSION,
            last_session_id: self.state.login.session_id.clone(),
            capture_source: Some(self.state.capture_source.clone()),
            model_source: Some(self.state.model_source.clone()),
        };
        if let Err(e) = session::save(&data, &self.session_file) {
            tracing::warn!(error = %e, "Failed to save session");
        }
    }
}

impl eframe::App for GaitLabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll for run progress
        let messages = self
            .sequence_manager
            .poll_progress(constants::MAX_RUN_MESSAGES_PER_FRAME);
        let had_messages = !messages.is_empty();
        for msg in messages {
            match msg {
                RunProgress::Started { total_steps } => {
                    self.state.run_in_progress = true;
                    self.state.status_message =
                        format!("Running sequence ({total_steps} steps)...");
                }
                RunProgress::Line { line } => {
                    self.state.push_line(line);
                }
                RunProgress::Completed { summary } => {
                    self.state.run_in_progress = false;
                    self.state.status_message = format!(
                        "Sequence complete: {} lines in {:.1}s",
                        summary.lines_emitted,
                        summary.duration.as_secs_f64()
                    );
                }
            }
        }
        // Repaint while a run is active so lines appear as they are emitted.
        if had_messages || self.state.run_in_progress {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // ---- Handle flags set by panels ----
        // request_run: the terminal panel requested a pipeline run. While a
        // run is active this is a silent no-op (the manager's busy flag is
        // the guard; it logs the rejection at debug level).
        if self.state.request_run {
            self.state.request_run = false;
            self.sequence_manager
                .start_run(PipelineScript::standard(), self.state.next_line_id());
        }
        // request_pick_capture: the raw-capture card wants a file chooser.
        if self.state.request_pick_capture {
            self.state.request_pick_capture = false;
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Video", &["mp4", "mov", "avi"])
                .pick_file()
            {
                tracing::info!(file = %path.display(), "Capture source updated");
                self.state.capture_source = MediaSource::LocalFile(path);
                self.state.status_message = "Capture source updated.".to_string();
            }
        }

        match self.state.screen {
            ScreenMode::Login => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui::panels::login::render(ui, &mut self.state);
                });
            }
            ScreenMode::Dashboard => {
                egui::TopBottomPanel::top("header").show(ctx, |ui| {
                    ui::panels::header::render(ui, &mut self.state);
                });

                // Status bar
                egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        // RUNNING badge: shown while a run is active.
                        if self.state.run_in_progress {
                            ui.label(
                                egui::RichText::new(" \u{25cf} RUNNING ")
                                    .strong()
                                    .color(ui::theme::ACCENT),
                            );
                            ui.separator();
                        }
                        ui.label(&self.state.status_message);
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                let lines = self.state.terminal.len();
                                if lines > 0 {
                                    ui.label(format!("{lines} lines"));
                                }
                            },
                        );
                    });
                });

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui::panels::media::render(ui, &mut self.state);
                    ui.add_space(12.0);
                    ui.columns(2, |cols| {
                        ui::panels::terminal::render(&mut cols[0], &mut self.state);
                        ui::panels::feedback::render(&mut cols[1]);
                    });
                });
            }
        }

        // About dialog (modal-ish)
        ui::panels::about::render(ctx, &mut self.state);
    }

    /// Called by eframe when the application window is about to close.
    ///
    /// Saves the current session so the next launch can restore it.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.save_session();
    }
}
