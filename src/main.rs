// GaitLab - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Configuration loading and session restore
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use gaitlab::app;

pub use gaitlab::core;
pub use gaitlab::platform;
pub use gaitlab::ui;
pub use gaitlab::util;

use clap::Parser;

/// GaitLab - desktop dashboard for OpenCap biomechanical gait-analysis sessions.
///
/// Launch, enter an OpenCap session id, and replay the processing pipeline
/// for the session's capture and RL-optimised model.
#[derive(Parser, Debug)]
#[command(name = "GaitLab", version, about)]
struct Cli {
    /// Prefill the OpenCap session id field on the login screen.
    #[arg(short = 's', long = "session-id")]
    session_id: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Apply the validated config to the egui context: colour scheme and a
/// proportional scale of every text style relative to the default body size.
fn apply_ui_config(ctx: &egui::Context, config: &platform::config::AppConfig) {
    ctx.set_visuals(if config.dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    let scale = config.font_size / util::constants::DEFAULT_FONT_SIZE;
    if (scale - 1.0).abs() > f32::EPSILON {
        let mut style = (*ctx.style()).clone();
        for font_id in style.text_styles.values_mut() {
            font_id.size *= scale;
        }
        ctx.set_style(style);
    }
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging init so the
    // configured level can participate in the filter priority. tracing
    // calls made before init are dropped; the essentials are re-logged
    // below.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    // Initialise logging subsystem
    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %platform_paths.config_dir.display(),
        data_dir = %platform_paths.data_dir.display(),
        "GaitLab starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config validation warning");
    }

    // Create application state
    let mut state = app::state::AppState::new(cli.debug);

    // Restore the persisted session: session id prefill and media overrides.
    let session_file = app::session::session_path(&platform_paths.data_dir);
    if let Some(saved) = app::session::load(&session_file) {
        state.login.session_id = saved.last_session_id;
        if let Some(source) = saved.capture_source {
            state.capture_source = source;
        }
        if let Some(source) = saved.model_source {
            state.model_source = source;
        }
    }

    // A session id given on the CLI wins over the restored one.
    if let Some(id) = cli.session_id {
        state.login.session_id = id;
    }

    tracing::info!("Ready to launch GUI");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size(util::constants::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(util::constants::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            apply_ui_config(&cc.egui_ctx, &config);
            Ok(Box::new(gui::GaitLabApp::new(state, session_file)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch GaitLab GUI: {e}");
        std::process::exit(1);
    }
}
