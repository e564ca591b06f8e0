// GaitLab - ui/theme.rs
//
// Colour scheme and layout constants. The palette follows the session
// dashboard's original styling: near-black surfaces with a purple accent.
// No dependencies on app state or business logic.

use egui::Color32;

/// Primary accent (buttons, terminal text, highlights).
pub const ACCENT: Color32 = Color32::from_rgb(168, 85, 247); // Purple 500

/// Raw-capture card marker.
pub const RAW_MARKER: Color32 = Color32::from_rgb(239, 68, 68); // Red 500

/// Optimised-model card marker.
pub const MODEL_MARKER: Color32 = Color32::from_rgb(34, 197, 94); // Green 500

/// Card surface fill.
pub const CARD_BG: Color32 = Color32::from_rgb(15, 15, 15);

/// Media placeholder / terminal fill.
pub const WELL_BG: Color32 = Color32::from_rgb(0, 0, 0);

/// Card border stroke colour.
pub const CARD_BORDER: Color32 = Color32::from_rgb(34, 34, 34);

/// Muted secondary text.
pub const TEXT_MUTED: Color32 = Color32::from_rgb(102, 102, 102);

/// Dim placeholder text (empty terminal, disabled run control).
pub const TEXT_DIM: Color32 = Color32::from_rgb(51, 51, 51);

/// Layout constants.
pub const LOGIN_CARD_WIDTH: f32 = 350.0;
pub const CARD_ROUNDING: u8 = 12;
pub const CARD_PADDING: i8 = 16;
pub const TERMINAL_HEIGHT: f32 = 150.0;
pub const MEDIA_PLACEHOLDER_HEIGHT: f32 = 220.0;
