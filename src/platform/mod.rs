// GaitLab - platform/mod.rs
//
// Platform layer: config/data directory resolution and config.toml loading.
// Dependencies: util layer.

pub mod config;
