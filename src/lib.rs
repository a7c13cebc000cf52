//! Reactive parameters and an interactive LFO visualisation for the Continuous live-looper UI.
//!
//! [`parameter`] holds the observable cells bridging engine control values to the UI,
//! [`modulation`] the waveform sampling and drag mapping over amount and frequency,
//! and [`gui`] draws it with [`egui`].

extern crate eframe;
extern crate egui;
extern crate serde_json;

pub mod cli;
pub mod config;
pub mod error;
pub mod gui;
pub mod modulation;
pub mod parameter;
pub mod utils;
