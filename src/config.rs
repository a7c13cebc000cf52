//! Injected configuration: presentation style, animation cadence and parameter policies.
//! Loaded from JSON; every field has a default so partial files work.

use crate::error::{Error, Result};
use crate::modulation::{AMOUNT_RANGE, FREQUENCY_RANGE};
use crate::parameter::ParameterConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Colours are RGB triples, opacities are 0..=1.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct VisualStyle {
    pub stroke_color: [u8; 3],
    pub stroke_width: f32,
    pub background_color: [u8; 3],
    pub overlay_opacity: f32,
    pub border_opacity: f32,
    pub padding: f32,
    pub font_size: f32,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self {
            stroke_color: [0, 122, 255],
            stroke_width: 2.0,
            background_color: [0, 0, 0],
            overlay_opacity: 0.7,
            border_opacity: 0.5,
            padding: 10.0,
            font_size: 13.0,
        }
    }
}

impl VisualStyle {
    pub fn stroke_color32(&self) -> egui::Color32 {
        let [r, g, b] = self.stroke_color;
        egui::Color32::from_rgb(r, g, b)
    }
    pub fn border_color32(&self) -> egui::Color32 {
        self.stroke_color32().gamma_multiply(self.border_opacity)
    }
    pub fn overlay_color32(&self) -> egui::Color32 {
        let [r, g, b] = self.background_color;
        egui::Color32::from_rgb(r, g, b).gamma_multiply(self.overlay_opacity)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    pub ticks_per_second: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 60.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct InitialModulation {
    pub amount: f64,
    pub frequency: f64,
}

impl Default for InitialModulation {
    fn default() -> Self {
        Self {
            amount: 0.5,
            frequency: 2.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub style: VisualStyle,
    pub animation: AnimationConfig,
    pub parameters: ParameterConfig,
    pub initial: InitialModulation,
}

fn check(ok: bool, field: &'static str, reason: &str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(Error::InvalidConfig(field, reason.to_string()))
    }
}

fn unit(v: f32) -> bool {
    (0.0..=1.0).contains(&v)
}

impl Config {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        log::info!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let tps = self.animation.ticks_per_second;
        check(
            tps.is_finite() && tps > 0.0,
            "animation.ticks_per_second",
            "must be a positive number",
        )?;
        let style = &self.style;
        check(
            style.stroke_width.is_finite() && style.stroke_width > 0.0,
            "style.stroke_width",
            "must be positive",
        )?;
        check(
            style.padding.is_finite() && style.padding >= 0.0,
            "style.padding",
            "must not be negative",
        )?;
        check(style.font_size > 0.0, "style.font_size", "must be positive")?;
        check(unit(style.overlay_opacity), "style.overlay_opacity", "must be within 0..=1")?;
        check(unit(style.border_opacity), "style.border_opacity", "must be within 0..=1")?;
        check(
            AMOUNT_RANGE.contains(&self.initial.amount),
            "initial.amount",
            "must be within 0..=1",
        )?;
        check(
            FREQUENCY_RANGE.contains(&self.initial.frequency),
            "initial.frequency",
            "must be within 0.01..=20",
        )
    }
}
