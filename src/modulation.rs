//! LFO modulation model: clamped amount/frequency, the waveform sampler and the drag mapping.
//! Nothing in here knows about a rendering surface; [`crate::gui`] feeds it sizes and drag events.

pub mod gesture;
pub mod lfo;
pub mod visualiser;
pub mod waveform;

use std::ops::RangeInclusive;

pub use gesture::{handle_drag, DragEvent, GesturePhase, ModulationDelta};
pub use lfo::{LfoParameterId, LfoParameters};
pub use visualiser::LfoVisualiser;
pub use waveform::{Readouts, WaveformSampler};

pub const FREQUENCY_RANGE: RangeInclusive<f64> = 0.01..=20.0;
pub const AMOUNT_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Non-finite input keeps the lower bound so the invariant holds for any write.
fn clamp_into(v: f64, range: &RangeInclusive<f64>) -> f64 {
    if v.is_nan() {
        *range.start()
    } else {
        v.clamp(*range.start(), *range.end())
    }
}
pub fn clamp_frequency(v: f64) -> f64 {
    clamp_into(v, &FREQUENCY_RANGE)
}
pub fn clamp_amount(v: f64) -> f64 {
    clamp_into(v, &AMOUNT_RANGE)
}

/// What the visualiser needs from whatever holds the modulation values.
pub trait ModulationTarget {
    fn amount(&self) -> f64;
    fn set_amount(&mut self, v: f64);
    fn frequency(&self) -> f64;
    fn set_frequency(&mut self, v: f64);
}

/// Unbound values, for previews and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModulationValues {
    amount: f64,
    frequency: f64,
}

impl ModulationValues {
    pub fn new(amount: f64, frequency: f64) -> Self {
        Self {
            amount: clamp_amount(amount),
            frequency: clamp_frequency(frequency),
        }
    }
}

impl Default for ModulationValues {
    fn default() -> Self {
        Self::new(0.5, 2.0)
    }
}

impl ModulationTarget for ModulationValues {
    fn amount(&self) -> f64 {
        self.amount
    }
    fn set_amount(&mut self, v: f64) {
        self.amount = clamp_amount(v);
    }
    fn frequency(&self) -> f64 {
        self.frequency
    }
    fn set_frequency(&mut self, v: f64) {
        self.frequency = clamp_frequency(v);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the drawing area in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }
    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }
}

/// Per-visualiser state which is not a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModulationState {
    pub tick: u64,
    pub last_drag_translation: Point,
    pub phase: GesturePhase,
}

impl ModulationState {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn advance(&mut self, ticks: u64) {
        self.tick = self.tick.wrapping_add(ticks);
    }
}
