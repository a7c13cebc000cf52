use super::{ModulationTarget, Point, Viewport};

/// Pixels per wave cycle at 1Hz is `width / BASE_WIDTH_DIVISOR`.
const BASE_WIDTH_DIVISOR: f64 = 32.0;

/// Polyline approximation of the LFO sine at one point per horizontal pixel.
///
/// Yields `(x, sin((x + tick) / period) * H/2 * amount + H/2)` for every integer `x` in `0..=W`,
/// where `period = (W / 32) / (frequency / 2)`. The first point starts the path.
/// A viewport which would make the period or height unusable yields nothing.
#[derive(Debug, Clone)]
pub struct WaveformSampler {
    x: u64,
    end: u64,
    tick: u64,
    period_pixels: f64,
    max_half_height: f64,
    amount: f64,
}

impl WaveformSampler {
    pub fn new(viewport: Viewport, amount: f64, frequency: f64, tick: u64) -> Self {
        let max_half_height = viewport.half_height();
        let base_width_per_hz = viewport.width.trunc() / BASE_WIDTH_DIVISOR;
        let period_pixels = base_width_per_hz / (frequency / 2.0);
        let usable = viewport.width >= 0.0
            && max_half_height.is_finite()
            && period_pixels.is_finite()
            && period_pixels > 0.0;
        if !usable {
            log::debug!(
                "no waveform for {}x{} at {}Hz",
                viewport.width,
                viewport.height,
                frequency
            );
        }
        // `as` saturates, so a width beyond u64 caps the count
        let end = if usable {
            (viewport.width as u64).saturating_add(1)
        } else {
            0
        };
        Self {
            x: 0,
            end,
            tick,
            period_pixels,
            max_half_height,
            amount,
        }
    }

    pub fn from_target<M>(viewport: Viewport, target: &M, tick: u64) -> Self
    where
        M: ModulationTarget + ?Sized,
    {
        Self::new(viewport, target.amount(), target.frequency(), tick)
    }

    pub fn period_pixels(&self) -> f64 {
        self.period_pixels
    }
}

impl Iterator for WaveformSampler {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.x >= self.end {
            return None;
        }
        let x = self.x as f64;
        let value = ((x + self.tick as f64) / self.period_pixels).sin();
        let y = value * self.max_half_height * self.amount + self.max_half_height;
        self.x += 1;
        Some(Point::new(x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.end - self.x) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for WaveformSampler {}

/// Overlay text for the current modulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readouts {
    pub amount: String,
    pub frequency: String,
}

impl Readouts {
    pub fn new(amount: f64, frequency: f64) -> Self {
        Self {
            amount: format!("Amount: {:.0}%", amount * 100.0),
            frequency: format!("Frequency: {:.2}Hz", frequency),
        }
    }
    pub fn from_target<M>(target: &M) -> Self
    where
        M: ModulationTarget + ?Sized,
    {
        Self::new(target.amount(), target.frequency())
    }
}
