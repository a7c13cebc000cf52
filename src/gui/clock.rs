/// Turns frame durations into whole animation ticks at a fixed rate.
/// The fractional part is carried to the next frame so slow and fast frame rates advance alike.
#[derive(Debug, Clone, PartialEq)]
pub struct TickClock {
    ticks_per_second: f64,
    remainder: f64,
}

impl TickClock {
    pub fn new(ticks_per_second: f64) -> Self {
        Self {
            ticks_per_second,
            remainder: 0.0,
        }
    }
    pub fn ticks_per_second(&self) -> f64 {
        self.ticks_per_second
    }

    /// `dt` in seconds. Returns how many ticks elapsed.
    pub fn advance(&mut self, dt: f64) -> u64 {
        if !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        let total = self.remainder + dt * self.ticks_per_second;
        let whole = total.floor();
        self.remainder = total - whole;
        whole as u64
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn whole_ticks() {
        let mut clock = TickClock::new(60.0);
        assert_eq!(clock.advance(0.5), 30);
    }

    #[test]
    fn fractions_carry_over() {
        let mut clock = TickClock::new(4.0);
        assert_eq!(clock.advance(0.125), 0);
        assert_eq!(clock.advance(0.125), 1);
        assert_eq!(clock.advance(0.375), 1);
        assert_eq!(clock.advance(0.125), 1);
    }

    #[test]
    fn ignores_bad_durations() {
        let mut clock = TickClock::new(60.0);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(f64::NAN), 0);
        assert_eq!(clock.advance(0.0), 0);
    }
}
