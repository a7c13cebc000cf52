//! Drag gestures on the waveform, as discrete transitions over [`ModulationState`].
//!
//! Updates carry the translation accumulated since the gesture started. Only the difference to the
//! previously seen translation is applied, normalised by half of the viewport extent on that axis:
//! dragging up by half the height raises amount from 0 to 1 at any window size.
//! An `Update` arriving while idle starts the gesture implicitly.

use super::{clamp_amount, clamp_frequency, ModulationState, ModulationTarget, Point, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Start,
    /// Cumulative translation since `Start`, in pixels. Positive `dy` points down.
    Update { dx: f64, dy: f64 },
    End,
    /// Aborted by the input system; resets exactly like `End`.
    Cancel,
}

/// Change actually applied to the target by one event, after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModulationDelta {
    pub amount: f64,
    pub frequency: f64,
}

impl ModulationDelta {
    pub fn is_zero(&self) -> bool {
        self.amount == 0.0 && self.frequency == 0.0
    }
}

fn reset(state: &mut ModulationState, phase: GesturePhase) {
    state.phase = phase;
    state.last_drag_translation = Point::ZERO;
}

fn normalized(diff: f64, extent: f64) -> Option<f64> {
    (extent.is_finite() && extent > 0.0 && diff.is_finite()).then(|| diff / extent)
}

pub fn handle_drag<M>(
    state: &mut ModulationState,
    target: &mut M,
    viewport: Viewport,
    event: DragEvent,
) -> ModulationDelta
where
    M: ModulationTarget + ?Sized,
{
    match event {
        DragEvent::Start => {
            log::trace!("drag start");
            reset(state, GesturePhase::Dragging);
            ModulationDelta::default()
        }
        DragEvent::End | DragEvent::Cancel => {
            if state.phase == GesturePhase::Dragging {
                log::trace!("drag {:?}", event);
            }
            reset(state, GesturePhase::Idle);
            ModulationDelta::default()
        }
        DragEvent::Update { dx, dy } => {
            if state.phase == GesturePhase::Idle {
                log::debug!("drag update without start, starting implicitly");
                reset(state, GesturePhase::Dragging);
            }
            let last = state.last_drag_translation;
            let mut delta = ModulationDelta::default();

            match normalized(dy - last.y, viewport.half_height()) {
                Some(d) => {
                    let before = target.amount();
                    target.set_amount(clamp_amount(before - d));
                    delta.amount = target.amount() - before;
                }
                None => log::debug!("skipping amount, viewport height {}", viewport.height),
            }
            match normalized(dx - last.x, viewport.half_width()) {
                Some(d) => {
                    let before = target.frequency();
                    target.set_frequency(clamp_frequency(before - d));
                    delta.frequency = target.frequency() - before;
                }
                None => log::debug!("skipping frequency, viewport width {}", viewport.width),
            }

            state.last_drag_translation = Point::new(dx, dy);
            delta
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::modulation::{ModulationValues, AMOUNT_RANGE, FREQUENCY_RANGE};
    use rand::Rng;

    fn drag(
        state: &mut ModulationState,
        values: &mut ModulationValues,
        viewport: Viewport,
        path: &[(f64, f64)],
    ) {
        handle_drag(state, values, viewport, DragEvent::Start);
        for (dx, dy) in path {
            handle_drag(state, values, viewport, DragEvent::Update { dx: *dx, dy: *dy });
        }
        handle_drag(state, values, viewport, DragEvent::End);
    }

    #[test]
    fn dragging_up_raises_amount() {
        let mut state = ModulationState::new();
        let mut values = ModulationValues::new(0.5, 2.0);
        let viewport = Viewport::new(320.0, 200.0);
        handle_drag(&mut state, &mut values, viewport, DragEvent::Start);
        let delta = handle_drag(
            &mut state,
            &mut values,
            viewport,
            DragEvent::Update { dx: 0.0, dy: -50.0 },
        );
        assert_eq!(values.amount(), 1.0);
        assert_eq!(delta.amount, 0.5);
        assert_eq!(delta.frequency, 0.0);
        assert_eq!(state.last_drag_translation, Point::new(0.0, -50.0));
        assert_eq!(state.phase, GesturePhase::Dragging);
    }

    #[test]
    fn cumulative_updates_apply_only_the_difference() {
        let mut state = ModulationState::new();
        let mut values = ModulationValues::new(0.5, 2.0);
        let viewport = Viewport::new(400.0, 200.0);
        // 10 steps of -2px, cumulative, should equal one step of -20px
        let path: Vec<(f64, f64)> = (1..=10).map(|i| (-2.0 * i as f64, 2.0 * i as f64)).collect();
        drag(&mut state, &mut values, viewport, &path);
        assert!((values.frequency() - 2.1).abs() < 1e-12);
        assert!((values.amount() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn dragging_right_lowers_frequency() {
        let mut state = ModulationState::new();
        let mut values = ModulationValues::new(0.5, 2.0);
        drag(&mut state, &mut values, Viewport::new(200.0, 100.0), &[(50.0, 0.0)]);
        assert!((values.frequency() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn resolution_independent() {
        let mut deltas = vec![];
        for width in [200.0, 640.0, 1920.0] {
            let mut state = ModulationState::new();
            let mut values = ModulationValues::new(0.5, 5.0);
            let viewport = Viewport::new(width, 300.0);
            handle_drag(&mut state, &mut values, viewport, DragEvent::Start);
            let d = handle_drag(
                &mut state,
                &mut values,
                viewport,
                DragEvent::Update {
                    dx: 0.125 * width,
                    dy: 0.0,
                },
            );
            deltas.push(d.frequency);
        }
        for d in &deltas {
            assert!((d - deltas[0]).abs() < 1e-12);
            assert!((d + 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn drag_end_is_idempotent() {
        let mut state = ModulationState::new();
        let mut values = ModulationValues::new(0.4, 3.0);
        let viewport = Viewport::new(200.0, 200.0);
        drag(&mut state, &mut values, viewport, &[(10.0, 10.0)]);
        let snapshot = values;
        let d1 = handle_drag(&mut state, &mut values, viewport, DragEvent::End);
        let d2 = handle_drag(&mut state, &mut values, viewport, DragEvent::End);
        assert!(d1.is_zero() && d2.is_zero());
        assert_eq!(values, snapshot);
        assert_eq!(state.last_drag_translation, Point::ZERO);
        assert_eq!(state.phase, GesturePhase::Idle);
    }

    #[test]
    fn cancel_resets_like_end() {
        let mut state = ModulationState::new();
        let mut values = ModulationValues::default();
        let viewport = Viewport::new(200.0, 200.0);
        handle_drag(&mut state, &mut values, viewport, DragEvent::Start);
        handle_drag(&mut state, &mut values, viewport, DragEvent::Update { dx: 30.0, dy: 40.0 });
        handle_drag(&mut state, &mut values, viewport, DragEvent::Cancel);
        assert_eq!(state.last_drag_translation, Point::ZERO);
        // the next gesture starts from zero, not from the aborted translation
        let before = values;
        handle_drag(&mut state, &mut values, viewport, DragEvent::Start);
        handle_drag(&mut state, &mut values, viewport, DragEvent::Update { dx: 0.0, dy: -10.0 });
        assert!((values.amount() - (before.amount() + 0.1)).abs() < 1e-12);
    }

    #[test]
    fn update_while_idle_starts_implicitly() {
        let mut state = ModulationState::new();
        let mut values = ModulationValues::new(0.5, 2.0);
        let viewport = Viewport::new(200.0, 200.0);
        handle_drag(&mut state, &mut values, viewport, DragEvent::Update { dx: 0.0, dy: -10.0 });
        assert_eq!(state.phase, GesturePhase::Dragging);
        assert!((values.amount() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn zero_viewport_records_translation_without_mutation() {
        let mut state = ModulationState::new();
        let mut values = ModulationValues::new(0.5, 2.0);
        let viewport = Viewport::new(0.0, 0.0);
        handle_drag(&mut state, &mut values, viewport, DragEvent::Start);
        let d = handle_drag(&mut state, &mut values, viewport, DragEvent::Update { dx: 5.0, dy: 5.0 });
        assert!(d.is_zero());
        assert_eq!(values, ModulationValues::new(0.5, 2.0));
        assert_eq!(state.last_drag_translation, Point::new(5.0, 5.0));
    }

    #[test]
    fn random_large_drags_stay_clamped() {
        let mut rng = rand::thread_rng();
        let mut state = ModulationState::new();
        let mut values = ModulationValues::default();
        for _ in 0..200 {
            let viewport = Viewport::new(rng.gen_range(1.0..4000.0), rng.gen_range(1.0..4000.0));
            handle_drag(&mut state, &mut values, viewport, DragEvent::Start);
            for _ in 0..20 {
                let dx = rng.gen_range(-1.0e6..1.0e6);
                let dy = rng.gen_range(-1.0e6..1.0e6);
                handle_drag(&mut state, &mut values, viewport, DragEvent::Update { dx, dy });
                assert!(FREQUENCY_RANGE.contains(&values.frequency()));
                assert!(AMOUNT_RANGE.contains(&values.amount()));
            }
            handle_drag(&mut state, &mut values, viewport, DragEvent::End);
        }
    }
}
