use super::{
    handle_drag, DragEvent, ModulationDelta, ModulationState, ModulationTarget, Readouts, Viewport,
    WaveformSampler,
};

/// Owns a modulation target together with the tick and gesture state that drive its visualisation.
#[derive(Debug, Default)]
pub struct LfoVisualiser<M> {
    model: M,
    state: ModulationState,
}

impl<M> LfoVisualiser<M>
where
    M: ModulationTarget,
{
    pub fn new(model: M) -> Self {
        Self {
            model,
            state: ModulationState::new(),
        }
    }
    pub fn model(&self) -> &M {
        &self.model
    }
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }
    pub fn state(&self) -> &ModulationState {
        &self.state
    }
    /// Both halves at once, for widgets that borrow them separately.
    pub fn split_mut(&mut self) -> (&mut M, &mut ModulationState) {
        (&mut self.model, &mut self.state)
    }
    pub fn into_model(self) -> M {
        self.model
    }

    pub fn tick(&self) -> u64 {
        self.state.tick
    }
    pub fn advance(&mut self, ticks: u64) {
        self.state.advance(ticks);
    }

    pub fn waveform(&self, viewport: Viewport) -> WaveformSampler {
        WaveformSampler::from_target(viewport, &self.model, self.state.tick)
    }

    pub fn handle(&mut self, event: DragEvent, viewport: Viewport) -> ModulationDelta {
        handle_drag(&mut self.state, &mut self.model, viewport, event)
    }

    pub fn readouts(&self) -> Readouts {
        Readouts::from_target(&self.model)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::modulation::{GesturePhase, LfoParameters, ModulationValues, Point};

    #[test]
    fn drag_is_visible_to_next_sample_pass() {
        let mut vis = LfoVisualiser::new(ModulationValues::new(0.0, 2.0));
        let viewport = Viewport::new(640.0, 200.0);
        assert!(vis.waveform(viewport).all(|p| p.y == 100.0));
        vis.handle(DragEvent::Start, viewport);
        vis.handle(DragEvent::Update { dx: 0.0, dy: -100.0 }, viewport);
        vis.handle(DragEvent::End, viewport);
        assert_eq!(vis.model().amount(), 1.0);
        assert!(vis.waveform(viewport).any(|p| p.y > 150.0));
        assert_eq!(vis.readouts().amount, "Amount: 100%");
    }

    #[test]
    fn tick_feeds_the_sampler() {
        let mut vis = LfoVisualiser::new(ModulationValues::new(1.0, 2.0));
        let viewport = Viewport::new(640.0, 200.0);
        let before: Vec<Point> = vis.waveform(viewport).collect();
        vis.advance(7);
        assert_eq!(vis.tick(), 7);
        let after: Vec<Point> = vis.waveform(viewport).collect();
        assert_eq!(after.len(), before.len());
        assert!((after[0].y - before[7].y).abs() < 1e-9);
    }

    #[test]
    fn works_over_bound_parameters() {
        let mut vis = LfoVisualiser::new(LfoParameters::new(0.5, 2.0));
        let viewport = Viewport::new(400.0, 400.0);
        vis.handle(DragEvent::Start, viewport);
        assert_eq!(vis.state().phase, GesturePhase::Dragging);
        vis.handle(DragEvent::Update { dx: 100.0, dy: 0.0 }, viewport);
        vis.handle(DragEvent::Cancel, viewport);
        assert_eq!(vis.state().phase, GesturePhase::Idle);
        assert!((vis.model().frequency() - 1.5).abs() < 1e-12);
        assert_eq!(vis.readouts().frequency, "Frequency: 1.50Hz");
    }
}
