use crate::config::VisualStyle;
use crate::modulation::{
    handle_drag, DragEvent, GesturePhase, ModulationState, ModulationTarget, Readouts, Viewport,
    WaveformSampler,
};

/// Interactive LFO waveform. Dragging vertically changes amount, horizontally changes frequency.
pub struct LfoVisualisation<'a, M>
where
    M: ModulationTarget,
{
    model: &'a mut M,
    state: &'a mut ModulationState,
    style: &'a VisualStyle,
}

impl<'a, M> LfoVisualisation<'a, M>
where
    M: ModulationTarget,
{
    pub fn new(model: &'a mut M, state: &'a mut ModulationState, style: &'a VisualStyle) -> Self {
        Self {
            model,
            state,
            style,
        }
    }

    fn dispatch(&mut self, event: DragEvent, viewport: Viewport) {
        handle_drag(&mut *self.state, &mut *self.model, viewport, event);
    }

    fn react(&mut self, response: &egui::Response, viewport: Viewport) {
        if response.drag_started() {
            self.dispatch(DragEvent::Start, viewport);
        }
        if response.dragged() {
            let origin = response.ctx.input(|i| i.pointer.press_origin());
            if let (Some(origin), Some(pos)) = (origin, response.interact_pointer_pos()) {
                let translation = pos - origin;
                self.dispatch(
                    DragEvent::Update {
                        dx: translation.x as f64,
                        dy: translation.y as f64,
                    },
                    viewport,
                );
            }
        }
        if response.drag_released() {
            self.dispatch(DragEvent::End, viewport);
        } else if self.state.phase == GesturePhase::Dragging && !response.dragged() {
            // pointer left the app or the drag was taken by another widget
            self.dispatch(DragEvent::Cancel, viewport);
        }
    }

    fn paint_readouts(&self, painter: &egui::Painter, rect: egui::Rect) {
        let readouts = Readouts::from_target(&*self.model);
        let font = egui::FontId::proportional(self.style.font_size);
        let color = self.style.stroke_color32();
        let amount = painter.layout_no_wrap(readouts.amount, font.clone(), color);
        let frequency = painter.layout_no_wrap(readouts.frequency, font, color);

        let pad = self.style.padding;
        let width = amount.size().x.max(frequency.size().x);
        let height = amount.size().y + frequency.size().y;
        let frame = egui::Rect::from_min_max(
            rect.right_bottom() - egui::vec2(width + pad * 2.0, height + pad * 2.0),
            rect.right_bottom(),
        );
        painter.rect_filled(frame, 0.0, self.style.overlay_color32());
        painter.rect_stroke(frame, 0.0, egui::Stroke::new(1.0, self.style.border_color32()));

        let right = frame.right() - pad;
        let top = frame.top() + pad;
        let amount_pos = egui::pos2(right - amount.size().x, top);
        let frequency_pos = egui::pos2(right - frequency.size().x, top + amount.size().y);
        painter.galley(amount_pos, amount);
        painter.galley(frequency_pos, frequency);
    }
}

/// Screen-space points of the waveform. The painted shape takes ownership,
/// so each frame makes exactly one allocation sized to the sampler.
fn polyline(sampler: WaveformSampler, origin: egui::Pos2) -> Vec<egui::Pos2> {
    let mut points = Vec::with_capacity(sampler.len());
    points.extend(sampler.map(|p| origin + egui::vec2(p.x as f32, p.y as f32)));
    points
}

impl<'a, M> egui::Widget for LfoVisualisation<'a, M>
where
    M: ModulationTarget,
{
    fn ui(mut self, ui: &mut egui::Ui) -> egui::Response {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect.shrink(self.style.padding);
        let viewport = Viewport::new(rect.width() as f64, rect.height() as f64);

        self.react(&response, viewport);

        let points = polyline(
            WaveformSampler::from_target(viewport, &*self.model, self.state.tick),
            rect.min,
        );
        if points.len() > 1 {
            painter.add(egui::Shape::line(
                points,
                egui::Stroke::new(self.style.stroke_width, self.style.stroke_color32()),
            ));
        }
        // overlay is painted only, it never takes the pointer
        self.paint_readouts(&painter, rect);

        response.on_hover_cursor(egui::CursorIcon::Grab)
    }
}
