//! GUI for parameter control and modulation visualisation.
//! Currently implemented on [`egui`].

pub mod clock;
pub mod lfo;

pub use clock::TickClock;
pub use lfo::LfoVisualisation;

use crate::modulation::{LfoParameterId, ModulationTarget};
use crate::utils::logger::Logger;

/// Slider for one LFO parameter. The id picks the label, range and scale.
pub fn slider_from_target<M: ModulationTarget>(
    id: LfoParameterId,
    model: &mut M,
    ui: &mut egui::Ui,
) -> egui::Response {
    ui.horizontal(|ui| {
        ui.group(|ui| {
            ui.set_width(70.);
            ui.centered_and_justified(|ui| {
                ui.label(id.label());
            })
        });
        ui.add(
            egui::Slider::from_get_set(id.range(), |v: Option<f64>| {
                if let Some(n) = v {
                    id.set(model, n);
                }
                id.get(model)
            })
            .logarithmic(id.is_logarithmic()),
        )
    })
    .inner
}

/// Most recent log records, newest on top.
pub fn log_panel(ui: &mut egui::Ui, logger: &Logger, count: usize) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        for record in logger.recent(count) {
            ui.colored_label(record.color(), record.to_string());
        }
    });
}
