use continuous_lfo::cli::{Args, LaunchArg, Parser};
use continuous_lfo::config::Config;
use continuous_lfo::gui::{self, LfoVisualisation, TickClock};
use continuous_lfo::modulation::{LfoParameterId, LfoParameters, LfoVisualiser};
use continuous_lfo::parameter::{EventKind, ParameterEvent, SharedReader};
use continuous_lfo::utils::logger::{self, Logger};

fn main() -> Result<(), eframe::Error> {
    let arg = LaunchArg::from(Args::parse());
    let logger = logger::init(logger::level_from_verbosity(arg.log_level));
    let config = arg.resolve_config();
    log::info!(
        "starting with amount {} / frequency {}Hz",
        config.initial.amount,
        config.initial.frequency
    );

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(900., 600.)),
        ..Default::default()
    };
    eframe::run_native(
        "continuous-lfo",
        native_options,
        Box::new(move |_cc| Box::new(Model::new(config, logger))),
    )
}

fn log_changes(event: &ParameterEvent<f64>) {
    if let ParameterEvent::ValueChanged { id, value, .. } = event {
        log::debug!("{} -> {:.3}", id, value);
    }
}

struct Model {
    visualiser: LfoVisualiser<LfoParameters>,
    config: Config,
    clock: TickClock,
    engine_amount: SharedReader,
    engine_frequency: SharedReader,
    logger: &'static Logger,
    log_open: bool,
}

impl Model {
    fn new(config: Config, logger: &'static Logger) -> Self {
        let mut params = LfoParameters::with_config(
            config.initial.amount,
            config.initial.frequency,
            config.parameters,
        );
        params.subscribe(LfoParameterId::Amount, EventKind::Value, log_changes);
        params.subscribe(LfoParameterId::Frequency, EventKind::Value, log_changes);
        let engine_amount = params.reader(LfoParameterId::Amount);
        let engine_frequency = params.reader(LfoParameterId::Frequency);
        Self {
            visualiser: LfoVisualiser::new(params),
            clock: TickClock::new(config.animation.ticks_per_second),
            config,
            engine_amount,
            engine_frequency,
            logger,
            log_open: false,
        }
    }
}

impl eframe::App for Model {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt) as f64;
        let ticks = self.clock.advance(dt);
        self.visualiser.advance(ticks);

        egui::panel::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("continuous-lfo");
                ui.separator();
                ui.label(format!(
                    "engine sees: amount {:.2} / {:.2}Hz",
                    self.engine_amount.load(),
                    self.engine_frequency.load()
                ));
                ui.separator();
                ui.toggle_value(&mut self.log_open, "log");
            });
        });
        egui::panel::SidePanel::left("controls")
            .resizable(false)
            .show(ctx, |ui| {
                let model = self.visualiser.model_mut();
                for id in LfoParameterId::ALL {
                    gui::slider_from_target(id, model, ui);
                }
            });
        egui::panel::TopBottomPanel::bottom("log")
            .resizable(true)
            .show_animated(ctx, self.log_open, |ui| {
                gui::log_panel(ui, self.logger, 200);
            });
        egui::CentralPanel::default().show(ctx, |ui| {
            let (model, state) = self.visualiser.split_mut();
            ui.add(LfoVisualisation::new(model, state, &self.config.style));
        });

        //the waveform runs continuously
        ctx.request_repaint();
    }
}
