//! `log` sink echoing to stdout and keeping a short history for the on-screen log panel.
use crate::utils::atomic::{self, SimpleAtomic};
use std::{
    collections::VecDeque,
    fmt,
    sync::{Mutex, OnceLock},
};

const HISTORY_LEN: usize = 1000;
const CRATE_PREFIX: &str = concat!(env!("CARGO_CRATE_NAME"), "::");

/// One captured record. The target is kept relative to this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: log::Level,
    pub target: String,
    pub message: String,
}

impl LogRecord {
    fn capture(record: &log::Record) -> Self {
        let target = record.target();
        let target = target.strip_prefix(CRATE_PREFIX).unwrap_or(target);
        Self {
            level: record.level(),
            target: target.to_string(),
            message: record.args().to_string(),
        }
    }
    pub fn color(&self) -> egui::Color32 {
        match self.level {
            log::Level::Error => egui::Color32::RED,
            log::Level::Warn => egui::Color32::YELLOW,
            log::Level::Info => egui::Color32::WHITE,
            log::Level::Debug => egui::Color32::DEBUG_COLOR,
            log::Level::Trace => egui::Color32::GRAY,
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:<5}] {}: {}", self.level, self.target, self.message)
    }
}

pub struct Logger {
    enabled: atomic::Bool,
    history: Mutex<VecDeque<LogRecord>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            enabled: atomic::Bool::new(true),
            history: Mutex::new(VecDeque::with_capacity(HISTORY_LEN)),
        }
    }
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled);
    }
    /// Newest first. Empty while another thread is writing.
    pub fn recent(&self, count: usize) -> Vec<LogRecord> {
        match self.history.try_lock() {
            Ok(history) => history.iter().take(count).cloned().collect(),
            Err(_) => vec![],
        }
    }
    pub fn clear(&self) {
        if let Ok(mut history) = self.history.lock() {
            history.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.enabled.load() && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let record = LogRecord::capture(record);
        println!("{}", record);
        // a record racing the panel's read is dropped from history, never blocks the writer
        if let Ok(mut history) = self.history.try_lock() {
            if history.len() == HISTORY_LEN {
                history.pop_back();
            }
            history.push_front(record);
        }
    }

    fn flush(&self) {
        use std::io::Write;
        let _ = std::io::stdout().flush();
    }
}

pub static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Maps the command line verbosity (1:trace 2:debug 3:info 4:warn 5:error 6:none).
pub fn level_from_verbosity(v: u8) -> log::LevelFilter {
    match v {
        0 | 1 => log::LevelFilter::Trace,
        2 => log::LevelFilter::Debug,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Warn,
        5 => log::LevelFilter::Error,
        _ => log::LevelFilter::Off,
    }
}

/// Installs [`GLOBAL_LOGGER`]. Later calls only change the level.
pub fn init(level: log::LevelFilter) -> &'static Logger {
    let logger = GLOBAL_LOGGER.get_or_init(Logger::new);
    if log::set_logger(logger).is_err() {
        log::debug!("logger was already installed");
    }
    log::set_max_level(level);
    logger
}

#[cfg(test)]
mod test {
    use super::*;
    use log::Log;

    fn emit(logger: &Logger, level: log::Level, target: &str, message: &str) {
        logger.log(
            &log::Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target(target)
                .build(),
        );
    }

    #[test]
    fn keeps_newest_first() {
        log::set_max_level(log::LevelFilter::Trace);
        let logger = Logger::new();
        for i in 0..3 {
            emit(&logger, log::Level::Info, "test", &format!("message {}", i));
        }
        let recent = logger.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].message, "message 2");
        assert_eq!(recent[1].message, "message 1");
    }
    #[test]
    fn history_is_bounded() {
        log::set_max_level(log::LevelFilter::Trace);
        let logger = Logger::new();
        for i in 0..HISTORY_LEN + 5 {
            emit(&logger, log::Level::Warn, "test", &i.to_string());
        }
        let recent = logger.recent(usize::MAX);
        assert_eq!(recent.len(), HISTORY_LEN);
        assert_eq!(recent[0].message, (HISTORY_LEN + 4).to_string());
        logger.clear();
        assert!(logger.recent(1).is_empty());
    }
    #[test]
    fn crate_prefix_is_stripped_from_target() {
        log::set_max_level(log::LevelFilter::Trace);
        let logger = Logger::new();
        emit(&logger, log::Level::Error, "continuous_lfo::modulation::gesture", "drag");
        emit(&logger, log::Level::Error, "eframe::native", "window");
        let recent = logger.recent(2);
        assert_eq!(recent[1].to_string(), "[ERROR] modulation::gesture: drag");
        assert_eq!(recent[0].to_string(), "[ERROR] eframe::native: window");
        assert_eq!(recent[0].color(), egui::Color32::RED);
    }
    #[test]
    fn disabled_logger_drops_records() {
        let logger = Logger::new();
        logger.set_enabled(false);
        emit(&logger, log::Level::Error, "test", "dropped");
        assert!(logger.recent(10).is_empty());
    }
    #[test]
    fn verbosity_mapping() {
        assert_eq!(level_from_verbosity(1), log::LevelFilter::Trace);
        assert_eq!(level_from_verbosity(3), log::LevelFilter::Info);
        assert_eq!(level_from_verbosity(9), log::LevelFilter::Off);
    }
}
