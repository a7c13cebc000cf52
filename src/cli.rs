use crate::config::Config;
use crate::modulation::{clamp_amount, clamp_frequency};
pub use clap::Parser;
use std::path::PathBuf;

/// continuous-lfo - interactive LFO visualisation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path of a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// log information level (1:trace 2:debug 3:info 4:warn 5:error 6:none)
    #[arg(short, long, default_value_t = 3)]
    log_level: u8,
    /// Initial modulation amount (0..1), overrides the config
    #[arg(short, long)]
    amount: Option<f64>,
    /// Initial frequency in Hz (0.01..20), overrides the config
    #[arg(short, long)]
    frequency: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchArg {
    pub config: Option<PathBuf>,
    pub log_level: u8,
    pub amount: Option<f64>,
    pub frequency: Option<f64>,
}

impl From<Args> for LaunchArg {
    fn from(val: Args) -> Self {
        LaunchArg {
            config: val.config,
            log_level: val.log_level,
            amount: val.amount,
            frequency: val.frequency,
        }
    }
}

impl LaunchArg {
    /// Loads the config file if one was given, falling back to defaults when it can't be used.
    /// Command line values are clamped into range rather than rejected.
    pub fn resolve_config(&self) -> Config {
        let mut config = match &self.config {
            Some(path) => Config::load(path).unwrap_or_else(|e| {
                log::error!("{}, using default config", e);
                Config::default()
            }),
            None => Config::default(),
        };
        if let Some(a) = self.amount {
            config.initial.amount = clamp_amount(a);
        }
        if let Some(f) = self.frequency {
            config.initial.frequency = clamp_frequency(f);
        }
        config
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Args::parse_from(["continuous-lfo", "-a", "0.25", "--frequency", "4", "-l", "1"]);
        let launch = LaunchArg::from(args);
        assert_eq!(launch.amount, Some(0.25));
        assert_eq!(launch.frequency, Some(4.0));
        assert_eq!(launch.log_level, 1);
        assert_eq!(launch.config, None);
    }

    #[test]
    fn overrides_are_clamped() {
        let launch = LaunchArg {
            amount: Some(3.0),
            frequency: Some(-1.0),
            ..Default::default()
        };
        let config = launch.resolve_config();
        assert_eq!(config.initial.amount, 1.0);
        assert_eq!(config.initial.frequency, 0.01);
    }

    #[test]
    fn unreadable_config_falls_back() {
        let launch = LaunchArg {
            config: Some("/nonexistent/lfo.json".into()),
            ..Default::default()
        };
        assert_eq!(launch.resolve_config(), Config::default());
    }
}
