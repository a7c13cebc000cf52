use super::{clamp_amount, clamp_frequency, ModulationTarget, AMOUNT_RANGE, FREQUENCY_RANGE};
use crate::parameter::{
    EventKind, Listener, ObjectId, Parameter, ParameterConfig, SharedReader, Subscription,
};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LfoParameterId {
    Amount,
    Frequency,
}

impl LfoParameterId {
    pub const ALL: [Self; 2] = [Self::Amount, Self::Frequency];

    pub fn label(self) -> &'static str {
        match self {
            Self::Amount => "Amount",
            Self::Frequency => "Frequency",
        }
    }
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Self::Amount => AMOUNT_RANGE,
            Self::Frequency => FREQUENCY_RANGE,
        }
    }
    /// Frequency spans three decades, so it is edited on a log scale.
    pub fn is_logarithmic(self) -> bool {
        self == Self::Frequency
    }
    pub fn get<M>(self, target: &M) -> f64
    where
        M: ModulationTarget + ?Sized,
    {
        match self {
            Self::Amount => target.amount(),
            Self::Frequency => target.frequency(),
        }
    }
    pub fn set<M>(self, target: &mut M, v: f64)
    where
        M: ModulationTarget + ?Sized,
    {
        match self {
            Self::Amount => target.set_amount(v),
            Self::Frequency => target.set_frequency(v),
        }
    }
}

/// Amount and frequency of one LFO, held in observable parameter cells.
///
/// Writes are clamped before they reach the cell, so observers only ever see in-range values.
/// Each cell also feeds a [`SharedReader`] for the audio thread.
pub struct LfoParameters {
    amount: Parameter<f64, LfoParameterId>,
    frequency: Parameter<f64, LfoParameterId>,
    amount_reader: SharedReader,
    frequency_reader: SharedReader,
}

impl LfoParameters {
    pub fn new(amount: f64, frequency: f64) -> Self {
        Self::with_config(amount, frequency, ParameterConfig::default())
    }

    pub fn with_config(amount: f64, frequency: f64, config: ParameterConfig) -> Self {
        let mut amount = Parameter::with_config(
            ObjectId::next(),
            LfoParameterId::Amount,
            LfoParameterId::Amount.label(),
            clamp_amount(amount),
            *AMOUNT_RANGE.end(),
            config,
        );
        let mut frequency = Parameter::with_config(
            ObjectId::next(),
            LfoParameterId::Frequency,
            LfoParameterId::Frequency.label(),
            clamp_frequency(frequency),
            *FREQUENCY_RANGE.end(),
            config,
        );
        let amount_reader = amount.share();
        let frequency_reader = frequency.share();
        Self {
            amount,
            frequency,
            amount_reader,
            frequency_reader,
        }
    }

    pub fn parameter(&self, id: LfoParameterId) -> &Parameter<f64, LfoParameterId> {
        match id {
            LfoParameterId::Amount => &self.amount,
            LfoParameterId::Frequency => &self.frequency,
        }
    }
    pub fn parameter_mut(&mut self, id: LfoParameterId) -> &mut Parameter<f64, LfoParameterId> {
        match id {
            LfoParameterId::Amount => &mut self.amount,
            LfoParameterId::Frequency => &mut self.frequency,
        }
    }

    pub fn subscribe(
        &mut self,
        id: LfoParameterId,
        filter: EventKind,
        listener: impl Listener<f64> + 'static,
    ) -> Subscription {
        self.parameter_mut(id).subscribe(filter, listener)
    }

    /// Read handle for the audio thread. It never writes back.
    pub fn reader(&self, id: LfoParameterId) -> SharedReader {
        match id {
            LfoParameterId::Amount => self.amount_reader.clone(),
            LfoParameterId::Frequency => self.frequency_reader.clone(),
        }
    }
}

impl Default for LfoParameters {
    fn default() -> Self {
        Self::new(0.5, 2.0)
    }
}

impl ModulationTarget for LfoParameters {
    fn amount(&self) -> f64 {
        self.amount.value()
    }
    fn set_amount(&mut self, v: f64) {
        self.amount.set_value(clamp_amount(v));
    }
    fn frequency(&self) -> f64 {
        self.frequency.value()
    }
    fn set_frequency(&mut self, v: f64) {
        self.frequency.set_value(clamp_frequency(v));
    }
}

impl std::fmt::Debug for LfoParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LfoParameters")
            .field("amount", &self.amount)
            .field("frequency", &self.frequency)
            .finish()
    }
}
