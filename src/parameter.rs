//! Observable parameter cells which bridge an engine control value to the UI.
//!
//! A [`Parameter`] owns its observer list. Every mutator pushes a typed [`ParameterEvent`]
//! to the listeners subscribed for that kind of event, synchronously and in subscription order.

pub mod event;
pub mod group;
pub mod id;
pub mod shared;
pub mod value;

use serde::{Deserialize, Serialize};

pub use event::{EventKind, Listener, ParameterEvent, Subscription};
pub use group::ParameterGroup;
pub use id::ObjectId;
pub use shared::{SharedReader, SharedValue};
pub use value::ParameterValue;

use event::Observers;

/// How `maximum` is treated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BoundMode {
    /// Maximum is kept for display and normalisation only.
    #[default]
    Advisory,
    /// Writes are clamped into `ZERO..=maximum`.
    Enforced,
    /// Maximum supplied at construction is dropped and stored as zero, like older sequencer builds did.
    Legacy,
}

/// Whether writing the current value again publishes an event.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PublishPolicy {
    #[default]
    Always,
    OnChange,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ParameterConfig {
    pub bound_mode: BoundMode,
    pub publish_policy: PublishPolicy,
}

pub struct Parameter<V, Id = ()>
where
    V: ParameterValue,
{
    global_id: ObjectId,
    local_id: Id,
    label: String,
    value: V,
    maximum: V,
    config: ParameterConfig,
    observers: Observers<V>,
}

impl<V, Id> Parameter<V, Id>
where
    V: ParameterValue,
{
    /// Panics if another live parameter already holds `global_id`.
    pub fn new(
        global_id: ObjectId,
        local_id: Id,
        label: impl Into<String>,
        value: V,
        maximum: V,
    ) -> Self {
        Self::with_config(
            global_id,
            local_id,
            label,
            value,
            maximum,
            ParameterConfig::default(),
        )
    }

    pub fn with_config(
        global_id: ObjectId,
        local_id: Id,
        label: impl Into<String>,
        value: V,
        maximum: V,
        config: ParameterConfig,
    ) -> Self {
        id::register(global_id);
        let maximum = match config.bound_mode {
            BoundMode::Legacy => V::ZERO,
            _ => maximum,
        };
        let mut res = Self {
            global_id,
            local_id,
            label: label.into(),
            value,
            maximum,
            config,
            observers: Observers::new(),
        };
        res.value = res.bounded(value);
        log::trace!(
            "created parameter {} \"{}\" = {:?} (max {:?})",
            res.global_id,
            res.label,
            res.value,
            res.maximum
        );
        res
    }

    pub fn global_id(&self) -> ObjectId {
        self.global_id
    }
    pub fn local_id(&self) -> &Id {
        &self.local_id
    }
    pub fn label(&self) -> &str {
        &self.label
    }
    pub fn value(&self) -> V {
        self.value
    }
    pub fn maximum(&self) -> V {
        self.maximum
    }
    pub fn bound_mode(&self) -> BoundMode {
        self.config.bound_mode
    }
    pub fn publish_policy(&self) -> PublishPolicy {
        self.config.publish_policy
    }

    /// `value / maximum`, or `None` while maximum is zero.
    pub fn normalized(&self) -> Option<f64> {
        let max = self.maximum.to_f64();
        (max != 0.0).then(|| self.value.to_f64() / max)
    }

    fn bounded(&self, v: V) -> V {
        match self.config.bound_mode {
            BoundMode::Enforced => v.clamp_between(V::ZERO, self.maximum),
            BoundMode::Advisory | BoundMode::Legacy => v,
        }
    }

    fn suppress(&self, unchanged: bool) -> bool {
        unchanged && self.config.publish_policy == PublishPolicy::OnChange
    }

    /// Stores `v` (clamped when the maximum is enforced) and returns what was stored.
    pub fn set_value(&mut self, v: V) -> V {
        let value = self.bounded(v);
        let previous = self.value;
        if self.suppress(previous == value) {
            return value;
        }
        self.value = value;
        log::trace!("{} \"{}\": {:?} -> {:?}", self.global_id, self.label, previous, value);
        self.observers.publish(&ParameterEvent::ValueChanged {
            id: self.global_id,
            value,
            previous,
        });
        value
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        let label = label.into();
        if self.suppress(self.label == label) {
            return;
        }
        self.label = label.clone();
        self.observers.publish(&ParameterEvent::LabelChanged {
            id: self.global_id,
            label,
        });
    }

    /// In enforced mode the current value is re-clamped against the new maximum.
    pub fn set_maximum(&mut self, maximum: V) {
        if self.suppress(self.maximum == maximum) {
            return;
        }
        self.maximum = maximum;
        self.observers.publish(&ParameterEvent::MaximumChanged {
            id: self.global_id,
            maximum,
        });
        if self.config.bound_mode == BoundMode::Enforced {
            let current = self.value;
            if self.bounded(current) != current {
                self.set_value(current);
            }
        }
    }

    pub fn subscribe(&mut self, filter: EventKind, listener: impl Listener<V> + 'static) -> Subscription {
        self.observers.add(filter, Box::new(listener))
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.observers.remove(subscription)
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Hands out a read-only view of the value for another thread.
    /// The parameter stays the only writer: it stores every published value into the shared cell.
    pub fn share(&mut self) -> SharedReader {
        let shared = SharedValue::new(self.value.to_f64());
        let reader = shared.reader();
        self.subscribe(EventKind::Value, shared);
        reader
    }
}

impl<V, Id> Drop for Parameter<V, Id>
where
    V: ParameterValue,
{
    fn drop(&mut self) {
        id::release(self.global_id);
    }
}

impl<V, Id> std::fmt::Debug for Parameter<V, Id>
where
    V: ParameterValue,
    Id: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parameter")
            .field("global_id", &self.global_id)
            .field("local_id", &self.local_id)
            .field("label", &self.label)
            .field("value", &self.value)
            .field("maximum", &self.maximum)
            .field("config", &self.config)
            .field("subscribers", &self.observers.len())
            .finish()
    }
}
