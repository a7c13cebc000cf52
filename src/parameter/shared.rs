//! Single-writer handoff of published values to a reader on another thread (e.g. the audio callback).

use super::event::{Listener, ParameterEvent};
use super::value::ParameterValue;
use crate::utils::atomic::{self, SimpleAtomic};
use std::sync::Arc;

/// Writing side. Deliberately not `Clone`, so there is exactly one writer per cell.
#[derive(Debug)]
pub struct SharedValue(Arc<atomic::F64>);

/// Read-only side, cheap to clone and safe to move to any thread.
#[derive(Debug, Clone)]
pub struct SharedReader(Arc<atomic::F64>);

impl SharedValue {
    pub fn new(init: f64) -> Self {
        Self(Arc::new(atomic::F64::new(init)))
    }
    pub fn reader(&self) -> SharedReader {
        SharedReader(Arc::clone(&self.0))
    }
    pub fn store(&self, v: f64) {
        self.0.store(v)
    }
    pub fn load(&self) -> f64 {
        self.0.load()
    }
}

impl SharedReader {
    pub fn load(&self) -> f64 {
        self.0.load()
    }
}

impl<V: ParameterValue> Listener<V> for SharedValue {
    fn on_event(&mut self, event: &ParameterEvent<V>) {
        if let ParameterEvent::ValueChanged { value, .. } = event {
            self.store(value.to_f64());
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parameter::ObjectId;

    #[test]
    fn reader_sees_store() {
        let w = SharedValue::new(0.5);
        let r = w.reader();
        w.store(0.25);
        assert_eq!(r.load(), 0.25);
        assert_eq!(w.load(), 0.25);
    }

    #[test]
    fn ignores_label_events() {
        let mut w = SharedValue::new(1.0);
        Listener::<f64>::on_event(
            &mut w,
            &ParameterEvent::LabelChanged {
                id: ObjectId::from_raw(3),
                label: "x".to_string(),
            },
        );
        assert_eq!(w.load(), 1.0);
    }

    #[test]
    fn reader_crosses_threads() {
        let w = SharedValue::new(2.0);
        let r = w.reader();
        w.store(4.0);
        let seen = std::thread::spawn(move || r.load()).join().unwrap();
        assert_eq!(seen, 4.0);
    }
}
