use super::id::ObjectId;

/// Change notification pushed by a [`super::Parameter`] mutator.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterEvent<V> {
    ValueChanged { id: ObjectId, value: V, previous: V },
    LabelChanged { id: ObjectId, label: String },
    MaximumChanged { id: ObjectId, maximum: V },
}

impl<V> ParameterEvent<V> {
    pub fn id(&self) -> ObjectId {
        match self {
            Self::ValueChanged { id, .. }
            | Self::LabelChanged { id, .. }
            | Self::MaximumChanged { id, .. } => *id,
        }
    }
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ValueChanged { .. } => EventKind::Value,
            Self::LabelChanged { .. } => EventKind::Label,
            Self::MaximumChanged { .. } => EventKind::Maximum,
        }
    }
}

/// Which events a subscriber wants to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Value,
    Label,
    Maximum,
    All,
}

impl EventKind {
    pub fn accepts(self, kind: EventKind) -> bool {
        self == EventKind::All || self == kind
    }
}

pub trait Listener<V> {
    fn on_event(&mut self, event: &ParameterEvent<V>);
}

impl<V, F> Listener<V> for F
where
    F: FnMut(&ParameterEvent<V>),
{
    fn on_event(&mut self, event: &ParameterEvent<V>) {
        self(event)
    }
}

/// Handle returned by `subscribe`, used to detach the listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

struct Entry<V> {
    handle: Subscription,
    filter: EventKind,
    listener: Box<dyn Listener<V>>,
}

/// Observer list owned by a single parameter. Delivery is synchronous and in subscription order.
pub(crate) struct Observers<V> {
    next: u64,
    entries: Vec<Entry<V>>,
}

impl<V> Observers<V> {
    pub fn new() -> Self {
        Self {
            next: 0,
            entries: vec![],
        }
    }
    pub fn add(&mut self, filter: EventKind, listener: Box<dyn Listener<V>>) -> Subscription {
        let handle = Subscription(self.next);
        self.next += 1;
        self.entries.push(Entry {
            handle,
            filter,
            listener,
        });
        handle
    }
    pub fn remove(&mut self, handle: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        before != self.entries.len()
    }
    pub fn publish(&mut self, event: &ParameterEvent<V>) {
        let kind = event.kind();
        for entry in self.entries.iter_mut().filter(|e| e.filter.accepts(kind)) {
            entry.listener.on_event(event);
        }
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
