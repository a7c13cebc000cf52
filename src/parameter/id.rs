use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

/// Process-unique identifier used to route and look up parameters across components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);
static LIVE_IDS: OnceLock<Mutex<HashSet<ObjectId>>> = OnceLock::new();

fn live_ids() -> &'static Mutex<HashSet<ObjectId>> {
    LIVE_IDS.get_or_init(|| Mutex::new(HashSet::new()))
}

impl ObjectId {
    /// Allocates an id which is not held by any live parameter.
    pub fn next() -> Self {
        let live = live_ids().lock().unwrap_or_else(PoisonError::into_inner);
        loop {
            let id = Self(NEXT_ID.fetch_add(1, Ordering::Relaxed));
            if !live.contains(&id) {
                return id;
            }
        }
    }
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Claims `id` for a live parameter.
/// Panics when the id is already held: two parameters sharing one id is a programming error.
pub(crate) fn register(id: ObjectId) {
    let inserted = live_ids()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(id);
    assert!(inserted, "parameter id {} is already in use", id);
}

pub(crate) fn release(id: ObjectId) {
    live_ids()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(&id);
}

pub fn is_live(id: ObjectId) -> bool {
    live_ids()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .contains(&id)
}
