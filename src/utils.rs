//! Misc utilities such as atomic primitives and the logger.
pub mod atomic;
pub mod logger;

pub use self::atomic::SimpleAtomic;
