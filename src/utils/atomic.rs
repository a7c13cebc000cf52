//! Plain atomic primitives shared between the UI thread and readers on other threads.
//! Every load/store uses relaxed ordering: each cell is an independent value, nothing else is published through it.

use std::sync::atomic;

pub trait SimpleAtomic<T>
where
    T: Copy,
{
    const ORDER: atomic::Ordering = atomic::Ordering::Relaxed;
    fn load(&self) -> T;
    fn store(&self, v: T);
}

macro_rules! impl_simple_atomic {
    ($name:ident,$p:ty,$a:ty) => {
        pub struct $name($a);

        impl $name {
            pub fn new(v: $p) -> Self {
                Self(<$a>::new(v))
            }
        }
        impl SimpleAtomic<$p> for $name {
            fn load(&self) -> $p {
                self.0.load(Self::ORDER)
            }
            fn store(&self, v: $p) {
                self.0.store(v, Self::ORDER)
            }
        }
        impl From<$p> for $name {
            fn from(v: $p) -> Self {
                Self::new(v)
            }
        }
        impl Clone for $name {
            fn clone(&self) -> Self {
                Self::new(self.load())
            }
        }
        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.load())
            }
        }
    };
}

impl_simple_atomic!(Bool, bool, atomic::AtomicBool);
impl_simple_atomic!(F64, f64, atomic_float::AtomicF64);

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn boolean() {
        let t = Bool::from(true);
        assert!(t.load());
        t.store(false);
        assert!(!t.load());
    }
    #[test]
    fn float_clone_is_a_snapshot() {
        let a = F64::new(0.25);
        let b = a.clone();
        a.store(0.75);
        assert_eq!(b.load(), 0.25);
        assert_eq!(a.load(), 0.75);
    }
    #[test]
    fn debug_shows_value() {
        assert_eq!(format!("{:?}", F64::new(0.5)), "F64(0.5)");
        assert_eq!(format!("{:?}", Bool::new(false)), "Bool(false)");
    }
}
