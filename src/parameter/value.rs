/// Numeric types a [`super::Parameter`] can hold.
pub trait ParameterValue: Copy + PartialOrd + std::fmt::Debug + 'static {
    const ZERO: Self;
    fn to_f64(self) -> f64;
    /// Clamps into `lower..=upper`. When the bounds cross, `upper` wins.
    fn clamp_between(self, lower: Self, upper: Self) -> Self;
}

macro_rules! impl_integer_value {
    ($($t:ty),*) => {$(
        impl ParameterValue for $t {
            const ZERO: Self = 0;
            fn to_f64(self) -> f64 {
                self as f64
            }
            fn clamp_between(self, lower: Self, upper: Self) -> Self {
                self.max(lower).min(upper)
            }
        }
    )*};
}

macro_rules! impl_float_value {
    ($($t:ty),*) => {$(
        impl ParameterValue for $t {
            const ZERO: Self = 0.0;
            fn to_f64(self) -> f64 {
                self as f64
            }
            // NaN collapses onto the lower bound so an enforced parameter never stores it.
            fn clamp_between(self, lower: Self, upper: Self) -> Self {
                if self.is_nan() {
                    return lower.min(upper);
                }
                self.max(lower).min(upper)
            }
        }
    )*};
}

impl_integer_value!(i32, i64, u32, u64);
impl_float_value!(f32, f64);
