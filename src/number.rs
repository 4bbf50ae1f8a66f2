use std::fmt::Debug;

/// Numeric answer types the bus can sum, min and max over.
///
/// `ZERO` is the value returned when nobody answers.
pub trait Number: Copy + PartialOrd + Debug + Send + Sync + 'static {
    const ZERO: Self;

    /// Add two answers. Integers wrap on overflow in every build profile.
    fn accumulate(self, other: Self) -> Self;
}

macro_rules! impl_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Number for $ty {
                const ZERO: Self = 0;

                fn accumulate(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }
            }
        )+
    };
}

macro_rules! impl_float {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Number for $ty {
                const ZERO: Self = 0.0;

                fn accumulate(self, other: Self) -> Self {
                    self + other
                }
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);
