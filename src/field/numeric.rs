/// Arithmetic value types that support range fields and stepping.
pub trait Numeric: Copy + PartialOrd {
    /// `self + delta`, saturating at the type's bounds for integers.
    fn step_up(self, delta: Self) -> Self;
    /// `self - delta`, saturating at the type's bounds for integers.
    fn step_down(self, delta: Self) -> Self;
}

/// Generates [`Numeric`] for integer types using saturating arithmetic.
macro_rules! impl_numeric_int {
    ($($type:ty),* $(,)?) => {
        $(
            paste::paste! {
                #[doc = "Saturating steps for `" $type "`."]
                impl Numeric for $type {
                    #[inline]
                    fn step_up(self, delta: Self) -> Self {
                        self.saturating_add(delta)
                    }

                    #[inline]
                    fn step_down(self, delta: Self) -> Self {
                        self.saturating_sub(delta)
                    }
                }
            }
        )*
    };
}

/// Generates [`Numeric`] for IEEE-754 types; overflow already saturates to infinity.
macro_rules! impl_numeric_float {
    ($($type:ty),* $(,)?) => {
        $(
            paste::paste! {
                #[doc = "IEEE-754 steps for `" $type "`."]
                impl Numeric for $type {
                    #[inline]
                    fn step_up(self, delta: Self) -> Self {
                        self + delta
                    }

                    #[inline]
                    fn step_down(self, delta: Self) -> Self {
                        self - delta
                    }
                }
            }
        )*
    };
}

impl_numeric_int!(u8, i8, u16, i16, u32, i32, u64, i64);
impl_numeric_float!(f32, f64);
