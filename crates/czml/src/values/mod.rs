//! Canonical value types.
//!
//! Every value a field can hold is normalized into one of these
//! representations at construction: numbers become `f64`, fixed-arity
//! tuples are checked against their [`TupleShape`], instants are validated,
//! and interpolatable values become [`Samples`].

pub mod color;
pub mod samples;
pub mod shape;
pub mod time;

pub use color::{ColorArg, ColorValue, Rgba, Rgbaf};
pub use samples::{Sample, Samples};
pub use shape::{ListShape, TupleShape};
pub use time::{Instant, TimeInterval, TimeTag};

/// A real number accepted at the input boundary.
///
/// Integer and single-precision inputs are widened to `f64`; every stored
/// number is an `f64`.
pub trait Real: Copy {
    /// Widens the value to `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! real {
    ($($t:ty),* $(,)?) => {
        $(
            impl Real for $t {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

real!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Widens a collection of reals to `f64`, keeping order.
pub fn to_reals<T: Real>(values: impl IntoIterator<Item = T>) -> Vec<f64> {
    values.into_iter().map(Real::to_f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_widen_to_floats() {
        assert_eq!(to_reals([-114, 40, 300_000]), vec![-114.0, 40.0, 300_000.0]);
        assert_eq!(to_reals([1u8, 2u8]), vec![1.0, 2.0]);
    }
}
