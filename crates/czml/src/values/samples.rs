//! Time-tagged sample sequences.

use super::shape::check_finite;
use super::time::{Instant, TimeTag};
use super::{to_reals, Real};
use crate::error::ValueError;

/// One `(time, value)` sample of an interpolatable property.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// When the value holds.
    pub time: TimeTag,
    /// The value's components.
    pub values: Vec<f64>,
}

impl Sample {
    /// A sample at an absolute instant.
    pub fn at<T: Real>(time: impl Into<Instant>, values: impl IntoIterator<Item = T>) -> Self {
        Self {
            time: TimeTag::At(time.into()),
            values: to_reals(values),
        }
    }

    /// A sample at an offset in seconds from the property's epoch.
    pub fn offset<T: Real>(seconds: f64, values: impl IntoIterator<Item = T>) -> Self {
        Self {
            time: TimeTag::Seconds(seconds),
            values: to_reals(values),
        }
    }
}

/// The canonical form of an interpolatable value.
///
/// Samples keep the order they were given in.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    /// One value holding over all time.
    Constant(Vec<f64>),
    /// Explicit samples.
    Tagged(Vec<Sample>),
}

impl Samples {
    /// Reads a flat `[t, v1..vN, t, v1..vN, ...]` list of epoch offsets.
    ///
    /// # Errors
    ///
    /// [`ValueError::Shape`] unless the length is a non-empty multiple of
    /// `arity + 1`; [`ValueError::Invalid`] on a non-finite time.
    pub fn from_flat(values: &[f64], arity: usize) -> Result<Self, ValueError> {
        let stride = arity + 1;
        if values.is_empty() || values.len() % stride != 0 {
            return Err(ValueError::Shape {
                expected: format!("{arity} or a multiple of {stride}"),
                found: values.len(),
            });
        }
        let mut samples = Vec::with_capacity(values.len() / stride);
        for chunk in values.chunks_exact(stride) {
            check_finite(&chunk[..1])?;
            samples.push(Sample {
                time: TimeTag::Seconds(chunk[0]),
                values: chunk[1..].to_vec(),
            });
        }
        Ok(Samples::Tagged(samples))
    }

    /// Number of samples; a constant counts as one.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Samples::Constant(_) => 1,
            Samples::Tagged(samples) => samples.len(),
        }
    }

    /// Always false: a sequence holds at least one sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}
