//! Fixed-arity tuples and flat coordinate lists.

use super::color::{Rgba, Rgbaf};
use crate::error::ValueError;

/// A fixed-arity numeric tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TupleShape {
    /// `[X, Y]`.
    Cartesian2,
    /// `[X, Y, Z]`.
    Cartesian3,
    /// `[Longitude, Latitude, Height]` in degrees.
    CartographicDegrees,
    /// `[Longitude, Latitude, Height]` in radians.
    CartographicRadians,
    /// `[X, Y, Z, W]` with a non-zero norm.
    UnitQuaternion,
    /// `[Red, Green, Blue, Alpha]`, integral channels in 0..=255.
    Rgba,
    /// `[Red, Green, Blue, Alpha]`, channels in 0.0..=1.0.
    Rgbaf,
    /// `[NearDistance, NearValue, FarDistance, FarValue]`.
    NearFarScalar,
    /// `[Near, Far]`.
    DistanceDisplayCondition,
    /// `[X, Y, Width, Height]`.
    BoundingRectangle,
    /// `[West, South, East, North]` in radians.
    Wsen,
    /// `[West, South, East, North]` in degrees.
    WsenDegrees,
}

impl TupleShape {
    /// All shapes.
    pub const ALL: [TupleShape; 12] = [
        TupleShape::Cartesian2,
        TupleShape::Cartesian3,
        TupleShape::CartographicDegrees,
        TupleShape::CartographicRadians,
        TupleShape::UnitQuaternion,
        TupleShape::Rgba,
        TupleShape::Rgbaf,
        TupleShape::NearFarScalar,
        TupleShape::DistanceDisplayCondition,
        TupleShape::BoundingRectangle,
        TupleShape::Wsen,
        TupleShape::WsenDegrees,
    ];

    /// Resolves a bare type name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// The type name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TupleShape::Cartesian2 => "Cartesian2",
            TupleShape::Cartesian3 => "Cartesian3",
            TupleShape::CartographicDegrees => "CartographicDegrees",
            TupleShape::CartographicRadians => "CartographicRadians",
            TupleShape::UnitQuaternion => "UnitQuaternion",
            TupleShape::Rgba => "Rgba",
            TupleShape::Rgbaf => "Rgbaf",
            TupleShape::NearFarScalar => "NearFarScalar",
            TupleShape::DistanceDisplayCondition => "DistanceDisplayCondition",
            TupleShape::BoundingRectangle => "BoundingRectangle",
            TupleShape::Wsen => "Wsen",
            TupleShape::WsenDegrees => "WsenDegrees",
        }
    }

    /// Number of components.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            TupleShape::Cartesian2 | TupleShape::DistanceDisplayCondition => 2,
            TupleShape::Cartesian3
            | TupleShape::CartographicDegrees
            | TupleShape::CartographicRadians => 3,
            TupleShape::UnitQuaternion
            | TupleShape::Rgba
            | TupleShape::Rgbaf
            | TupleShape::NearFarScalar
            | TupleShape::BoundingRectangle
            | TupleShape::Wsen
            | TupleShape::WsenDegrees => 4,
        }
    }

    /// The key the value is emitted under inside an interval.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            TupleShape::Cartesian2 => "cartesian2",
            TupleShape::Cartesian3 => "cartesian",
            TupleShape::CartographicDegrees => "cartographicDegrees",
            TupleShape::CartographicRadians => "cartographicRadians",
            TupleShape::UnitQuaternion => "unitQuaternion",
            TupleShape::Rgba => "rgba",
            TupleShape::Rgbaf => "rgbaf",
            TupleShape::NearFarScalar => "nearFarScalar",
            TupleShape::DistanceDisplayCondition => "distanceDisplayCondition",
            TupleShape::BoundingRectangle => "boundingRectangle",
            TupleShape::Wsen => "wsen",
            TupleShape::WsenDegrees => "wsenDegrees",
        }
    }

    /// Checks one tuple's length and domain.
    ///
    /// # Errors
    ///
    /// [`ValueError::Shape`] on a wrong length, [`ValueError::Invalid`] on a
    /// non-finite component or a value outside the shape's domain.
    pub fn check(self, values: &[f64]) -> Result<(), ValueError> {
        if values.len() != self.arity() {
            return Err(ValueError::Shape {
                expected: self.arity().to_string(),
                found: values.len(),
            });
        }
        check_finite(values)?;
        match self {
            TupleShape::Rgba if !Rgba::is_valid(values) => Err(ValueError::Invalid(format!(
                "rgba channels must be integers in 0..=255, got {values:?}"
            ))),
            TupleShape::Rgbaf if !Rgbaf::is_valid(values) => Err(ValueError::Invalid(format!(
                "rgbaf channels must be in 0.0..=1.0, got {values:?}"
            ))),
            TupleShape::UnitQuaternion if values.iter().all(|v| *v == 0.0) => Err(
                ValueError::Invalid("a unit quaternion needs a non-zero norm".to_owned()),
            ),
            _ => Ok(()),
        }
    }
}

/// A flat list of coordinate triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListShape {
    /// `[X, Y, Z, X, Y, Z, ...]`.
    Cartesian,
    /// `[Longitude, Latitude, Height, ...]` in degrees.
    CartographicDegrees,
    /// `[Longitude, Latitude, Height, ...]` in radians.
    CartographicRadians,
}

impl ListShape {
    /// All list shapes.
    pub const ALL: [ListShape; 3] = [
        ListShape::Cartesian,
        ListShape::CartographicDegrees,
        ListShape::CartographicRadians,
    ];

    /// Resolves a bare type name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// The type name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ListShape::Cartesian => "CartesianList",
            ListShape::CartographicDegrees => "CartographicDegreesList",
            ListShape::CartographicRadians => "CartographicRadiansList",
        }
    }

    /// Numbers per element.
    #[must_use]
    pub fn stride(self) -> usize {
        3
    }

    /// The key the value is emitted under inside an interval.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ListShape::Cartesian => "cartesian",
            ListShape::CartographicDegrees => "cartographicDegrees",
            ListShape::CartographicRadians => "cartographicRadians",
        }
    }

    /// Checks the list's length and that every component is finite.
    ///
    /// # Errors
    ///
    /// [`ValueError::Shape`] unless the length is a non-empty multiple of the
    /// stride; [`ValueError::Invalid`] on a non-finite component.
    pub fn check(self, values: &[f64]) -> Result<(), ValueError> {
        if values.is_empty() || values.len() % self.stride() != 0 {
            return Err(ValueError::Shape {
                expected: format!("a non-empty multiple of {}", self.stride()),
                found: values.len(),
            });
        }
        check_finite(values)
    }
}

pub(crate) fn check_finite(values: &[f64]) -> Result<(), ValueError> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(v) => Err(ValueError::Invalid(format!("{v} is not a finite number"))),
        None => Ok(()),
    }
}
