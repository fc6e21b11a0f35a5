//! Enumerations used by the property catalogue.
//!
//! Each enumeration exists twice: as a static [`Enumeration`] table that the
//! schema compiler reads, and as a Rust enum whose variants callers pass at
//! construction boundaries. Both carry the same raw values.

use core::fmt;

use crate::model::Enumeration;

/// A typed member of an [`Enumeration`].
pub trait Member: Copy {
    /// The table this member belongs to.
    fn enumeration() -> &'static Enumeration;
    /// The raw value emitted in documents.
    fn raw(self) -> &'static str;
}

macro_rules! enumeration {
    ($table:ident, $rust:ident, $label:literal, $desc:literal { $($variant:ident => $raw:literal),+ $(,)? }) => {
        #[doc = $desc]
        pub static $table: Enumeration = Enumeration {
            name: $label,
            description: $desc,
            members: &[$((stringify!($variant), $raw)),+],
        };

        #[doc = $desc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $rust {
            $(
                #[doc = concat!("`", $raw, "`.")]
                $variant,
            )+
        }

        impl Member for $rust {
            fn enumeration() -> &'static Enumeration {
                &$table
            }

            fn raw(self) -> &'static str {
                match self {
                    $($rust::$variant => $raw,)+
                }
            }
        }

        impl fmt::Display for $rust {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.raw())
            }
        }
    };
}

enumeration!(INTERPOLATION_ALGORITHMS, InterpolationAlgorithm, "InterpolationAlgorithms",
    "The interpolation algorithm to use when interpolating." {
    Linear => "LINEAR",
    Lagrange => "LAGRANGE",
    Hermite => "HERMITE",
});

enumeration!(EXTRAPOLATION_TYPES, ExtrapolationType, "ExtrapolationTypes",
    "The type of extrapolation to perform outside the available samples." {
    None => "NONE",
    Hold => "HOLD",
    Extrapolate => "EXTRAPOLATE",
});

enumeration!(REFERENCE_FRAMES, ReferenceFrame, "ReferenceFrames",
    "The reference frame in which cartesian positions are specified." {
    Fixed => "FIXED",
    Inertial => "INERTIAL",
});

enumeration!(LABEL_STYLES, LabelStyle, "LabelStyles", "The style of a label." {
    Fill => "FILL",
    Outline => "OUTLINE",
    FillAndOutline => "FILL_AND_OUTLINE",
});

enumeration!(CLOCK_RANGES, ClockRange, "ClockRanges",
    "The behavior of a clock when its current time reaches its start or end time." {
    Unbounded => "UNBOUNDED",
    Clamped => "CLAMPED",
    LoopStop => "LOOP_STOP",
});

enumeration!(CLOCK_STEPS, ClockStep, "ClockSteps", "How a clock advances each tick." {
    TickDependent => "TICK_DEPENDENT",
    SystemClockMultiplier => "SYSTEM_CLOCK_MULTIPLIER",
    SystemClock => "SYSTEM_CLOCK",
});

enumeration!(VERTICAL_ORIGINS, VerticalOrigin, "VerticalOrigins",
    "The vertical location of an origin relative to an object." {
    Baseline => "BASELINE",
    Bottom => "BOTTOM",
    Center => "CENTER",
    Top => "TOP",
});

enumeration!(HORIZONTAL_ORIGINS, HorizontalOrigin, "HorizontalOrigins",
    "The horizontal location of an origin relative to an object." {
    Left => "LEFT",
    Center => "CENTER",
    Right => "RIGHT",
});

enumeration!(HEIGHT_REFERENCES, HeightReference, "HeightReferences",
    "The height reference of an object." {
    None => "NONE",
    ClampToGround => "CLAMP_TO_GROUND",
    RelativeToGround => "RELATIVE_TO_GROUND",
});

enumeration!(COLOR_BLEND_MODES, ColorBlendMode, "ColorBlendModes",
    "How a model's color blends with the model's rendered color." {
    Highlight => "HIGHLIGHT",
    Replace => "REPLACE",
    Mix => "MIX",
});

enumeration!(SHADOW_MODES, ShadowMode, "ShadowModes",
    "Whether an object casts or receives shadows." {
    Disabled => "DISABLED",
    Enabled => "ENABLED",
    CastOnly => "CAST_ONLY",
    ReceiveOnly => "RECEIVE_ONLY",
});

enumeration!(CLASSIFICATION_TYPES, ClassificationType, "ClassificationTypes",
    "Whether a classification affects terrain, 3D Tiles, or both." {
    Terrain => "TERRAIN",
    Cesium3dTile => "CESIUM_3D_TILE",
    Both => "BOTH",
});

enumeration!(ARC_TYPES, ArcType, "ArcTypes",
    "The type of an arc connecting consecutive positions." {
    None => "NONE",
    Geodesic => "GEODESIC",
    Rhumb => "RHUMB",
});

enumeration!(STRIPE_ORIENTATIONS, StripeOrientation, "StripeOrientations",
    "The orientation of stripes in a stripe material." {
    Horizontal => "HORIZONTAL",
    Vertical => "VERTICAL",
});

/// All enumeration tables, in declaration order.
#[must_use]
pub fn all() -> [&'static Enumeration; 14] {
    [
        &INTERPOLATION_ALGORITHMS,
        &EXTRAPOLATION_TYPES,
        &REFERENCE_FRAMES,
        &LABEL_STYLES,
        &CLOCK_RANGES,
        &CLOCK_STEPS,
        &VERTICAL_ORIGINS,
        &HORIZONTAL_ORIGINS,
        &HEIGHT_REFERENCES,
        &COLOR_BLEND_MODES,
        &SHADOW_MODES,
        &CLASSIFICATION_TYPES,
        &ARC_TYPES,
        &STRIPE_ORIENTATIONS,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_members_map_to_their_table() {
        assert_eq!(HorizontalOrigin::Left.raw(), "LEFT");
        assert!(std::ptr::eq(HorizontalOrigin::enumeration(), &HORIZONTAL_ORIGINS));
        assert_eq!(LabelStyle::FillAndOutline.to_string(), "FILL_AND_OUTLINE");
    }

    #[test]
    fn enumeration_names_are_unique() {
        let mut names = std::collections::HashSet::new();
        for e in all() {
            assert!(names.insert(e.name), "duplicate enumeration {}", e.name);
        }
    }

    #[test]
    fn every_table_lists_its_variants() {
        assert_eq!(INTERPOLATION_ALGORITHMS.members[1], ("Lagrange", "LAGRANGE"));
        assert_eq!(SHADOW_MODES.raw_values().count(), 4);
    }
}
