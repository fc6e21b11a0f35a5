//! Positions, orientations and the shapes built on them.

use crate::enums::REFERENCE_FRAMES;
use crate::model::{Attribute, Capability, Rule, SchemaDefinition};

/// Returns the definitions of this module.
#[must_use]
pub fn definitions() -> Vec<SchemaDefinition> {
    vec![
        position(),
        position_list(),
        orientation(),
        view_from(),
        cartesian_only("BoxDimensions", "The width, depth, and height of a box."),
        cartesian_only("EllipsoidRadii", "The radii of an ellipsoid."),
        rectangle_coordinates(),
    ]
}

fn reference(description: &'static str) -> Attribute {
    Attribute::new("reference", "Option<Reference>", description)
}

fn position() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "Position",
        description: "Defines a position. The position can optionally vary over time.",
        bases: &[Capability::Deletable, Capability::Interpolatable],
        attributes: vec![
            Attribute::enumerated(
                "referenceFrame",
                &REFERENCE_FRAMES,
                "The reference frame in which cartesian positions are specified.",
            ),
            Attribute::new(
                "cartesian",
                "Option<czml::values::Cartesian3>",
                "The position specified as a three-dimensional Cartesian value, in meters.",
            )
            .interpolatable(),
            Attribute::new(
                "cartographicRadians",
                "Option<czml::values::CartographicRadians>",
                "The position specified in cartographic WGS84 coordinates, \
                 [Longitude, Latitude, Height], in radians and meters.",
            )
            .interpolatable(),
            Attribute::new(
                "cartographicDegrees",
                "Option<czml::values::CartographicDegrees>",
                "The position specified in cartographic WGS84 coordinates, \
                 [Longitude, Latitude, Height], in degrees and meters.",
            )
            .interpolatable(),
            reference("The position specified as a reference to another property."),
        ],
        rules: &[Rule::Exclusive(&[
            "cartesian",
            "cartographicRadians",
            "cartographicDegrees",
            "reference",
        ])],
    }
}

fn position_list() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "PositionList",
        description: "A list of positions.",
        bases: &[Capability::Deletable],
        attributes: vec![
            Attribute::enumerated(
                "referenceFrame",
                &REFERENCE_FRAMES,
                "The reference frame in which cartesian positions are specified.",
            ),
            Attribute::new(
                "cartesian",
                "Option<CartesianList>",
                "The list of positions specified as three-dimensional Cartesian values.",
            ),
            Attribute::new(
                "cartographicRadians",
                "Option<CartographicRadiansList>",
                "The list of positions specified in cartographic WGS84 coordinates, in radians.",
            ),
            Attribute::new(
                "cartographicDegrees",
                "Option<CartographicDegreesList>",
                "The list of positions specified in cartographic WGS84 coordinates, in degrees.",
            ),
        ],
        rules: &[Rule::Exclusive(&[
            "cartesian",
            "cartographicRadians",
            "cartographicDegrees",
        ])],
    }
}

fn orientation() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "Orientation",
        description: "Defines an orientation. An orientation is a rotation that takes a \
                      vector expressed in the axes of the body and transforms it to the \
                      Earth fixed axes.",
        bases: &[Capability::Deletable, Capability::Interpolatable],
        attributes: vec![
            Attribute::new(
                "unitQuaternion",
                "Option<UnitQuaternion>",
                "The orientation specified as a 4-dimensional unit magnitude quaternion, \
                 [X, Y, Z, W].",
            )
            .interpolatable(),
            reference("The orientation specified as a reference to another property."),
            Attribute::new(
                "velocityReference",
                "Option<Reference>",
                "The orientation specified as the normalized velocity vector of a position \
                 property.",
            ),
        ],
        rules: &[Rule::Exclusive(&[
            "unitQuaternion",
            "reference",
            "velocityReference",
        ])],
    }
}

fn view_from() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "ViewFrom",
        description: "A suggested initial camera position offset when tracking an object, \
                      specified as a Cartesian position in the East (x), North (y), Up (z) \
                      reference frame relative to the object's position.",
        bases: &[Capability::Deletable, Capability::Interpolatable],
        attributes: vec![
            Attribute::new(
                "cartesian",
                "Option<Cartesian3>",
                "The offset specified as a three-dimensional Cartesian value.",
            )
            .interpolatable(),
            reference("The offset specified as a reference to another property."),
        ],
        rules: &[Rule::Exclusive(&["cartesian", "reference"])],
    }
}

fn cartesian_only(class_name: &'static str, description: &'static str) -> SchemaDefinition {
    SchemaDefinition {
        class_name,
        description,
        bases: &[Capability::Deletable, Capability::Interpolatable],
        attributes: vec![
            Attribute::new(
                "cartesian",
                "Option<Cartesian3>",
                "The value specified as a three-dimensional Cartesian value.",
            )
            .interpolatable(),
            reference("The value specified as a reference to another property."),
        ],
        rules: &[Rule::Exclusive(&["cartesian", "reference"])],
    }
}

fn rectangle_coordinates() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "RectangleCoordinates",
        description: "A set of coordinates describing a cartographic rectangle on the \
                      surface of the ellipsoid.",
        bases: &[Capability::Deletable, Capability::Interpolatable],
        attributes: vec![
            Attribute::new(
                "wsen",
                "Option<Wsen>",
                "The set of coordinates specified as Cartographic values \
                 [WestLongitude, SouthLatitude, EastLongitude, NorthLatitude], in radians.",
            )
            .interpolatable(),
            Attribute::new(
                "wsenDegrees",
                "Option<WsenDegrees>",
                "The set of coordinates specified as Cartographic values \
                 [WestLongitude, SouthLatitude, EastLongitude, NorthLatitude], in degrees.",
            )
            .interpolatable(),
            reference("The set of coordinates specified as a reference to another property."),
        ],
        rules: &[Rule::OneOf(&["wsen", "wsenDegrees", "reference"])],
    }
}
