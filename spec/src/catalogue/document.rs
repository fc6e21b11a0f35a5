//! Packet, preamble and clock definitions.

use crate::enums::{CLOCK_RANGES, CLOCK_STEPS};
use crate::model::{Attribute, DefaultValue, SchemaDefinition};

/// The document format version written into every preamble.
pub const CZML_VERSION: &str = "1.0";

/// Returns the definitions of this module.
#[must_use]
pub fn definitions() -> Vec<SchemaDefinition> {
    vec![packet(), preamble(), clock()]
}

fn packet() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "Packet",
        description: "A packet describes the graphical properties of a single object in \
                      the scene, such as a single aircraft.",
        bases: &[],
        attributes: vec![
            Attribute::new(
                "id",
                "Option<String>",
                "The ID of the object described by this packet.",
            ),
            Attribute::new(
                "delete",
                "Option<bool>",
                "Whether the client should delete all existing data for this object.",
            ),
            Attribute::new("name", "Option<String>", "The name of the object."),
            Attribute::new(
                "parent",
                "Option<String>",
                "The ID of the parent object, if any.",
            ),
            Attribute::new(
                "description",
                "Option<String>",
                "An HTML description of the object.",
            ),
            Attribute::new(
                "availability",
                "Option<TimeInterval>",
                "The set of time intervals over which data for an object is available.",
            ),
            Attribute::new(
                "properties",
                "Option<Properties>",
                "A set of custom properties for this object.",
            ),
            Attribute::new("position", "Option<Position>", "The position of the object."),
            Attribute::new(
                "orientation",
                "Option<Orientation>",
                "The orientation of the object in the world.",
            ),
            Attribute::new(
                "viewFrom",
                "Option<ViewFrom>",
                "A suggested initial camera position offset when tracking this object.",
            ),
            Attribute::new(
                "billboard",
                "Option<Billboard>",
                "A billboard, or viewport-aligned image, sometimes called a marker.",
            ),
            Attribute::new("box", "Option<Box>", "A box, a closed rectangular cuboid."),
            Attribute::new(
                "ellipsoid",
                "Option<Ellipsoid>",
                "An ellipsoid, a closed quadric surface.",
            ),
            Attribute::new("label", "Option<Label>", "A string of text."),
            Attribute::new("model", "Option<Model>", "A 3D model."),
            Attribute::new(
                "path",
                "Option<Path>",
                "A path, a polyline defined by the motion of an object over time.",
            ),
            Attribute::new("point", "Option<Point>", "A point, or viewport-aligned circle."),
            Attribute::new(
                "polygon",
                "Option<Polygon>",
                "A polygon, a closed figure on the surface of the Earth.",
            ),
            Attribute::new(
                "polyline",
                "Option<Polyline>",
                "A polyline, a line in the scene composed of multiple segments.",
            ),
            Attribute::new(
                "rectangle",
                "Option<Rectangle>",
                "A cartographic rectangle which conforms to the curvature of the globe.",
            ),
        ],
        rules: &[],
    }
}

fn preamble() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "Preamble",
        description: "The preamble packet, which must be the first packet of a document.",
        bases: &[],
        attributes: vec![
            Attribute::new("id", "String", "The ID of the preamble packet.")
                .default(DefaultValue::Str("document")),
            Attribute::new("version", "String", "The document format version.")
                .default(DefaultValue::Str(CZML_VERSION)),
            Attribute::new("name", "Option<String>", "The name of the document."),
            Attribute::new(
                "description",
                "Option<String>",
                "The description of the document.",
            ),
            Attribute::new(
                "clock",
                "Option<Clock>",
                "The clock settings for the entire data set.",
            ),
        ],
        rules: &[],
    }
}

fn clock() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "Clock",
        description: "Initial settings for a simulated clock when a document is loaded.",
        bases: &[],
        attributes: vec![
            Attribute::new(
                "interval",
                "Option<TimeInterval>",
                "The interval over which the clock is defined.",
            ),
            Attribute::new(
                "currentTime",
                "Option<Instant>",
                "The current time of the clock.",
            ),
            Attribute::new(
                "multiplier",
                "Option<f64>",
                "The multiplier: seconds of scene time per tick or per second of wall time.",
            ),
            Attribute::enumerated(
                "range",
                &CLOCK_RANGES,
                "The behavior when the current time reaches its start or end times.",
            ),
            Attribute::enumerated(
                "step",
                &CLOCK_STEPS,
                "How the current time advances each tick.",
            ),
        ],
        rules: &[],
    }
}
