//! Colors and the materials that fill surfaces and lines.

use crate::enums::STRIPE_ORIENTATIONS;
use crate::model::{Attribute, Capability, Rule, SchemaDefinition};

/// Returns the definitions of this module.
#[must_use]
pub fn definitions() -> Vec<SchemaDefinition> {
    vec![
        color(),
        material(),
        solid_color_material(),
        image_material(),
        grid_material(),
        stripe_material(),
        polyline_material(),
        polyline_outline(),
        polyline_glow(),
        polyline_arrow(),
        polyline_dash(),
    ]
}

fn color_attr(name: &'static str, description: &'static str) -> Attribute {
    Attribute::new(name, "Option<Color>", description)
}

fn color() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "Color",
        description: "A color. The color can optionally vary over time.",
        bases: &[Capability::Deletable, Capability::Interpolatable],
        attributes: vec![
            Attribute::new(
                "rgba",
                "Option<Rgba>",
                "The color specified as an array of color components \
                 [Red, Green, Blue, Alpha] where each component is in the range 0-255.",
            )
            .interpolatable(),
            Attribute::new(
                "rgbaf",
                "Option<Rgbaf>",
                "The color specified as an array of color components \
                 [Red, Green, Blue, Alpha] where each component is in the range 0.0-1.0.",
            )
            .interpolatable(),
            Attribute::new(
                "reference",
                "Option<Reference>",
                "The color specified as a reference to another property.",
            ),
        ],
        rules: &[Rule::Exclusive(&["rgba", "rgbaf", "reference"])],
    }
}

fn material() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "Material",
        description: "A definition of how a surface is colored or shaded.",
        bases: &[],
        attributes: vec![
            Attribute::new(
                "solidColor",
                "Option<SolidColorMaterial>",
                "A material that fills the surface with a solid color.",
            ),
            Attribute::new(
                "image",
                "Option<ImageMaterial>",
                "A material that fills the surface with an image.",
            ),
            Attribute::new(
                "grid",
                "Option<GridMaterial>",
                "A material that fills the surface with a grid.",
            ),
            Attribute::new(
                "stripe",
                "Option<StripeMaterial>",
                "A material that fills the surface with alternating colors.",
            ),
        ],
        rules: &[Rule::Exclusive(&["solidColor", "image", "grid", "stripe"])],
    }
}

fn solid_color_material() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "SolidColorMaterial",
        description: "A material that fills the surface with a solid color.",
        bases: &[],
        attributes: vec![color_attr("color", "The color of the surface.")],
        rules: &[],
    }
}

fn image_material() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "ImageMaterial",
        description: "A material that fills the surface with an image.",
        bases: &[],
        attributes: vec![
            Attribute::new("image", "Uri", "The image to display on the surface.").required(),
            Attribute::new(
                "repeat",
                "Option<Cartesian2>",
                "The number of times the image repeats along each axis.",
            ),
            color_attr("color", "The color of the image."),
            Attribute::new(
                "transparent",
                "Option<bool>",
                "Whether or not the image has transparency.",
            ),
        ],
        rules: &[],
    }
}

fn grid_material() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "GridMaterial",
        description: "A material that fills the surface with a two-dimensional grid.",
        bases: &[],
        attributes: vec![
            color_attr("color", "The color of the surface."),
            Attribute::new(
                "cellAlpha",
                "Option<f64>",
                "The alpha value for the space between grid lines.",
            ),
            Attribute::new(
                "lineCount",
                "Option<Cartesian2>",
                "The number of grid lines along each axis.",
            ),
            Attribute::new(
                "lineThickness",
                "Option<Cartesian2>",
                "The thickness of grid lines along each axis, in pixels.",
            ),
            Attribute::new(
                "lineOffset",
                "Option<Cartesian2>",
                "The offset of grid lines along each axis, as a percentage from 0 to 1.",
            ),
        ],
        rules: &[],
    }
}

fn stripe_material() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "StripeMaterial",
        description: "A material that fills the surface with alternating colors.",
        bases: &[],
        attributes: vec![
            Attribute::enumerated(
                "orientation",
                &STRIPE_ORIENTATIONS,
                "The value indicating if the stripes are horizontal or vertical.",
            ),
            color_attr("evenColor", "The even color."),
            color_attr("oddColor", "The odd color."),
            Attribute::new(
                "offset",
                "Option<f64>",
                "The value indicating where in the pattern to begin drawing.",
            ),
            Attribute::new("repeat", "Option<f64>", "The number of times the stripes repeat."),
        ],
        rules: &[],
    }
}

fn polyline_material() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "PolylineMaterial",
        description: "A definition of how a polyline is colored or shaded.",
        bases: &[],
        attributes: vec![
            Attribute::new(
                "solidColor",
                "Option<SolidColorMaterial>",
                "A material that fills the line with a solid color.",
            ),
            Attribute::new(
                "image",
                "Option<ImageMaterial>",
                "A material that fills the line with an image.",
            ),
            Attribute::new(
                "grid",
                "Option<GridMaterial>",
                "A material that fills the line with a grid.",
            ),
            Attribute::new(
                "stripe",
                "Option<StripeMaterial>",
                "A material that fills the line with alternating colors.",
            ),
            Attribute::new(
                "polylineOutline",
                "Option<PolylineOutline>",
                "A material that fills the line with a color and outline.",
            ),
            Attribute::new(
                "polylineArrow",
                "Option<PolylineArrow>",
                "A material that fills the line with an arrow.",
            ),
            Attribute::new(
                "polylineDash",
                "Option<PolylineDash>",
                "A material that fills the line with a pattern of dashes.",
            ),
            Attribute::new(
                "polylineGlow",
                "Option<PolylineGlow>",
                "A material that fills the line with a glowing color.",
            ),
        ],
        rules: &[Rule::Exclusive(&[
            "solidColor",
            "image",
            "grid",
            "stripe",
            "polylineOutline",
            "polylineArrow",
            "polylineDash",
            "polylineGlow",
        ])],
    }
}

fn polyline_outline() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "PolylineOutline",
        description: "A definition of a polyline outline material.",
        bases: &[],
        attributes: vec![
            color_attr("color", "The color of the surface."),
            color_attr("outlineColor", "The color of the surface outline."),
            Attribute::new(
                "outlineWidth",
                "Option<f64>",
                "The width of the outline, in pixels.",
            ),
        ],
        rules: &[],
    }
}

fn polyline_glow() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "PolylineGlow",
        description: "A definition of a polyline glow material.",
        bases: &[],
        attributes: vec![
            color_attr("color", "The color of the surface."),
            Attribute::new(
                "glowPower",
                "Option<f64>",
                "The strength of the glow, as a percentage of the total line width.",
            ),
            Attribute::new(
                "taperPower",
                "Option<f64>",
                "The strength of the tapering effect, as a percentage of the total line length.",
            ),
        ],
        rules: &[],
    }
}

fn polyline_arrow() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "PolylineArrow",
        description: "A definition of a polyline arrow material.",
        bases: &[],
        attributes: vec![color_attr("color", "The color of the surface.")],
        rules: &[],
    }
}

fn polyline_dash() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "PolylineDash",
        description: "A definition of a polyline dash material.",
        bases: &[],
        attributes: vec![
            color_attr("color", "The color of the dashes on the line."),
            color_attr("gapColor", "The color of the gaps between dashes on the line."),
            Attribute::new(
                "dashLength",
                "Option<f64>",
                "The length in screen-space pixels of a single dash and gap pattern.",
            ),
            Attribute::new(
                "dashPattern",
                "Option<f64>",
                "A 16-bit bitfield representing which portions along a single dash and gap \
                 pattern are dashes and which are gaps.",
            ),
        ],
        rules: &[],
    }
}
