//! Graphical primitives attached to packets.

use super::{distance_display_condition, show};
use crate::enums::{
    ARC_TYPES, CLASSIFICATION_TYPES, COLOR_BLEND_MODES, HEIGHT_REFERENCES, LABEL_STYLES,
    SHADOW_MODES,
};
use crate::model::{Attribute, Capability, SchemaDefinition};

/// Returns the definitions of this module.
#[must_use]
pub fn definitions() -> Vec<SchemaDefinition> {
    vec![
        billboard(),
        label(),
        point(),
        path(),
        polyline(),
        polygon(),
        box_(),
        ellipsoid(),
        rectangle(),
        model(),
    ]
}

fn number(name: &'static str, description: &'static str) -> Attribute {
    Attribute::new(name, "Option<f64>", description)
}

fn flag(name: &'static str, description: &'static str) -> Attribute {
    Attribute::new(name, "Option<bool>", description)
}

fn color(name: &'static str, description: &'static str) -> Attribute {
    Attribute::new(name, "Option<Color>", description)
}

fn height_reference() -> Attribute {
    Attribute::enumerated(
        "heightReference",
        &HEIGHT_REFERENCES,
        "The height reference of the object, which indicates if the position is relative \
         to terrain or not.",
    )
}

fn shadows() -> Attribute {
    Attribute::enumerated(
        "shadows",
        &SHADOW_MODES,
        "Whether or not the object casts or receives shadows from each light source.",
    )
}

fn classification_type() -> Attribute {
    Attribute::enumerated(
        "classificationType",
        &CLASSIFICATION_TYPES,
        "Whether a classification affects terrain, 3D Tiles, or both.",
    )
}

/// The fill, material and outline attributes shared by closed shapes.
fn surface() -> Vec<Attribute> {
    vec![
        flag("fill", "Whether or not the object is filled."),
        Attribute::new(
            "material",
            "Option<Material>",
            "The material to display on the surface of the object.",
        ),
        flag("outline", "Whether or not the object is outlined."),
        color("outlineColor", "The color of the outline."),
        number("outlineWidth", "The width of the outline."),
    ]
}

fn billboard() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "Billboard",
        description: "A billboard, or viewport-aligned image.",
        bases: &[Capability::Aligned],
        attributes: vec![
            show(),
            Attribute::new("image", "Option<Uri>", "The URI of the image displayed on the billboard."),
            number("scale", "The scale of the billboard."),
            Attribute::new(
                "pixelOffset",
                "Option<Cartesian2>",
                "The billboard's pixel offset in screen space from the origin of this billboard.",
            ),
            Attribute::new(
                "eyeOffset",
                "Option<Cartesian3>",
                "The billboard's offset in eye coordinates.",
            ),
            height_reference(),
            color("color", "The color of the billboard, multiplied with the image."),
            number("rotation", "The rotation of the billboard, in radians, counter-clockwise."),
            number("width", "The width of the billboard, in pixels."),
            number("height", "The height of the billboard, in pixels."),
            Attribute::new(
                "scaleByDistance",
                "Option<NearFarScalar>",
                "How the billboard's scale should change based on the distance from the camera.",
            ),
            Attribute::new(
                "imageSubRegion",
                "Option<BoundingRectangle>",
                "A sub-region of the image which will be used for the billboard.",
            ),
            distance_display_condition(),
        ],
        rules: &[],
    }
}

fn label() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "Label",
        description: "A string of text.",
        bases: &[Capability::Aligned],
        attributes: vec![
            show(),
            Attribute::new("text", "Option<String>", "The text displayed by the label."),
            Attribute::new("font", "Option<String>", "The font to use for the label."),
            Attribute::enumerated(
                "style",
                &LABEL_STYLES,
                "The style of the label.",
            ),
            number("scale", "The scale of the label."),
            flag("showBackground", "Whether or not a background behind the label is shown."),
            color("backgroundColor", "The color of the background behind the label."),
            Attribute::new(
                "pixelOffset",
                "Option<Cartesian2>",
                "The label's pixel offset in screen space from the origin of this label.",
            ),
            Attribute::new(
                "eyeOffset",
                "Option<Cartesian3>",
                "The label's offset in eye coordinates.",
            ),
            height_reference(),
            color("fillColor", "The fill color of the label."),
            color("outlineColor", "The outline color of the label."),
            number("outlineWidth", "The outline width of the label."),
            Attribute::new(
                "translucencyByDistance",
                "Option<NearFarScalar>",
                "How the label's translucency should change based on the distance from the camera.",
            ),
            distance_display_condition(),
        ],
        rules: &[],
    }
}

fn point() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "Point",
        description: "A point, or viewport-aligned circle.",
        bases: &[],
        attributes: vec![
            show(),
            number("pixelSize", "The size of the point, in pixels."),
            height_reference(),
            color("color", "The color of the point."),
            color("outlineColor", "The color of the outline of the point."),
            number("outlineWidth", "The width of the outline of the point."),
            Attribute::new(
                "scaleByDistance",
                "Option<NearFarScalar>",
                "How the point's scale should change based on the distance from the camera.",
            ),
            Attribute::new(
                "translucencyByDistance",
                "Option<NearFarScalar>",
                "How the point's translucency should change based on the distance from the camera.",
            ),
            distance_display_condition(),
        ],
        rules: &[],
    }
}

fn path() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "Path",
        description: "A path, which is a polyline defined by the motion of an object over time.",
        bases: &[],
        attributes: vec![
            show(),
            number(
                "leadTime",
                "The number of seconds in front of the object to show the path.",
            ),
            number(
                "trailTime",
                "The number of seconds behind the object to show the path.",
            ),
            number("width", "The width of the path line."),
            number(
                "resolution",
                "The maximum step-size, in seconds, used to sample the path.",
            ),
            Attribute::new(
                "material",
                "Option<PolylineMaterial>",
                "The material to use to draw the path.",
            ),
            distance_display_condition(),
        ],
        rules: &[],
    }
}

fn polyline() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "Polyline",
        description: "A polyline, which is a line in the scene composed of multiple segments.",
        bases: &[],
        attributes: vec![
            show(),
            Attribute::new(
                "positions",
                "PositionList",
                "The array of positions defining the polyline as a line strip.",
            )
            .required(),
            Attribute::enumerated(
                "arcType",
                &ARC_TYPES,
                "The type of arc that should connect the positions of the line.",
            ),
            number("width", "The width of the polyline."),
            number(
                "granularity",
                "The sampling distance, in radians, if arcType is not NONE.",
            ),
            Attribute::new(
                "material",
                "Option<PolylineMaterial>",
                "The material to use to draw the polyline.",
            ),
            shadows(),
            Attribute::new(
                "depthFailMaterial",
                "Option<PolylineMaterial>",
                "The material to use to draw the polyline when it is below the terrain.",
            ),
            distance_display_condition(),
            flag(
                "clampToGround",
                "Whether or not the polyline should be clamped to the ground.",
            ),
            classification_type(),
            number(
                "zIndex",
                "The z-index of the polyline, used for ordering ground geometry.",
            ),
        ],
        rules: &[],
    }
}

fn polygon() -> SchemaDefinition {
    let mut attributes = vec![
        show(),
        Attribute::new(
            "positions",
            "PositionList",
            "The array of positions defining a simple polygon.",
        )
        .required(),
        Attribute::enumerated(
            "arcType",
            &ARC_TYPES,
            "The type of arc that should connect the positions of the polygon.",
        ),
        number("height", "The height of the polygon when perPositionHeight is false."),
        height_reference(),
        number("extrudedHeight", "The extruded height of the polygon."),
        number(
            "stRotation",
            "The rotation of any applied texture coordinates.",
        ),
        number(
            "granularity",
            "The sampling distance, in radians.",
        ),
    ];
    attributes.extend(surface());
    attributes.extend([
        flag(
            "perPositionHeight",
            "Whether to use the height of each position to define the polygon.",
        ),
        flag("closeTop", "Whether to close the top of the polygon when extruded."),
        flag(
            "closeBottom",
            "Whether to close the bottom of the polygon when extruded.",
        ),
        shadows(),
        distance_display_condition(),
        classification_type(),
        number("zIndex", "The z-index of the polygon."),
    ]);
    SchemaDefinition {
        class_name: "Polygon",
        description: "A polygon, which is a closed figure on the surface of the Earth.",
        bases: &[],
        attributes,
        rules: &[],
    }
}

fn box_() -> SchemaDefinition {
    let mut attributes = vec![
        show(),
        Attribute::new(
            "dimensions",
            "Option<BoxDimensions>",
            "The dimensions of the box.",
        ),
        height_reference(),
    ];
    attributes.extend(surface());
    attributes.extend([shadows(), distance_display_condition()]);
    SchemaDefinition {
        class_name: "Box",
        description: "A box, which is a closed rectangular cuboid.",
        bases: &[],
        attributes,
        rules: &[],
    }
}

fn ellipsoid() -> SchemaDefinition {
    let mut attributes = vec![
        show(),
        Attribute::new(
            "radii",
            "EllipsoidRadii",
            "The dimensions of the ellipsoid.",
        )
        .required(),
        Attribute::new(
            "innerRadii",
            "Option<EllipsoidRadii>",
            "The dimensions of the inner ellipsoid.",
        ),
        height_reference(),
    ];
    attributes.extend(surface());
    attributes.extend([
        number(
            "stackPartitions",
            "The number of times to partition the ellipsoid into stacks.",
        ),
        number(
            "slicePartitions",
            "The number of times to partition the ellipsoid into radial slices.",
        ),
        number(
            "subdivisions",
            "The number of samples per outline ring.",
        ),
        shadows(),
        distance_display_condition(),
    ]);
    SchemaDefinition {
        class_name: "Ellipsoid",
        description: "A closed quadric surface that is a three-dimensional analogue of an ellipse.",
        bases: &[],
        attributes,
        rules: &[],
    }
}

fn rectangle() -> SchemaDefinition {
    let mut attributes = vec![
        show(),
        Attribute::new(
            "coordinates",
            "Option<RectangleCoordinates>",
            "The coordinates of the rectangle.",
        ),
        number("height", "The height of the rectangle."),
        height_reference(),
        number("extrudedHeight", "The extruded height of the rectangle."),
        number("rotation", "The rotation of the rectangle, clockwise from north."),
        number("stRotation", "The rotation of any applied texture."),
        number("granularity", "The sampling distance, in radians."),
    ];
    attributes.extend(surface());
    attributes.extend([
        shadows(),
        distance_display_condition(),
        classification_type(),
        number("zIndex", "The z-index of the rectangle."),
    ]);
    SchemaDefinition {
        class_name: "Rectangle",
        description: "A cartographic rectangle, which conforms to the curvature of the globe \
                      and can be placed on the surface or at altitude.",
        bases: &[],
        attributes,
        rules: &[],
    }
}

fn model() -> SchemaDefinition {
    SchemaDefinition {
        class_name: "Model",
        description: "A 3D model.",
        bases: &[],
        attributes: vec![
            show(),
            Attribute::new("gltf", "Uri", "The URI of a glTF model.").required(),
            number("scale", "The scale of the model."),
            number(
                "minimumPixelSize",
                "The approximate minimum pixel size of the model regardless of zoom.",
            ),
            number("maximumScale", "The maximum scale size of the model."),
            flag(
                "incrementallyLoadTextures",
                "Whether or not the model can be rendered before all textures have loaded.",
            ),
            flag(
                "runAnimations",
                "Whether or not to run all animations defined in the glTF model.",
            ),
            shadows(),
            height_reference(),
            color("silhouetteColor", "The color of the silhouette drawn around the model."),
            number("silhouetteSize", "The size, in pixels, of the silhouette."),
            color("color", "The color to blend with the model's rendered color."),
            Attribute::enumerated(
                "colorBlendMode",
                &COLOR_BLEND_MODES,
                "The mode to use for blending between color and the model's color.",
            ),
            number(
                "colorBlendAmount",
                "The color strength when colorBlendMode is MIX.",
            ),
            distance_display_condition(),
        ],
        rules: &[],
    }
}
