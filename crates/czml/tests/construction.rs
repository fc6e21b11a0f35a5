//! Construction and validation of value classes through the standard
//! registry.

use czml::enums::{HorizontalOrigin, InterpolationAlgorithm, LabelStyle};
use czml::values::Samples;
use czml::{Error, FieldValue, Input, Instant, IntervalValue, Registry, TimeInterval};

fn registry() -> &'static Registry {
    Registry::standard().unwrap()
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn test_integers_are_stored_as_floats() {
    let position = registry()
        .build("Position")
        .with("cartographicDegrees", [-114, 40, 300_000])
        .finish()
        .unwrap();
    assert_eq!(
        position.get("cartographicDegrees"),
        Some(&FieldValue::Samples(Samples::Constant(vec![
            -114.0, 40.0, 300_000.0
        ])))
    );
}

#[test]
fn test_flat_list_becomes_epoch_offset_samples() {
    let position = registry()
        .build("Position")
        .with("epoch", "2012-03-15T10:00:00Z")
        .with("cartesian", vec![0, 1, 2, 3, 60, 4, 5, 6])
        .finish()
        .unwrap();
    match position.get("cartesian") {
        Some(FieldValue::Samples(samples)) => assert_eq!(samples.len(), 2),
        other => unreachable!("unexpected value {other:?}"),
    }
}

#[test]
fn test_flat_list_of_wrong_length_is_a_shape_error() {
    let err = registry()
        .build("Position")
        .with("cartesian", vec![0.0, 1.0, 2.0, 3.0, 4.0])
        .finish()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Shape {
            class: "Position",
            field: "cartesian",
            found: 5,
            ..
        }
    ));
}

#[test]
fn test_fixed_tuple_rejects_other_lengths() {
    let err = registry()
        .build("Label")
        .with("pixelOffset", [1.0, 2.0, 3.0])
        .finish()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Shape {
            class: "Label",
            field: "pixelOffset",
            found: 3,
            ..
        }
    ));
}

#[test]
fn test_color_tuple_needs_four_channels() {
    let ok = registry().build("Color").with("rgba", [255, 204, 0, 55]).finish();
    assert!(ok.is_ok());

    let err = registry()
        .build("Color")
        .with("rgba", [255, 204, 0])
        .finish()
        .unwrap_err();
    assert!(matches!(err, Error::Shape { field: "rgba", found: 3, .. }));

    let err = registry()
        .build("Color")
        .with("rgba", [255, 204, 0, 256])
        .finish()
        .unwrap_err();
    assert!(matches!(err, Error::Invalid { field: "rgba", .. }));
}

#[cfg(feature = "ndarray")]
#[test]
fn test_ndarray_inputs_are_coerced() {
    let coords = ndarray::Array1::from(vec![-114i64, 40, 300_000]);
    let position = registry()
        .build("Position")
        .with("cartographicDegrees", coords.view())
        .finish()
        .unwrap();
    assert_eq!(
        position.get("cartographicDegrees"),
        Some(&FieldValue::Samples(Samples::Constant(vec![
            -114.0, 40.0, 300_000.0
        ])))
    );
}

#[test]
fn test_non_finite_numbers_are_rejected() {
    let err = registry()
        .build("Label")
        .with("scale", f64::NAN)
        .finish()
        .unwrap_err();
    assert!(matches!(err, Error::Invalid { field: "scale", .. }));
}

#[test]
fn test_zero_quaternion_is_rejected() {
    let err = registry()
        .build("Orientation")
        .with("unitQuaternion", [0, 0, 0, 0])
        .finish()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Invalid {
            field: "unitQuaternion",
            ..
        }
    ));
}

#[test]
fn test_positions_list_must_hold_triples() {
    let ok = registry()
        .build("PositionList")
        .with("cartographicDegrees", [-75, 40, 0, -80, 42, 0])
        .finish();
    assert!(ok.is_ok());

    let err = registry()
        .build("PositionList")
        .with("cartographicDegrees", [-75, 40])
        .finish()
        .unwrap_err();
    assert!(matches!(err, Error::Shape { found: 2, .. }));
}

// ============================================================================
// Field lookup and kinds
// ============================================================================

#[test]
fn test_unknown_class() {
    let err = registry().build("Starship").finish().unwrap_err();
    assert!(matches!(err, Error::UnknownClass(name) if name == "Starship"));
}

#[test]
fn test_unknown_field() {
    let err = registry()
        .build("Label")
        .with("colour", 1)
        .finish()
        .unwrap_err();
    assert!(matches!(err, Error::UnknownField { class: "Label", field } if field == "colour"));
}

#[test]
fn test_duplicate_field() {
    let err = registry()
        .build("Label")
        .with("text", "a")
        .with("text", "b")
        .finish()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::DuplicateField {
            class: "Label",
            field: "text"
        }
    ));
}

#[test]
fn test_type_mismatch() {
    let err = registry()
        .build("Label")
        .with("text", 12)
        .finish()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            class: "Label",
            field: "text",
            expected: "text",
            found: "a number",
        }
    ));
}

#[test]
fn test_nested_object_of_wrong_class() {
    let label = registry().build("Label").finish().unwrap();
    let err = registry()
        .build("Packet")
        .with("billboard", label)
        .finish()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            field: "billboard",
            expected: "Billboard",
            ..
        }
    ));
}

#[test]
fn test_enumeration_members_and_raw_text() {
    let label = registry()
        .build("Label")
        .with("style", LabelStyle::FillAndOutline)
        .with("horizontalOrigin", "LEFT")
        .finish()
        .unwrap();
    assert_eq!(
        label.get("style"),
        Some(&FieldValue::Text("FILL_AND_OUTLINE".to_owned()))
    );
    assert_eq!(
        label.get("horizontalOrigin"),
        Some(&FieldValue::Text("LEFT".to_owned()))
    );
}

#[test]
fn test_enumeration_rejects_foreign_members() {
    let err = registry()
        .build("Label")
        .with("style", HorizontalOrigin::Left)
        .finish()
        .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { field: "style", .. }));

    let err = registry()
        .build("Label")
        .with("style", "BOLD")
        .finish()
        .unwrap_err();
    assert!(matches!(err, Error::Invalid { field: "style", .. }));
}

#[test]
fn test_uris_need_a_scheme() {
    let ok = registry()
        .build("Billboard")
        .with("image", "https://example.com/marker.png")
        .finish();
    assert!(ok.is_ok());
    let ok = registry()
        .build("Billboard")
        .with("image", "data:image/png;base64,iVBORw0KGgo=")
        .finish();
    assert!(ok.is_ok());

    let err = registry()
        .build("Billboard")
        .with("image", "marker.png")
        .finish()
        .unwrap_err();
    assert!(matches!(err, Error::Invalid { field: "image", .. }));
}

#[test]
fn test_references_need_an_id_and_a_property() {
    let ok = registry()
        .build("Position")
        .with("reference", "Satellite/ISS#position")
        .finish();
    assert!(ok.is_ok());

    let err = registry()
        .build("Position")
        .with("reference", "Satellite/ISS")
        .finish()
        .unwrap_err();
    assert!(matches!(err, Error::Invalid { field: "reference", .. }));
}

#[test]
fn test_instants_are_validated() {
    let err = registry()
        .build("Position")
        .with("epoch", "yesterday")
        .finish()
        .unwrap_err();
    assert!(matches!(err, Error::Invalid { field: "epoch", .. }));
}

#[test]
fn test_interval_values_take_the_field_kind() {
    let day = TimeInterval::parse("2012-03-15T10:00:00Z/2012-03-16T10:00:00Z").unwrap();
    let path = registry()
        .build("Path")
        .with("show", vec![IntervalValue::new(day.clone(), true)])
        .finish()
        .unwrap();
    match path.get("show") {
        Some(FieldValue::IntervalValues(entries)) => {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].key, "boolean");
            assert_eq!(entries[0].interval, day);
        }
        other => unreachable!("unexpected value {other:?}"),
    }

    let err = registry()
        .build("Path")
        .with("show", IntervalValue::new(day, 3))
        .finish()
        .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { field: "show", .. }));
}

#[test]
fn test_custom_properties_keep_their_order() {
    let packet = registry()
        .build("Packet")
        .with("id", "a")
        .with(
            "properties",
            Input::properties([("zeta", Input::from(1)), ("alpha", Input::from("x"))]),
        )
        .finish()
        .unwrap();
    match packet.get("properties") {
        Some(FieldValue::Properties(pairs)) => {
            let names: Vec<&str> = pairs.iter().map(|(n, _)| n.as_str()).collect();
            assert_eq!(names, ["zeta", "alpha"]);
        }
        other => unreachable!("unexpected value {other:?}"),
    }
}

#[test]
fn test_custom_property_names_must_be_unique() {
    let err = registry()
        .build("Packet")
        .with("id", "p00")
        .with(
            "properties",
            Input::properties([("a", Input::from(1)), ("a", Input::from(2))]),
        )
        .finish()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Invalid {
            class: "Packet",
            field: "properties",
            ..
        }
    ));

    let nested = Input::properties([(
        "outer",
        Input::properties([("x", Input::from(1)), ("x", Input::from(true))]),
    )]);
    let err = registry()
        .build("Packet")
        .with("id", "p01")
        .with("properties", nested)
        .finish()
        .unwrap_err();
    assert!(matches!(err, Error::Invalid { field: "properties", .. }));
}

// ============================================================================
// Rules
// ============================================================================

#[test]
fn test_exclusive_fields() {
    let err = registry()
        .build("Position")
        .with("cartesian", [1, 2, 3])
        .with("cartographicDegrees", [1, 2, 3])
        .finish()
        .unwrap_err();
    match err {
        Error::ConflictingFields { class, fields } => {
            assert_eq!(class, "Position");
            assert_eq!(fields, ["cartesian", "cartographicDegrees"]);
        }
        other => unreachable!("unexpected error {other}"),
    }
}

#[test]
fn test_one_of_requires_an_alternative() {
    let err = registry()
        .build("RectangleCoordinates")
        .finish()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingAlternative {
            class: "RectangleCoordinates",
            ..
        }
    ));
}

#[test]
fn test_interpolation_degree_requires_algorithm() {
    let err = registry()
        .build("Position")
        .with("interpolationDegree", 5)
        .finish()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingDependency {
            field: "interpolationDegree",
            sibling: "interpolationAlgorithm",
            ..
        }
    ));

    let ok = registry()
        .build("Position")
        .with("interpolationDegree", 5)
        .with("interpolationAlgorithm", InterpolationAlgorithm::Lagrange)
        .finish();
    assert!(ok.is_ok());
}

#[test]
fn test_required_fields() {
    let err = registry().build("Polygon").finish().unwrap_err();
    assert!(matches!(
        err,
        Error::MissingField {
            class: "Polygon",
            field: "positions"
        }
    ));
}

// ============================================================================
// Deletion and defaults
// ============================================================================

#[test]
fn test_delete_drops_everything_but_id() {
    let packet = registry()
        .build("Packet")
        .with("id", "id_00")
        .with("delete", true)
        .with("name", "gone")
        .finish()
        .unwrap();
    let names: Vec<&str> = packet.fields().map(|(f, _)| f.name).collect();
    assert_eq!(names, ["id", "delete"]);
}

#[test]
fn test_delete_skips_rules_and_required_fields() {
    let color = registry()
        .build("Color")
        .with("delete", true)
        .with("rgba", [1, 2, 3, 4])
        .with("rgbaf", [0.1, 0.2, 0.3, 0.4])
        .finish()
        .unwrap();
    assert!(color.is_set("delete"));
    assert!(!color.is_set("rgba"));
}

#[test]
fn test_defaults_fill_unset_fields() {
    let preamble = registry().build("Preamble").finish().unwrap();
    assert_eq!(preamble.get("id"), Some(&FieldValue::Text("document".to_owned())));
    assert_eq!(preamble.get("version"), Some(&FieldValue::Text("1.0".to_owned())));
    assert!(!preamble.is_set("name"));
}

#[test]
fn test_objects_compare_by_class_and_values() {
    let a = registry().color([255, 0, 0]).unwrap();
    let b = registry().color("#ff0000").unwrap();
    let c = registry().color("red").unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn test_color_helper_rejects_bad_channels() {
    assert!(matches!(
        registry().color([0, 0, 256]),
        Err(Error::Invalid { class: "Color", .. })
    ));
    assert!(matches!(
        registry().color([0.5, 0.5]),
        Err(Error::Shape { found: 2, .. })
    ));
    assert!(registry().color("not-a-color").is_err());
}

#[test]
fn test_color_list_pairs_timestamps() {
    let times = [
        Instant::parse("2012-03-15T10:00:00Z").unwrap(),
        Instant::parse("2012-03-15T11:00:00Z").unwrap(),
    ];
    let color = registry()
        .color_list(times.clone(), [0xFF0000u32, 0x00FF00], false)
        .unwrap();
    match color.get("rgba") {
        Some(FieldValue::Samples(samples)) => assert_eq!(samples.len(), 2),
        other => unreachable!("unexpected value {other:?}"),
    }

    let err = registry()
        .color_list(times, [0xFF0000u32], true)
        .unwrap_err();
    assert!(matches!(err, Error::Invalid { field: "rgbaf", .. }));
}

#[test]
fn test_color_list_takes_epoch_offsets() {
    let color = registry()
        .color_list([0.0, 60.0], ["red", "#00ff00"], true)
        .unwrap();
    assert_eq!(
        color.dumps().unwrap(),
        r#"{"rgbaf":[0.0,1.0,0.0,0.0,1.0,60.0,0.0,1.0,0.0,1.0]}"#
    );

    let err = registry()
        .color_list([f64::NAN], ["red"], false)
        .unwrap_err();
    assert!(matches!(err, Error::Invalid { field: "rgba", .. }));
}
