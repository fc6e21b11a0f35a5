//! Property-based tests for value normalization and rules.
//!
//! Uses proptest to check that construction accepts exactly the inputs its
//! shapes describe, that every exclusive group of every class is enforced,
//! and that rendering is a pure function of the inputs.

use czml::schema::{CompiledField, FieldKind, Rule, ValueClass};
use czml::values::{ColorArg, Rgba, Rgbaf, TupleShape};
use czml::{Builder, Error, Input, Registry};
use proptest::prelude::*;

fn registry() -> &'static Registry {
    Registry::standard().unwrap()
}

// =============================================================================
// Numeric Coercion
// =============================================================================

proptest! {
    /// Integer coordinates render as the same value in float form.
    #[test]
    fn prop_integers_widen_exactly(x in -1_000_000i32..1_000_000, y in -90i32..90, z in 0i32..100_000) {
        let position = registry()
            .build("Position")
            .with("cartographicDegrees", [x, y, z])
            .finish()
            .unwrap();
        let expected = format!(
            r#"{{"cartographicDegrees":[{:?},{:?},{:?}]}}"#,
            f64::from(x),
            f64::from(y),
            f64::from(z)
        );
        prop_assert_eq!(position.dumps().unwrap(), expected);
    }

    /// Any flat list whose length is not a multiple of the sample stride is
    /// rejected for an interpolatable triple.
    #[test]
    fn prop_flat_lists_need_whole_samples(len in 1usize..40) {
        let values = vec![1.0; len];
        let result = registry().build("Position").with("cartesian", values).finish();
        if len == 3 || len % 4 == 0 {
            prop_assert!(result.is_ok());
        } else {
            let is_shape_error = matches!(result, Err(Error::Shape { .. }));
            prop_assert!(is_shape_error);
        }
    }

    /// Fixed tuples accept exactly their arity.
    #[test]
    fn prop_tuple_arity(shape_index in 0usize..TupleShape::ALL.len(), len in 0usize..8) {
        let shape = TupleShape::ALL[shape_index];
        let values = vec![0.5; len];
        let is_shape_error = matches!(shape.check(&values), Err(czml::ValueError::Shape { .. }));
        prop_assert_eq!(is_shape_error, len != shape.arity());
    }
}

// =============================================================================
// Colors
// =============================================================================

proptest! {
    /// Integral channels are valid exactly in 0..=255.
    #[test]
    fn prop_rgba_range(r in -10i32..300, g in 0i32..=255, b in 0i32..=255) {
        let valid = (0..=255).contains(&r);
        prop_assert_eq!(Rgba::new([r, g, b]).is_ok(), valid);
        prop_assert_eq!(registry().color([r, g, b]).is_ok(), valid);
    }

    /// Fractional channels are valid exactly in 0.0..=1.0.
    #[test]
    fn prop_rgbaf_range(r in -0.5f64..1.5, g in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let valid = (0.0..=1.0).contains(&r);
        prop_assert_eq!(Rgbaf::new([r, g, b]).is_ok(), valid);
    }

    /// Hex and packed spellings of the same color agree.
    #[test]
    fn prop_hex_matches_packed(rgb in 0u32..=0x00FF_FFFF) {
        let hex = ColorArg::from(format!("#{rgb:06x}")).resolve().unwrap();
        let packed = ColorArg::from(rgb).resolve().unwrap();
        prop_assert_eq!(hex, packed);
    }

    /// Converting to fractional channels and back is lossless.
    #[test]
    fn prop_rgba_survives_rgbaf(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255, a in 0u8..=255) {
        let color = Rgba::new([r, g, b, a]).unwrap();
        prop_assert_eq!(color.to_rgbaf().to_rgba(), color);
    }
}

// =============================================================================
// Rules
// =============================================================================

/// A valid input for `field`, following its kind.
fn value_for(field: &CompiledField) -> Input {
    match field.kind {
        FieldKind::Boolean => Input::from(true),
        FieldKind::Number => Input::from(1.0),
        FieldKind::Text => Input::from("text"),
        FieldKind::Uri => Input::from("https://example.com/image.png"),
        FieldKind::Reference => Input::from("other#position"),
        FieldKind::Instant => Input::from("2012-03-15T10:00:00Z"),
        FieldKind::Interval => Input::from("2012-03-15T10:00:00Z/2012-03-16T10:00:00Z"),
        FieldKind::Tuple(shape) => Input::from(vec![1.0; shape.arity()]),
        FieldKind::List(shape) => Input::from(vec![1.0; shape.stride()]),
        FieldKind::Enumerated(e) => Input::from(e.members[0].1),
        FieldKind::Nested(class) => Input::from(minimal(class).finish().unwrap()),
        FieldKind::Properties => Input::properties([("key", 1)]),
    }
}

/// A builder holding the required fields of `class` and the first member of
/// each exactly-one group.
fn minimal(class: &str) -> Builder {
    minimal_except(registry().class(class).unwrap(), &[])
}

fn minimal_except(class: &ValueClass, skip: &[&str]) -> Builder {
    let mut builder = registry().build(class.name);
    for field in &class.fields {
        if field.required && !skip.contains(&field.name) {
            builder = builder.with(field.name, value_for(field));
        }
    }
    for rule in &class.rules {
        if let Rule::OneOf(group) = rule {
            if group.iter().any(|name| skip.contains(name)) {
                continue;
            }
            let first = class.field(group[0]).unwrap();
            builder = builder.with(first.name, value_for(first));
        }
    }
    builder
}

/// Every class's exclusive groups, as `(class, group)` pairs.
fn exclusive_groups() -> Vec<(&'static ValueClass, &'static [&'static str])> {
    registry()
        .classes()
        .flat_map(|class| class.exclusive_groups().map(move |group| (class, group)))
        .collect()
}

#[test]
fn test_every_class_with_a_group_is_covered() {
    let classes: Vec<&str> = exclusive_groups().iter().map(|(c, _)| c.name).collect();
    for name in [
        "Position",
        "Color",
        "Material",
        "PolylineMaterial",
        "Orientation",
        "ViewFrom",
        "RectangleCoordinates",
    ] {
        assert!(classes.contains(&name), "{name} has no exclusive group");
    }
}

#[test]
fn test_every_pair_of_an_exclusive_group_conflicts() {
    for (class, group) in exclusive_groups() {
        for (i, a) in group.iter().enumerate() {
            for b in &group[i + 1..] {
                let result = minimal_except(class, group)
                    .with(a, value_for(class.field(a).unwrap()))
                    .with(b, value_for(class.field(b).unwrap()))
                    .finish();
                match result {
                    Err(Error::ConflictingFields { class: name, fields }) => {
                        assert_eq!(name, class.name);
                        assert_eq!(fields, vec![*a, *b], "{}: {a} with {b}", class.name);
                    }
                    other => panic!("{}: {a} with {b} gave {other:?}", class.name),
                }
            }
        }
    }
}

#[test]
fn test_every_single_member_of_an_exclusive_group_is_accepted() {
    for (class, group) in exclusive_groups() {
        for name in group {
            let object = minimal_except(class, group)
                .with(name, value_for(class.field(name).unwrap()))
                .finish()
                .unwrap_or_else(|e| panic!("{}.{name}: {e}", class.name));
            for other in group.iter().filter(|other| *other != name) {
                assert!(!object.is_set(other), "{}.{other} set", class.name);
            }
        }
    }
}

#[test]
fn test_exactly_one_groups_need_a_member() {
    for class in registry().classes() {
        for rule in &class.rules {
            if let Rule::OneOf(group) = rule {
                let err = minimal_except(class, group).finish().unwrap_err();
                assert!(
                    matches!(err, Error::MissingAlternative { .. }),
                    "{}: {err}",
                    class.name
                );
            }
        }
    }
}

proptest! {
    /// Any two members of the position group conflict, whatever the values.
    #[test]
    fn prop_position_members_are_exclusive(
        i in 0usize..3,
        j in 0usize..3,
        coords in prop::array::uniform3(-1_000.0f64..1_000.0),
    ) {
        prop_assume!(i != j);
        let group = ["cartesian", "cartographicRadians", "cartographicDegrees"];
        let result = registry()
            .build("Position")
            .with(group[i], coords)
            .with(group[j], coords)
            .finish();
        let conflicting = matches!(result, Err(Error::ConflictingFields { .. }));
        prop_assert!(conflicting);
    }
}

// =============================================================================
// Determinism
// =============================================================================

proptest! {
    /// Building the same label twice renders identically.
    #[test]
    fn prop_rendering_is_pure(text in "[a-zA-Z0-9 ]{0,24}", width in 0.0f64..10.0) {
        let build = || {
            registry()
                .build("Label")
                .with("text", text.as_str())
                .with("outlineWidth", width)
                .finish()
                .unwrap()
        };
        prop_assert_eq!(build().dumps().unwrap(), build().dumps().unwrap());
        prop_assert_eq!(build().to_string(), build().to_string());
    }
}
