//! The property catalogue.
//!
//! Each sub-module encodes a group of property kinds as static schema
//! definitions. [`definitions`] lists them in the order the registry compiles
//! them; nested references between classes are resolved by name, so the order
//! carries no dependency meaning.

pub mod document;
pub mod graphics;
pub mod material;
pub mod position;

use crate::model::{Attribute, SchemaDefinition};

/// Returns every schema definition in the catalogue.
#[must_use]
pub fn definitions() -> Vec<SchemaDefinition> {
    let mut defs = Vec::new();
    defs.extend(document::definitions());
    defs.extend(position::definitions());
    defs.extend(material::definitions());
    defs.extend(graphics::definitions());
    defs
}

pub(crate) fn show() -> Attribute {
    Attribute::new("show", "Option<bool>", "Whether or not the object is shown.")
}

pub(crate) fn distance_display_condition() -> Attribute {
    Attribute::new(
        "distanceDisplayCondition",
        "Option<DistanceDisplayCondition>",
        "The display condition specifying the distance from the camera at which this \
         object will be displayed.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_are_unique() {
        let mut names = std::collections::HashSet::new();
        for def in definitions() {
            assert!(names.insert(def.class_name), "duplicate class {}", def.class_name);
        }
    }

    #[test]
    fn every_attribute_declares_a_type() {
        for def in definitions() {
            for attr in &def.attributes {
                assert!(attr.field.ty.is_some(), "{}.{} has no type", def.class_name, attr.name);
            }
        }
    }

    #[test]
    fn catalogue_covers_packet_and_preamble() {
        let defs = definitions();
        assert!(defs.iter().any(|d| d.class_name == "Packet"));
        assert!(defs.iter().any(|d| d.class_name == "Preamble"));
        assert_eq!(defs.len(), 31);
    }
}
