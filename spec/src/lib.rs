//! The CZML property catalogue encoded as typed Rust data.
//!
//! The `czml-spec` crate describes every property kind of the document
//! format (packets, positions, colors, materials, graphics) as static
//! [`SchemaDefinition`]s, together with the enumerations they reference.
//! The `czml` crate compiles these definitions into value classes; this
//! crate holds no construction or validation logic.
//!
//! # Entry Point
//!
//! ```
//! let catalogue = czml_spec::Catalogue::full();
//! assert!(catalogue.definition("Packet").is_some());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod catalogue;
pub mod enums;
pub mod model;

pub use catalogue::document::CZML_VERSION;
pub use model::{
    Attribute, Capability, Catalogue, DefaultValue, Enumeration, FieldDescriptor, Rule,
    SchemaDefinition,
};

impl Catalogue {
    /// Returns the complete catalogue.
    #[must_use]
    pub fn full() -> &'static Catalogue {
        static CATALOGUE: std::sync::OnceLock<Catalogue> = std::sync::OnceLock::new();
        CATALOGUE.get_or_init(|| Catalogue {
            version: CZML_VERSION,
            definitions: catalogue::definitions(),
            enumerations: enums::all().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_count() {
        assert_eq!(Catalogue::full().class_count(), 31);
    }

    #[test]
    fn enumeration_count() {
        assert_eq!(Catalogue::full().enumerations.len(), 14);
    }

    #[test]
    fn every_enumerated_field_uses_a_listed_enumeration() {
        let catalogue = Catalogue::full();
        for def in &catalogue.definitions {
            for attr in &def.attributes {
                if let Some(e) = attr.field.enumeration {
                    assert!(
                        catalogue.enumerations.iter().any(|listed| std::ptr::eq(*listed, e)),
                        "{}.{} uses unlisted enumeration {}",
                        def.class_name,
                        attr.name,
                        e.name
                    );
                }
            }
        }
    }

    #[test]
    fn inherited_attributes_are_counted() {
        let catalogue = Catalogue::full();
        let own: usize = catalogue.definitions.iter().map(|d| d.attributes.len()).sum();
        assert!(catalogue.attribute_count() > own);
    }
}
