//! The registry of compiled value classes.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use czml_spec::model::{Enumeration, SchemaDefinition};
use czml_spec::Catalogue;
use tracing::debug;

use crate::error::{Error, Result, SchemaError};
use crate::object::{Builder, Object};
use crate::schema::{compile_class, FieldKind, ValueClass};
use crate::values::{ColorArg, ColorValue, Sample, TimeTag};

/// Compiled value classes, looked up by name.
#[derive(Debug)]
pub struct Registry {
    classes: Vec<Arc<ValueClass>>,
    by_name: HashMap<&'static str, usize>,
}

impl Registry {
    /// Compiles a set of definitions.
    ///
    /// # Errors
    ///
    /// The first [`SchemaError`] found, in definition order. Nested types
    /// are resolved after every class has compiled.
    pub fn compile(definitions: Vec<SchemaDefinition>) -> Result<Self, SchemaError> {
        let mut classes = Vec::with_capacity(definitions.len());
        let mut by_name = HashMap::with_capacity(definitions.len());
        for def in &definitions {
            if by_name.insert(def.class_name, classes.len()).is_some() {
                return Err(SchemaError::DuplicateClass {
                    class: def.class_name,
                });
            }
            classes.push(Arc::new(compile_class(def)?));
        }
        for class in &classes {
            for field in &class.fields {
                if let FieldKind::Nested(ty) = field.kind {
                    if !by_name.contains_key(ty) {
                        return Err(SchemaError::UnknownType {
                            class: class.name,
                            field: field.name,
                            ty,
                        });
                    }
                }
            }
        }
        debug!(classes = classes.len(), "compiled schema registry");
        Ok(Self { classes, by_name })
    }

    /// The registry compiled from the full property catalogue.
    ///
    /// Compiled once on first use.
    ///
    /// # Errors
    ///
    /// The [`SchemaError`] if the catalogue does not compile.
    pub fn standard() -> Result<&'static Registry, SchemaError> {
        static STANDARD: OnceLock<Result<Registry, SchemaError>> = OnceLock::new();
        STANDARD
            .get_or_init(|| Registry::compile(Catalogue::full().definitions.clone()))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Looks up a class.
    #[must_use]
    pub fn class(&self, name: &str) -> Option<&Arc<ValueClass>> {
        self.by_name.get(name).map(|i| &self.classes[*i])
    }

    /// All classes in compilation order.
    pub fn classes(&self) -> impl Iterator<Item = &ValueClass> {
        self.classes.iter().map(AsRef::as_ref)
    }

    /// The enumerations used by any field, in first-use order.
    #[must_use]
    pub fn enumerations(&self) -> Vec<&'static Enumeration> {
        let mut seen: Vec<&'static Enumeration> = Vec::new();
        for class in &self.classes {
            for field in &class.fields {
                if let FieldKind::Enumerated(e) = field.kind {
                    if !seen.iter().any(|s| s.name == e.name) {
                        seen.push(e);
                    }
                }
            }
        }
        seen
    }

    /// Starts building an instance of `class`.
    ///
    /// An unknown class is reported by [`Builder::finish`].
    pub fn build(&self, class: &str) -> Builder {
        Builder::new(self.class(class).cloned(), class)
    }

    /// Builds a `Color` from any accepted color spelling.
    ///
    /// # Errors
    ///
    /// `Shape` or `Invalid` if the argument does not resolve.
    pub fn color(&self, color: impl Into<ColorArg>) -> Result<Object> {
        let color = color.into();
        match color.resolve().map_err(|e| e.at("Color", "rgba"))? {
            ColorValue::Rgba(c) => {
                self.build("Color").with("rgba", c.channels()).finish()
            }
            ColorValue::Rgbaf(c) => {
                self.build("Color").with("rgbaf", c.channels()).finish()
            }
        }
    }

    /// Builds a time-tagged `Color` pairing each timestamp with a color.
    ///
    /// Timestamps are instants or seconds since the property's epoch. Every
    /// color is converted to RGBAF when `rgbaf` is true and to RGBA
    /// otherwise.
    ///
    /// # Errors
    ///
    /// `Invalid` when the lists differ in length or are empty, `Shape` or
    /// `Invalid` when a color does not resolve.
    pub fn color_list<T: Into<TimeTag>, C: Into<ColorArg>>(
        &self,
        timestamps: impl IntoIterator<Item = T>,
        colors: impl IntoIterator<Item = C>,
        rgbaf: bool,
    ) -> Result<Object> {
        let field = if rgbaf { "rgbaf" } else { "rgba" };
        let timestamps: Vec<TimeTag> = timestamps.into_iter().map(Into::into).collect();
        let colors: Vec<ColorArg> = colors.into_iter().map(Into::into).collect();
        if colors.len() != timestamps.len() || colors.is_empty() {
            return Err(Error::Invalid {
                class: "Color",
                field,
                reason: format!(
                    "{} timestamps for {} colors",
                    timestamps.len(),
                    colors.len()
                ),
            });
        }
        let mut samples = Vec::with_capacity(colors.len());
        for (time, color) in timestamps.into_iter().zip(&colors) {
            let color = color.resolve().map_err(|e| e.at("Color", field))?;
            let values = if rgbaf {
                color.to_rgbaf().channels()
            } else {
                color.to_rgba().channels()
            };
            samples.push(Sample {
                time,
                values: values.to_vec(),
            });
        }
        self.build("Color").with(field, samples).finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use czml_spec::model::{Attribute, Rule};

    fn def(class_name: &'static str, attributes: Vec<Attribute>) -> SchemaDefinition {
        SchemaDefinition {
            class_name,
            description: "",
            bases: &[],
            attributes,
            rules: &[] as &[Rule],
        }
    }

    #[test]
    fn standard_registry_compiles() {
        let registry = Registry::standard().unwrap();
        assert_eq!(registry.classes().count(), 31);
        assert!(registry.class("Packet").is_some());
        assert_eq!(registry.enumerations().len(), 14);
    }

    #[test]
    fn unknown_nested_type_is_rejected() {
        let defs = vec![def("Thing", vec![Attribute::new("other", "Option<Missing>", "")])];
        assert_eq!(
            Registry::compile(defs).unwrap_err(),
            SchemaError::UnknownType {
                class: "Thing",
                field: "other",
                ty: "Missing"
            }
        );
    }

    #[test]
    fn duplicate_class_is_rejected() {
        let defs = vec![def("Thing", vec![]), def("Thing", vec![])];
        assert!(matches!(
            Registry::compile(defs),
            Err(SchemaError::DuplicateClass { class: "Thing" })
        ));
    }

    #[test]
    fn nested_types_may_be_declared_later() {
        let defs = vec![
            def("Outer", vec![Attribute::new("inner", "Option<Inner>", "")]),
            def("Inner", vec![]),
        ];
        assert!(Registry::compile(defs).is_ok());
    }

    #[test]
    fn unknown_class_surfaces_on_finish() {
        let registry = Registry::standard().unwrap();
        assert!(matches!(
            registry.build("Nope").finish(),
            Err(Error::UnknownClass(name)) if name == "Nope"
        ));
    }
}
