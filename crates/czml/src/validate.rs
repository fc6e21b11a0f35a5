//! Cross-field rules applied once at construction.

use czml_spec::model::Rule;

use crate::error::{Error, Result};
use crate::object::FieldValue;
use crate::schema::ValueClass;

/// Checks required fields, then each rule in declaration order.
///
/// `values` holds one slot per field of `class`, after defaults.
pub(crate) fn check(class: &ValueClass, values: &[Option<FieldValue>]) -> Result<()> {
    let is_set = |name: &str| class.position(name).is_some_and(|i| values[i].is_some());

    for (field, value) in class.fields.iter().zip(values) {
        if field.required && value.is_none() {
            return Err(Error::MissingField {
                class: class.name,
                field: field.name,
            });
        }
    }

    for rule in &class.rules {
        match *rule {
            Rule::Exclusive(group) => {
                let set: Vec<&'static str> = group.iter().copied().filter(|f| is_set(f)).collect();
                if set.len() > 1 {
                    return Err(Error::ConflictingFields {
                        class: class.name,
                        fields: set,
                    });
                }
            }
            Rule::OneOf(group) => {
                let set: Vec<&'static str> = group.iter().copied().filter(|f| is_set(f)).collect();
                match set.len() {
                    0 => {
                        return Err(Error::MissingAlternative {
                            class: class.name,
                            fields: group.to_vec(),
                        })
                    }
                    1 => {}
                    _ => {
                        return Err(Error::ConflictingFields {
                            class: class.name,
                            fields: set,
                        })
                    }
                }
            }
            Rule::Requires { field, sibling } => {
                if is_set(field) && !is_set(sibling) {
                    return Err(Error::MissingDependency {
                        class: class.name,
                        field,
                        sibling,
                    });
                }
            }
        }
    }
    Ok(())
}
