//! Rendering of constructed values.
//!
//! Objects serialize as maps in declared field order with unset fields
//! omitted. Numbers always render as floating-point literals. Time-tagged
//! samples flatten to `[time, value..., time, value...]`; a constant renders
//! as its bare value.

use core::fmt;
use std::io;

use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::document::Document;
use crate::error::Result;
use crate::object::{FieldValue, IntervalEntry, Object};
use crate::packet::Packet;
use crate::values::{Samples, TimeTag};

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// No whitespace.
    Compact,
    /// One entry per line, indented by `indent` spaces per level.
    Pretty {
        /// Spaces per nesting level.
        indent: usize,
    },
}

impl Default for Format {
    fn default() -> Self {
        Format::Pretty { indent: 4 }
    }
}

/// Renders `value` as text.
///
/// # Errors
///
/// `Json` if serialization fails, `Utf8` if the output is not UTF-8.
pub fn to_string<T: Serialize + ?Sized>(value: &T, format: Format) -> Result<String> {
    let mut out = Vec::new();
    to_writer(&mut out, value, format)?;
    Ok(String::from_utf8(out)?)
}

/// Renders `value` into `writer`.
///
/// # Errors
///
/// `Json` if serialization or writing fails.
pub fn to_writer<W: io::Write, T: Serialize + ?Sized>(
    writer: W,
    value: &T,
    format: Format,
) -> Result<()> {
    match format {
        Format::Compact => serde_json::to_writer(writer, value)?,
        Format::Pretty { indent } => {
            let indent = " ".repeat(indent);
            let formatter = PrettyFormatter::with_indent(indent.as_bytes());
            let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
            value.serialize(&mut ser)?;
        }
    }
    Ok(())
}

/// A number on its way out; non-finite values fail instead of becoming `null`.
struct Finite(f64);

impl Serialize for Finite {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        debug_assert!(self.0.is_finite(), "non-finite number reached the serializer");
        if !self.0.is_finite() {
            return Err(S::Error::custom(format!(
                "non-finite number {} reached the serializer",
                self.0
            )));
        }
        serializer.serialize_f64(self.0)
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields().count()))?;
        for (field, value) in self.fields() {
            map.serialize_entry(field.name, value)?;
        }
        map.end()
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
            FieldValue::Number(n) => Finite(*n).serialize(serializer),
            FieldValue::Text(text) => serializer.serialize_str(text),
            FieldValue::Numbers(values) => {
                serializer.collect_seq(values.iter().map(|v| Finite(*v)))
            }
            FieldValue::Samples(samples) => samples.serialize(serializer),
            FieldValue::Instant(instant) => serializer.serialize_str(&instant.render()),
            FieldValue::Interval(interval) => serializer.serialize_str(&interval.render()),
            FieldValue::Intervals(intervals) => {
                serializer.collect_seq(intervals.iter().map(|i| i.render()))
            }
            FieldValue::Object(object) => object.serialize(serializer),
            FieldValue::IntervalValue(entry) => entry.serialize(serializer),
            FieldValue::IntervalValues(entries) => serializer.collect_seq(entries),
            FieldValue::Properties(pairs) => {
                serializer.collect_map(pairs.iter().map(|(name, value)| (name, value)))
            }
            FieldValue::Json(value) => value.serialize(serializer),
        }
    }
}

impl Serialize for Samples {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Samples::Constant(values) if values.len() == 1 => {
                Finite(values[0]).serialize(serializer)
            }
            Samples::Constant(values) => {
                serializer.collect_seq(values.iter().map(|v| Finite(*v)))
            }
            Samples::Tagged(samples) => {
                let len = samples.iter().map(|s| 1 + s.values.len()).sum();
                let mut seq = serializer.serialize_seq(Some(len))?;
                for sample in samples {
                    match &sample.time {
                        TimeTag::At(instant) => seq.serialize_element(&instant.render())?,
                        TimeTag::Seconds(t) => seq.serialize_element(&Finite(*t))?,
                    }
                    for v in &sample.values {
                        seq.serialize_element(&Finite(*v))?;
                    }
                }
                seq.end()
            }
        }
    }
}

impl Serialize for IntervalEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("interval", &self.interval.render())?;
        match &self.value {
            FieldValue::Object(object) => {
                for (field, value) in object.fields() {
                    map.serialize_entry(field.name, value)?;
                }
            }
            value => map.serialize_entry(self.key, value)?,
        }
        map.end()
    }
}

macro_rules! rendering {
    ($($t:ty),*) => {
        $(
            impl $t {
                /// The rendered structure as a JSON value.
                ///
                /// # Errors
                ///
                /// `Json` if serialization fails.
                pub fn to_value(&self) -> Result<Value> {
                    Ok(serde_json::to_value(self)?)
                }

                /// The compact rendering.
                ///
                /// # Errors
                ///
                /// `Json` if serialization fails.
                pub fn dumps(&self) -> Result<String> {
                    to_string(self, Format::Compact)
                }

                /// The rendering in `format`.
                ///
                /// # Errors
                ///
                /// `Json` if serialization fails.
                pub fn render(&self, format: Format) -> Result<String> {
                    to_string(self, format)
                }
            }

            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let text = to_string(self, Format::default()).map_err(|_| fmt::Error)?;
                    f.write_str(&text)
                }
            }
        )*
    };
}

rendering!(Object, Packet, Document);
