//! Constructed values.
//!
//! Callers describe a value as named [`Input`]s handed to a [`Builder`].
//! [`Builder::finish`] normalizes every input against its compiled field,
//! fills defaults and runs the class's rules, yielding an immutable
//! [`Object`] whose fields hold canonical [`FieldValue`]s.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, TimeZone};
use czml_spec::enums::{
    ArcType, ClassificationType, ClockRange, ClockStep, ColorBlendMode, ExtrapolationType,
    HeightReference, HorizontalOrigin, InterpolationAlgorithm, LabelStyle, Member,
    ReferenceFrame, ShadowMode, StripeOrientation, VerticalOrigin,
};
use czml_spec::model::{DefaultValue, Enumeration};

use crate::error::{Error, Result, ValueError};
use crate::schema::{CompiledField, FieldKind, ValueClass};
use crate::validate;
use crate::values::shape::check_finite;
use crate::values::{to_reals, Instant, Real, Sample, Samples, TimeInterval, TimeTag, TupleShape};

/// A value as given by the caller, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// Text: free text, URIs, references, ISO times or enumeration raw values.
    Text(String),
    /// A flat list of numbers.
    Numbers(Vec<f64>),
    /// Explicit time-tagged samples.
    Samples(Vec<Sample>),
    /// A point in time.
    Instant(Instant),
    /// A time interval.
    Interval(TimeInterval),
    /// A list of time intervals.
    Intervals(Vec<TimeInterval>),
    /// A typed enumeration member.
    Member {
        /// The member's enumeration.
        enumeration: &'static Enumeration,
        /// The member's raw value.
        raw: &'static str,
    },
    /// A constructed object.
    Object(Object),
    /// A value holding over one interval.
    IntervalValue(Box<IntervalValue>),
    /// Values holding over successive intervals.
    IntervalValues(Vec<IntervalValue>),
    /// Custom properties, in order.
    Properties(Vec<(String, Input)>),
    /// Raw JSON, kept as given.
    Json(serde_json::Value),
}

impl Input {
    /// A typed enumeration member.
    pub fn member<M: Member>(member: M) -> Self {
        Input::Member {
            enumeration: M::enumeration(),
            raw: member.raw(),
        }
    }

    /// Custom properties from name/value pairs.
    pub fn properties<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Input>,
    {
        Input::Properties(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Short description used in type-mismatch errors.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Input::Bool(_) => "a boolean",
            Input::Number(_) => "a number",
            Input::Text(_) => "text",
            Input::Numbers(_) => "a number list",
            Input::Samples(_) => "time-tagged samples",
            Input::Instant(_) => "an instant",
            Input::Interval(_) => "a time interval",
            Input::Intervals(_) => "a list of time intervals",
            Input::Member { .. } => "an enumeration member",
            Input::Object(_) => "an object",
            Input::IntervalValue(_) => "an interval value",
            Input::IntervalValues(_) => "interval values",
            Input::Properties(_) => "custom properties",
            Input::Json(_) => "raw JSON",
        }
    }
}

/// A value that holds over one time interval.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalValue {
    /// When the value holds.
    pub interval: TimeInterval,
    /// The value.
    pub value: Input,
}

impl IntervalValue {
    /// A value holding over `interval`.
    pub fn new(interval: TimeInterval, value: impl Into<Input>) -> Self {
        Self {
            interval,
            value: value.into(),
        }
    }
}

impl From<bool> for Input {
    fn from(value: bool) -> Self {
        Input::Bool(value)
    }
}

macro_rules! numeric_inputs {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Input {
                fn from(value: $t) -> Self {
                    Input::Number(value.to_f64())
                }
            }

            impl From<Vec<$t>> for Input {
                fn from(values: Vec<$t>) -> Self {
                    Input::Numbers(to_reals(values))
                }
            }

            impl From<&[$t]> for Input {
                fn from(values: &[$t]) -> Self {
                    Input::Numbers(to_reals(values.iter().copied()))
                }
            }

            impl<const N: usize> From<[$t; N]> for Input {
                fn from(values: [$t; N]) -> Self {
                    Input::Numbers(to_reals(values))
                }
            }
        )*
    };
}

numeric_inputs!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! member_inputs {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Input {
                fn from(member: $t) -> Self {
                    Input::member(member)
                }
            }
        )*
    };
}

member_inputs!(
    InterpolationAlgorithm,
    ExtrapolationType,
    ReferenceFrame,
    LabelStyle,
    ClockRange,
    ClockStep,
    VerticalOrigin,
    HorizontalOrigin,
    HeightReference,
    ColorBlendMode,
    ShadowMode,
    ClassificationType,
    ArcType,
    StripeOrientation
);

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_owned())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

impl From<Instant> for Input {
    fn from(value: Instant) -> Self {
        Input::Instant(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Input {
    fn from(value: DateTime<Tz>) -> Self {
        Input::Instant(value.into())
    }
}

impl From<TimeInterval> for Input {
    fn from(value: TimeInterval) -> Self {
        Input::Interval(value)
    }
}

impl From<Vec<TimeInterval>> for Input {
    fn from(value: Vec<TimeInterval>) -> Self {
        Input::Intervals(value)
    }
}

impl From<Vec<Sample>> for Input {
    fn from(value: Vec<Sample>) -> Self {
        Input::Samples(value)
    }
}

impl From<Object> for Input {
    fn from(value: Object) -> Self {
        Input::Object(value)
    }
}

impl From<IntervalValue> for Input {
    fn from(value: IntervalValue) -> Self {
        Input::IntervalValue(Box::new(value))
    }
}

impl From<Vec<IntervalValue>> for Input {
    fn from(value: Vec<IntervalValue>) -> Self {
        Input::IntervalValues(value)
    }
}

impl From<serde_json::Value> for Input {
    fn from(value: serde_json::Value) -> Self {
        Input::Json(value)
    }
}

#[cfg(feature = "ndarray")]
impl<T: Real> From<ndarray::Array1<T>> for Input {
    fn from(values: ndarray::Array1<T>) -> Self {
        Input::Numbers(to_reals(values.iter().copied()))
    }
}

#[cfg(feature = "ndarray")]
impl<T: Real> From<ndarray::ArrayView1<'_, T>> for Input {
    fn from(values: ndarray::ArrayView1<'_, T>) -> Self {
        Input::Numbers(to_reals(values.iter().copied()))
    }
}

/// A canonical field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// Text, including URIs, references and enumeration raw values.
    Text(String),
    /// A fixed-arity tuple or a coordinate list.
    Numbers(Vec<f64>),
    /// An interpolatable value.
    Samples(Samples),
    /// A point in time.
    Instant(Instant),
    /// A time interval.
    Interval(TimeInterval),
    /// A list of time intervals.
    Intervals(Vec<TimeInterval>),
    /// A nested object.
    Object(Object),
    /// A value holding over one interval.
    IntervalValue(Box<IntervalEntry>),
    /// Values holding over successive intervals.
    IntervalValues(Vec<IntervalEntry>),
    /// Custom properties, in order.
    Properties(Vec<(String, FieldValue)>),
    /// Raw JSON.
    Json(serde_json::Value),
}

/// The canonical form of an [`IntervalValue`].
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalEntry {
    /// When the value holds.
    pub interval: TimeInterval,
    /// The key the value is emitted under, unless it is an object.
    pub key: &'static str,
    /// The value.
    pub value: FieldValue,
}

/// An immutable instance of a value class.
#[derive(Debug, Clone)]
pub struct Object {
    class: Arc<ValueClass>,
    values: Vec<Option<FieldValue>>,
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.class.name == other.class.name && self.values == other.values
    }
}

impl Object {
    /// The object's class.
    #[must_use]
    pub fn class(&self) -> &ValueClass {
        &self.class
    }

    /// The object's class name.
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        self.class.name
    }

    /// The value of a field, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.class
            .position(name)
            .and_then(|i| self.values[i].as_ref())
    }

    /// Whether a field is set.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The set fields in emission order.
    pub fn fields(&self) -> impl Iterator<Item = (&CompiledField, &FieldValue)> {
        self.class
            .fields
            .iter()
            .zip(&self.values)
            .filter_map(|(field, value)| value.as_ref().map(|v| (field, v)))
    }
}

/// Collects the inputs of one object.
///
/// Errors are deferred to [`Builder::finish`].
#[derive(Debug)]
#[must_use]
pub struct Builder {
    class: Option<Arc<ValueClass>>,
    requested: String,
    inputs: Vec<(String, Input)>,
}

impl Builder {
    pub(crate) fn new(class: Option<Arc<ValueClass>>, requested: &str) -> Self {
        Self {
            class,
            requested: requested.to_owned(),
            inputs: Vec::new(),
        }
    }

    /// Sets a field.
    pub fn with(mut self, name: &str, value: impl Into<Input>) -> Self {
        self.inputs.push((name.to_owned(), value.into()));
        self
    }

    /// Sets a field when `value` is `Some`.
    pub fn with_opt<V: Into<Input>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    /// Whether a field has been given.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.inputs.iter().any(|(n, _)| n == name)
    }

    /// The requested class name.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.requested
    }

    /// Normalizes, defaults and validates the inputs.
    ///
    /// When the class has a `delete` field set to `true`, every field except
    /// `id` and `delete` is dropped and neither defaults nor rules apply.
    ///
    /// # Errors
    ///
    /// `UnknownClass`, `UnknownField`, `DuplicateField`, `TypeMismatch`,
    /// `Shape` or `Invalid` for bad inputs; `MissingField`,
    /// `ConflictingFields`, `MissingAlternative` or `MissingDependency` when
    /// a rule fails.
    pub fn finish(self) -> Result<Object> {
        let Builder {
            class,
            requested,
            inputs,
        } = self;
        let class = class.ok_or(Error::UnknownClass(requested))?;

        let mut slots: Vec<Option<Input>> = vec![None; class.fields.len()];
        for (name, input) in inputs {
            let Some(i) = class.position(&name) else {
                return Err(Error::UnknownField {
                    class: class.name,
                    field: name,
                });
            };
            if slots[i].is_some() {
                return Err(Error::DuplicateField {
                    class: class.name,
                    field: class.fields[i].name,
                });
            }
            slots[i] = Some(input);
        }

        let deleted = class
            .position("delete")
            .is_some_and(|i| matches!(slots[i], Some(Input::Bool(true))));
        if deleted {
            for (slot, field) in slots.iter_mut().zip(&class.fields) {
                if field.name != "id" && field.name != "delete" {
                    *slot = None;
                }
            }
        }

        let mut values = Vec::with_capacity(slots.len());
        for (slot, field) in slots.into_iter().zip(&class.fields) {
            let input = match slot {
                Some(input) => Some(input),
                None if !deleted => default_input(field.default),
                None => None,
            };
            let value = input
                .map(|input| convert(field, input).map_err(|e| e.at(class.name, field.name)))
                .transpose()?;
            values.push(value);
        }

        if !deleted {
            validate::check(&class, &values)?;
        }
        Ok(Object { class, values })
    }
}

fn default_input(default: DefaultValue) -> Option<Input> {
    match default {
        DefaultValue::None => None,
        DefaultValue::Bool(b) => Some(Input::Bool(b)),
        DefaultValue::Number(n) => Some(Input::Number(n)),
        DefaultValue::Str(s) => Some(Input::Text(s.to_owned())),
    }
}

fn interval_key(field: &CompiledField) -> &'static str {
    match field.kind {
        FieldKind::Boolean => "boolean",
        FieldKind::Number => "number",
        FieldKind::Text => "string",
        FieldKind::Uri => "uri",
        FieldKind::Reference => "reference",
        FieldKind::Instant => "date",
        FieldKind::Tuple(shape) => shape.key(),
        FieldKind::List(shape) => shape.key(),
        FieldKind::Interval
        | FieldKind::Enumerated(_)
        | FieldKind::Nested(_)
        | FieldKind::Properties => field.name,
    }
}

fn convert(field: &CompiledField, input: Input) -> Result<FieldValue, ValueError> {
    match input {
        Input::IntervalValue(entry) => {
            let IntervalValue { interval, value } = *entry;
            Ok(FieldValue::IntervalValue(Box::new(interval_entry(
                field, interval, value,
            )?)))
        }
        Input::IntervalValues(entries) => entries
            .into_iter()
            .map(|e| interval_entry(field, e.interval, e.value))
            .collect::<Result<Vec<_>, _>>()
            .map(FieldValue::IntervalValues),
        input => convert_plain(field, input),
    }
}

fn interval_entry(
    field: &CompiledField,
    interval: TimeInterval,
    value: Input,
) -> Result<IntervalEntry, ValueError> {
    if matches!(value, Input::IntervalValue(_) | Input::IntervalValues(_)) {
        return Err(ValueError::Invalid(
            "interval values cannot be nested".to_owned(),
        ));
    }
    let value = convert_plain(field, value)?;
    if let FieldValue::Object(object) = &value {
        if object.is_set("interval") {
            return Err(ValueError::Invalid(format!(
                "a {} with its own interval cannot be wrapped in an interval value",
                object.class_name()
            )));
        }
    }
    Ok(IntervalEntry {
        interval,
        key: interval_key(field),
        value,
    })
}

fn convert_plain(field: &CompiledField, input: Input) -> Result<FieldValue, ValueError> {
    match (field.kind, input) {
        (FieldKind::Boolean, Input::Bool(b)) => Ok(FieldValue::Bool(b)),
        (FieldKind::Number, Input::Number(n)) => {
            check_finite(&[n])?;
            Ok(if field.interpolatable {
                FieldValue::Samples(Samples::Constant(vec![n]))
            } else {
                FieldValue::Number(n)
            })
        }
        (FieldKind::Number, Input::Numbers(values)) if field.interpolatable => {
            check_finite(&values)?;
            Samples::from_flat(&values, 1).map(FieldValue::Samples)
        }
        (FieldKind::Number, Input::Samples(samples)) => tagged(field, samples, 1, None),
        (FieldKind::Text, Input::Text(text)) => Ok(FieldValue::Text(text)),
        (FieldKind::Uri, Input::Text(text)) => {
            check_uri(&text)?;
            Ok(FieldValue::Text(text))
        }
        (FieldKind::Reference, Input::Text(text)) => {
            check_reference(&text)?;
            Ok(FieldValue::Text(text))
        }
        (FieldKind::Instant, Input::Instant(instant)) => Ok(FieldValue::Instant(instant)),
        (FieldKind::Instant, Input::Text(text)) => Instant::parse(&text).map(FieldValue::Instant),
        (FieldKind::Interval, Input::Interval(interval)) => Ok(FieldValue::Interval(interval)),
        (FieldKind::Interval, Input::Text(text)) => {
            TimeInterval::parse(&text).map(FieldValue::Interval)
        }
        (FieldKind::Interval, Input::Intervals(intervals)) => {
            Ok(FieldValue::Intervals(intervals))
        }
        (FieldKind::Tuple(shape), Input::Numbers(values)) => tuple(field, shape, values),
        (FieldKind::Tuple(shape), Input::Samples(samples)) => {
            tagged(field, samples, shape.arity(), Some(shape))
        }
        (FieldKind::List(shape), Input::Numbers(values)) => {
            shape.check(&values)?;
            Ok(FieldValue::Numbers(values))
        }
        (FieldKind::Enumerated(expected), Input::Member { enumeration, raw })
            if enumeration.name == expected.name =>
        {
            member(expected, raw)
        }
        (FieldKind::Enumerated(expected), Input::Text(raw)) => member(expected, &raw),
        (FieldKind::Nested(class), Input::Object(object)) if object.class_name() == class => {
            Ok(FieldValue::Object(object))
        }
        (FieldKind::Properties, Input::Properties(pairs)) => properties(pairs),
        (FieldKind::Properties, Input::Json(value)) if value.is_object() => {
            Ok(FieldValue::Json(value))
        }
        (kind, input) => Err(ValueError::Mismatch {
            expected: kind.describe(),
            found: input.kind_name(),
        }),
    }
}

fn tuple(
    field: &CompiledField,
    shape: TupleShape,
    values: Vec<f64>,
) -> Result<FieldValue, ValueError> {
    if values.len() == shape.arity() {
        shape.check(&values)?;
        return Ok(if field.interpolatable {
            FieldValue::Samples(Samples::Constant(values))
        } else {
            FieldValue::Numbers(values)
        });
    }
    if !field.interpolatable {
        return Err(ValueError::Shape {
            expected: shape.arity().to_string(),
            found: values.len(),
        });
    }
    let samples = Samples::from_flat(&values, shape.arity())?;
    if let Samples::Tagged(samples) = &samples {
        for sample in samples {
            shape.check(&sample.values)?;
        }
    }
    Ok(FieldValue::Samples(samples))
}

fn tagged(
    field: &CompiledField,
    samples: Vec<Sample>,
    arity: usize,
    shape: Option<TupleShape>,
) -> Result<FieldValue, ValueError> {
    if !field.interpolatable {
        return Err(ValueError::Invalid(
            "time-tagged samples given for a field that is not interpolatable".to_owned(),
        ));
    }
    if samples.is_empty() {
        return Err(ValueError::Shape {
            expected: "at least one sample".to_owned(),
            found: 0,
        });
    }
    for sample in &samples {
        if let TimeTag::Seconds(t) = sample.time {
            check_finite(&[t])?;
        }
        match shape {
            Some(shape) => shape.check(&sample.values)?,
            None if sample.values.len() != arity => {
                return Err(ValueError::Shape {
                    expected: arity.to_string(),
                    found: sample.values.len(),
                })
            }
            None => check_finite(&sample.values)?,
        }
    }
    Ok(FieldValue::Samples(Samples::Tagged(samples)))
}

fn member(enumeration: &'static Enumeration, raw: &str) -> Result<FieldValue, ValueError> {
    if enumeration.contains(raw) {
        Ok(FieldValue::Text(raw.to_owned()))
    } else {
        Err(ValueError::Invalid(format!(
            "`{raw}` is not a member of {}",
            enumeration.name
        )))
    }
}

fn check_uri(text: &str) -> Result<(), ValueError> {
    let has_scheme = text.split_once("://").is_some_and(|(scheme, rest)| {
        scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
            && !rest.is_empty()
    });
    if has_scheme || text.starts_with("data:") {
        Ok(())
    } else {
        Err(ValueError::Invalid(format!(
            "`{text}` is neither an absolute URI nor a data URL"
        )))
    }
}

fn check_reference(text: &str) -> Result<(), ValueError> {
    match text.split_once('#') {
        Some((id, property)) if !id.is_empty() && !property.is_empty() => Ok(()),
        _ => Err(ValueError::Invalid(format!(
            "`{text}` is not a reference of the form id#property"
        ))),
    }
}

/// Normalizes a bag of custom properties. Names must be unique.
fn properties(pairs: Vec<(String, Input)>) -> Result<FieldValue, ValueError> {
    let mut seen = HashSet::with_capacity(pairs.len());
    let mut out = Vec::with_capacity(pairs.len());
    for (name, value) in pairs {
        if !seen.insert(name.clone()) {
            return Err(ValueError::Invalid(format!(
                "custom property `{name}` given more than once"
            )));
        }
        out.push((name, custom(value)?));
    }
    Ok(FieldValue::Properties(out))
}

/// Normalizes a custom property value.
fn custom(input: Input) -> Result<FieldValue, ValueError> {
    match input {
        Input::Bool(b) => Ok(FieldValue::Bool(b)),
        Input::Number(n) => {
            check_finite(&[n])?;
            Ok(FieldValue::Number(n))
        }
        Input::Text(text) => Ok(FieldValue::Text(text)),
        Input::Numbers(values) => {
            check_finite(&values)?;
            Ok(FieldValue::Numbers(values))
        }
        Input::Instant(instant) => Ok(FieldValue::Instant(instant)),
        Input::Interval(interval) => Ok(FieldValue::Interval(interval)),
        Input::Intervals(intervals) => Ok(FieldValue::Intervals(intervals)),
        Input::Member { raw, .. } => Ok(FieldValue::Text(raw.to_owned())),
        Input::Object(object) => Ok(FieldValue::Object(object)),
        Input::Properties(pairs) => properties(pairs),
        Input::Json(value) => Ok(FieldValue::Json(value)),
        input @ (Input::Samples(_) | Input::IntervalValue(_) | Input::IntervalValues(_)) => {
            Err(ValueError::Mismatch {
                expected: "a custom property value",
                found: input.kind_name(),
            })
        }
    }
}
