//! Typed, validated construction and deterministic serialization of CZML
//! scene documents.
//!
//! The property catalogue in `czml-spec` is compiled into a [`Registry`] of
//! value classes. Every class shares one constructor, validator and
//! serializer: inputs are normalized to canonical values (numbers become
//! `f64`, tuples are shape-checked, interpolatable values become time-tagged
//! samples), cross-field rules are enforced once at construction, and the
//! resulting immutable objects render with unset fields omitted and fields in
//! declared order.
//!
//! # Entry Point
//!
//! ```
//! use czml::{Composer, Document, Format, Registry, Sequential};
//!
//! # fn main() -> Result<(), czml::Error> {
//! let registry = Registry::standard()?;
//! let composer = Composer::with_ids(registry, Sequential::new("id_"));
//! let position = registry
//!     .build("Position")
//!     .with("cartographicDegrees", [-114, 40, 300_000])
//!     .finish()?;
//! let packet = composer.packet().with("position", position).finish()?;
//! let document = Document::new(vec![composer.preamble().finish()?, packet])?;
//! assert_eq!(
//!     document.render(Format::Compact)?,
//!     r#"[{"id":"document","version":"1.0"},{"id":"id_00","position":{"cartographicDegrees":[-114.0,40.0,300000.0]}}]"#
//! );
//! # Ok(())
//! # }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod composer;
pub mod document;
pub mod error;
pub mod ids;
pub mod object;
pub mod packet;
pub mod registry;
pub mod schema;
pub mod serializer;
pub mod values;

mod validate;

pub use czml_spec as spec;
pub use czml_spec::enums;

pub use composer::{Composer, PacketBuilder};
pub use document::Document;
pub use error::{Error, Result, SchemaError, ValueError};
pub use ids::{IdGenerator, Sequential, UuidV4};
pub use object::{Builder, FieldValue, Input, IntervalValue, Object};
pub use packet::Packet;
pub use registry::Registry;
pub use serializer::Format;
pub use values::{ColorArg, Instant, Sample, TimeInterval};
