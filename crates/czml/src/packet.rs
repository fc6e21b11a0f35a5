//! Packets.

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::object::{FieldValue, Object};

/// Class name of ordinary packets.
pub const PACKET: &str = "Packet";

/// Class name of the preamble packet.
pub const PREAMBLE: &str = "Preamble";

/// One entity's properties plus its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Packet(Object);

impl Packet {
    /// Wraps a constructed `Packet` or `Preamble` object.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` for any other class, `MissingField` if the object has
    /// no `id`.
    pub fn from_object(object: Object) -> Result<Self> {
        let class = object.class_name();
        if class != PACKET && class != PREAMBLE {
            return Err(Error::TypeMismatch {
                class: "Document",
                field: "packets",
                expected: "a Packet or Preamble",
                found: class,
            });
        }
        if !matches!(object.get("id"), Some(FieldValue::Text(_))) {
            return Err(Error::MissingField { class, field: "id" });
        }
        Ok(Self(object))
    }

    /// The packet's identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self.0.get("id") {
            Some(FieldValue::Text(id)) => id,
            _ => "",
        }
    }

    /// Whether this is the preamble.
    #[must_use]
    pub fn is_preamble(&self) -> bool {
        self.0.class_name() == PREAMBLE
    }

    /// The underlying object.
    #[must_use]
    pub fn object(&self) -> &Object {
        &self.0
    }

    /// Unwraps the underlying object.
    #[must_use]
    pub fn into_object(self) -> Object {
        self.0
    }
}

impl Serialize for Packet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Registry;

    #[test]
    fn packets_need_an_id() {
        let registry = Registry::standard().unwrap();
        let object = registry.build(PACKET).with("name", "AGI").finish().unwrap();
        assert!(matches!(
            Packet::from_object(object),
            Err(Error::MissingField { field: "id", .. })
        ));
    }

    #[test]
    fn only_packet_classes_are_packets() {
        let registry = Registry::standard().unwrap();
        let object = registry.build("Point").with("show", true).finish().unwrap();
        assert!(matches!(
            Packet::from_object(object),
            Err(Error::TypeMismatch { found: "Point", .. })
        ));
    }

    #[test]
    fn preamble_carries_the_default_id() {
        let registry = Registry::standard().unwrap();
        let packet = Packet::from_object(registry.build(PREAMBLE).finish().unwrap()).unwrap();
        assert_eq!(packet.id(), "document");
        assert!(packet.is_preamble());
    }
}
