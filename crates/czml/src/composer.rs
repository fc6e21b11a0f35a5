//! Packet composition with injected identifiers.

use tracing::trace;

use crate::error::Result;
use crate::ids::{IdGenerator, UuidV4};
use crate::object::{Builder, Input};
use crate::packet::{Packet, PACKET, PREAMBLE};
use crate::registry::Registry;
use crate::Document;

/// Builds packets against a registry, assigning identifiers from `G` to
/// packets built without one.
#[derive(Debug)]
pub struct Composer<'r, G = UuidV4> {
    registry: &'r Registry,
    ids: G,
}

impl<'r> Composer<'r> {
    /// A composer generating random UUIDs.
    #[must_use]
    pub fn new(registry: &'r Registry) -> Self {
        Self::with_ids(registry, UuidV4)
    }
}

impl<'r, G: IdGenerator> Composer<'r, G> {
    /// A composer drawing identifiers from `ids`.
    pub fn with_ids(registry: &'r Registry, ids: G) -> Self {
        Self { registry, ids }
    }

    /// The registry packets are built against.
    #[must_use]
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Starts a packet.
    pub fn packet(&self) -> PacketBuilder<'_, G> {
        PacketBuilder {
            ids: Some(&self.ids),
            builder: self.registry.build(PACKET),
        }
    }

    /// Starts the preamble; its `id` defaults to `"document"`.
    pub fn preamble(&self) -> PacketBuilder<'_, G> {
        PacketBuilder {
            ids: None,
            builder: self.registry.build(PREAMBLE),
        }
    }

    /// Assembles packets into a document.
    ///
    /// # Errors
    ///
    /// `DocumentOrder` if a preamble is not first.
    pub fn document(&self, packets: Vec<Packet>) -> Result<Document> {
        Document::new(packets)
    }
}

/// Collects the properties of one packet.
#[derive(Debug)]
#[must_use]
pub struct PacketBuilder<'c, G> {
    ids: Option<&'c G>,
    builder: Builder,
}

impl<G: IdGenerator> PacketBuilder<'_, G> {
    /// Sets a property.
    pub fn with(mut self, name: &str, value: impl Into<Input>) -> Self {
        self.builder = self.builder.with(name, value);
        self
    }

    /// Sets a property when `value` is `Some`.
    pub fn with_opt<V: Into<Input>>(mut self, name: &str, value: Option<V>) -> Self {
        self.builder = self.builder.with_opt(name, value);
        self
    }

    /// Builds the packet, generating an identifier if none was given.
    ///
    /// # Errors
    ///
    /// Any construction error of the underlying object.
    pub fn finish(self) -> Result<Packet> {
        let mut builder = self.builder;
        if let Some(ids) = self.ids {
            if !builder.has("id") {
                let id = ids.generate();
                trace!(%id, "generated packet id");
                builder = builder.with("id", id);
            }
        }
        Packet::from_object(builder.finish()?)
    }
}
