//! Documents: ordered packet sequences.

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{Error, Result};
use crate::packet::Packet;

/// An ordered sequence of packets.
///
/// A preamble, if present, is the first packet. Duplicate identifiers are
/// allowed; viewers merge packets that share one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    packets: Vec<Packet>,
}

impl Document {
    /// Assembles a document, keeping packet order.
    ///
    /// # Errors
    ///
    /// `DocumentOrder` if a preamble appears anywhere but first.
    pub fn new(packets: Vec<Packet>) -> Result<Self> {
        if let Some(index) = packets.iter().skip(1).position(Packet::is_preamble) {
            return Err(Error::DocumentOrder { index: index + 1 });
        }
        debug!(
            packets = packets.len(),
            preamble = packets.first().is_some_and(Packet::is_preamble),
            "assembled document"
        );
        Ok(Self { packets })
    }

    /// The packets in order.
    #[must_use]
    pub fn packets(&self) -> &[Packet] {
        &self.packets
    }

    /// Number of packets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.packets.len()
    }

    /// Whether the document has no packets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    /// Looks up the first packet with `id`.
    #[must_use]
    pub fn packet(&self, id: &str) -> Option<&Packet> {
        self.packets.iter().find(|p| p.id() == id)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.packets)
    }
}
