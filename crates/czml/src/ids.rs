//! Packet identifier generators.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Produces fresh packet identifiers.
pub trait IdGenerator {
    /// Returns an identifier not returned before by this generator.
    fn generate(&self) -> String;
}

/// Random version 4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4;

impl IdGenerator for UuidV4 {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// `prefix` followed by a counter, zero-padded to two digits.
#[derive(Debug)]
pub struct Sequential {
    prefix: String,
    next: AtomicU64,
}

impl Sequential {
    /// A generator starting at zero.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for Sequential {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{n:02}", self.prefix)
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn generate(&self) -> String {
        (**self).generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_count_up() {
        let ids = Sequential::new("id_");
        assert_eq!(ids.generate(), "id_00");
        assert_eq!(ids.generate(), "id_01");
    }

    #[test]
    fn uuids_are_unique() {
        let ids = UuidV4;
        let a = ids.generate();
        assert_eq!(a.len(), 36);
        assert_ne!(a, ids.generate());
    }
}
