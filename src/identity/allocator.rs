use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier assigned to a drawable object when it is constructed.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
)]
#[serde(transparent)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Raw integer value, as written to scene files.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

static GLOBAL: IdAllocator = IdAllocator::new();

/// Source of unique, strictly increasing [`ObjectId`]s.
///
/// Every drawable constructor takes an allocator by reference and consumes exactly one id
/// from it. The counter is atomic, so one allocator can be shared between threads without
/// producing duplicates. Ids are never reused, even when the object they were assigned to
/// is dropped.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    /// A fresh allocator whose first id is `0`.
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// The process-wide allocator. Its first id is `0` on process start.
    pub fn global() -> &'static IdAllocator {
        &GLOBAL
    }

    /// Take the next id.
    pub fn next_id(&self) -> ObjectId {
        let id = self.next.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(id, "allocated object id");
        ObjectId(id)
    }

    /// The id the next call to [`IdAllocator::next_id`] will return, without consuming it.
    pub fn peek(&self) -> ObjectId {
        ObjectId(self.next.load(Ordering::Relaxed))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/identity/allocator.rs"]
mod tests;
