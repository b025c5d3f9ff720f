//! Per-surface bookkeeping of which owner registered which listeners.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::config::ListenerOptions;
use crate::event::Phase;

/// Identifies the component instance that created an attachment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OwnerId(pub u64);

impl OwnerId {
    /// A fresh id, unique for the lifetime of the process.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        OwnerId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "owner#{}", self.0)
    }
}

/// The three listeners one attachment registered on its target, with the
/// options they were added under. Removal must use the same `capture` flag.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredHandlers<L> {
    pub touchstart: L,
    pub touchmove: L,
    pub touchend: L,
    pub options: ListenerOptions,
}

impl<L> StoredHandlers<L> {
    pub fn get(&self, phase: Phase) -> &L {
        match phase {
            Phase::Start => &self.touchstart,
            Phase::Move => &self.touchmove,
            Phase::End => &self.touchend,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Phase, &L)> {
        Phase::ALL.into_iter().map(move |phase| (phase, self.get(phase)))
    }
}

/// Owner id to listeners, for one target surface.
pub struct AttachmentRegistry<L> {
    entries: HashMap<OwnerId, StoredHandlers<L>>,
}

impl<L> AttachmentRegistry<L> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the entry this owner had before, if any. Other owners are untouched.
    pub fn insert(&mut self, owner: OwnerId, handlers: StoredHandlers<L>) -> Option<StoredHandlers<L>> {
        self.entries.insert(owner, handlers)
    }

    pub fn remove(&mut self, owner: OwnerId) -> Option<StoredHandlers<L>> {
        self.entries.remove(&owner)
    }

    pub fn get(&self, owner: OwnerId) -> Option<&StoredHandlers<L>> {
        self.entries.get(&owner)
    }

    pub fn contains(&self, owner: OwnerId) -> bool {
        self.entries.contains_key(&owner)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered owners, sorted.
    pub fn owners(&self) -> Vec<OwnerId> {
        let mut owners: Vec<OwnerId> = self.entries.keys().copied().collect();
        owners.sort();
        owners
    }
}

impl<L> Default for AttachmentRegistry<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> fmt::Debug for AttachmentRegistry<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachmentRegistry")
            .field("owners", &self.owners())
            .finish()
    }
}
