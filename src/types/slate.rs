use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::content::{ContentItem, ContentType};
use crate::types::identifiers::{ItemId, SlateVersion};

/// Maximum number of slots in a display container.
///
/// Raw capacities come from external configuration as signed integers;
/// anything below zero means the container shows nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capacity(usize);

impl Capacity {
    pub fn new(slots: usize) -> Self {
        Capacity(slots)
    }

    pub fn from_raw(raw: i64) -> Self {
        Capacity(usize::try_from(raw.max(0)).unwrap_or(usize::MAX))
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

/// Which pass of the allocation placed an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionRound {
    /// Pool size equalled capacity; the pool was returned as given.
    ExactFit,
    /// Highest-priority item of its type, one per recognized type.
    Diversity,
    /// Globally ranked leftover.
    Backfill,
}

/// One filled slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlateEntry {
    pub id: ItemId,
    pub content_type: ContentType,
    /// 1-based display position.
    pub rank: usize,
    pub round: SelectionRound,
}

/// Metadata describing the outcome of an allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlateMetadata {
    pub capacity: usize,

    pub items_considered: usize,
    pub items_selected: usize,

    pub diversity_picks: usize,
    pub backfill_picks: usize,
    pub items_excluded_by_capacity: usize,

    pub exact_fit: bool,
}

/// The ordered, bounded selection that fills a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slate {
    pub version: SlateVersion,
    pub entries: Vec<SlateEntry>,
    pub allocation: SlateMetadata,
}

impl Slate {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.entries.iter().map(|entry| &entry.id)
    }

    /// Entries placed by the given round, in slate order.
    pub fn round(&self, round: SelectionRound) -> impl Iterator<Item = &SlateEntry> {
        self.entries.iter().filter(move |entry| entry.round == round)
    }

    /// Resolve slate ids back to the pool items they reference.
    /// Ids missing from `pool` are skipped.
    pub fn resolve<'a>(&self, pool: &'a [ContentItem]) -> Vec<&'a ContentItem> {
        let by_id: HashMap<&ItemId, &'a ContentItem> =
            pool.iter().map(|item| (&item.id, item)).collect();

        self.ids().filter_map(|id| by_id.get(id).copied()).collect()
    }
}

/// Internal: an item chosen for a slot, before it is turned into an entry.
/// Holds a reference to the pool item to avoid cloning before the slate is final.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Pick<'a> {
    pub(crate) item: &'a ContentItem,
    pub(crate) round: SelectionRound,
}

#[derive(Debug, thiserror::Error)]
pub enum SlateError {
    #[error("Duplicate item ID in candidate pool: {0}")]
    DuplicateItemId(ItemId),
}
