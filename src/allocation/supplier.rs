use std::collections::BTreeMap;
use std::convert::Infallible;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::CandidateSupplier;
use crate::content::ContentItem;
use crate::types::identifiers::ContainerId;

/// Inclusive range of publish dates (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PublishWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    pub fn contains(&self, published_at: &DateTime<Utc>) -> bool {
        let date = published_at.date_naive();
        self.start <= date && date <= self.end
    }
}

/// In-memory candidate pools keyed by container.
///
/// Unknown containers yield an empty pool.
#[derive(Debug, Clone, Default)]
pub struct StaticCandidateSupplier {
    pools: BTreeMap<ContainerId, Vec<ContentItem>>,
}

impl StaticCandidateSupplier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, container: ContainerId, item: ContentItem) {
        self.pools.entry(container).or_default().push(item);
    }

    pub fn with_pool(mut self, container: ContainerId, pool: Vec<ContentItem>) -> Self {
        self.pools.insert(container, pool);
        self
    }
}

impl CandidateSupplier for StaticCandidateSupplier {
    type Error = Infallible;

    fn candidates(
        &self,
        container: &ContainerId,
        window: Option<&PublishWindow>,
    ) -> Result<Vec<ContentItem>, Self::Error> {
        let pool = match self.pools.get(container) {
            Some(pool) => pool,
            None => return Ok(Vec::new()),
        };

        Ok(pool
            .iter()
            .filter(|item| window.map_or(true, |w| w.contains(&item.published_at)))
            .cloned()
            .collect())
    }
}
