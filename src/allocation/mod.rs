//! Boundary between the allocation core and the systems around it.
//!
//! Candidates come from a [`CandidateSupplier`], capacities from a
//! [`CapacitySource`], and finished slates go to a [`SlateConsumer`].
//! [`SlateAllocator`] runs one allocation through all three.

pub mod catalog;
pub mod supplier;

use std::error::Error as StdError;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use crate::content::ContentItem;
use crate::selection::{PriorityRanker, SlateBuilder, TrendingRecencyRanker};
use crate::types::identifiers::ContainerId;
use crate::types::slate::{Capacity, Slate, SlateError};
pub use catalog::{CatalogError, ContainerCatalog};
pub use supplier::{PublishWindow, StaticCandidateSupplier};

type BoxError = Box<dyn StdError + Send + Sync>;

pub trait CandidateSupplier {
    type Error: StdError + Send + Sync + 'static;

    /// Current pool for `container`, restricted to `window` when given.
    fn candidates(
        &self,
        container: &ContainerId,
        window: Option<&PublishWindow>,
    ) -> Result<Vec<ContentItem>, Self::Error>;
}

pub trait CapacitySource {
    type Error: StdError + Send + Sync + 'static;

    fn capacity(&self, container: &ContainerId) -> Result<i64, Self::Error>;
}

pub trait SlateConsumer {
    type Error: StdError + Send + Sync + 'static;

    fn accept(
        &self,
        container: &ContainerId,
        publish_date: NaiveDate,
        slate: &Slate,
    ) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum AllocationError {
    #[error("Candidate supplier failed for {container}: {source}")]
    Supplier {
        container: ContainerId,
        #[source]
        source: BoxError,
    },
    #[error("Capacity lookup failed for {container}: {source}")]
    Capacity {
        container: ContainerId,
        #[source]
        source: BoxError,
    },
    #[error("Slate consumer failed for {container}: {source}")]
    Consumer {
        container: ContainerId,
        #[source]
        source: BoxError,
    },
    #[error("Invalid candidate pool for {container}: {source}")]
    Slate {
        container: ContainerId,
        #[source]
        source: SlateError,
    },
}

pub struct SlateAllocator<S, K, C, R = TrendingRecencyRanker> {
    supplier: S,
    capacities: K,
    consumer: C,
    builder: SlateBuilder<R>,
}

impl<S, K, C, R> SlateAllocator<S, K, C, R>
where
    S: CandidateSupplier,
    K: CapacitySource,
    C: SlateConsumer,
    R: PriorityRanker,
{
    pub fn new(supplier: S, capacities: K, consumer: C, builder: SlateBuilder<R>) -> Self {
        Self {
            supplier,
            capacities,
            consumer,
            builder,
        }
    }

    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    /// Allocate the slate for one container and publish date, hand it to the
    /// consumer, and return it.
    pub fn allocate(
        &self,
        container: &ContainerId,
        publish_date: NaiveDate,
        window: Option<&PublishWindow>,
    ) -> Result<Slate, AllocationError> {
        let pool = self
            .supplier
            .candidates(container, window)
            .map_err(|e| AllocationError::Supplier {
                container: container.clone(),
                source: Box::new(e),
            })?;

        let raw_capacity = self
            .capacities
            .capacity(container)
            .map_err(|e| AllocationError::Capacity {
                container: container.clone(),
                source: Box::new(e),
            })?;
        if raw_capacity < 0 {
            warn!(%container, raw_capacity, "negative capacity treated as zero");
        }

        let slate = self
            .builder
            .build(&pool, Capacity::from_raw(raw_capacity))
            .map_err(|source| AllocationError::Slate {
                container: container.clone(),
                source,
            })?;

        self.consumer
            .accept(container, publish_date, &slate)
            .map_err(|e| AllocationError::Consumer {
                container: container.clone(),
                source: Box::new(e),
            })?;

        info!(
            %container,
            %publish_date,
            selected = slate.len(),
            considered = pool.len(),
            version = slate.version.short(),
            "slate allocated"
        );

        Ok(slate)
    }
}
