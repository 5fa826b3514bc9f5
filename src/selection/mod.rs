mod backfill;
pub mod classify;
pub mod ranking;

use std::collections::HashSet;

use tracing::debug;

use crate::config::{AllocationConfig, ConfigError};
use crate::content::ContentItem;
use crate::types::identifiers::SlateVersion;
use crate::types::slate::{
	Capacity, Pick, SelectionRound, Slate, SlateEntry, SlateError, SlateMetadata,
};
pub(crate) use backfill::{apply_capacity, BackfillResult};
pub use classify::{RecognizedTypeClassifier, TypeClassifier, TypeGroups};
pub use ranking::{PriorityRanker, TrendingRecencyRanker};

/// Chooses which candidates fill a fixed-capacity container, and in what order.
///
/// Stateless between calls: the same pool, capacity and config always yield
/// the same slate.
#[derive(Debug, Clone)]
pub struct SlateBuilder<R = TrendingRecencyRanker> {
	config: AllocationConfig,
	classifier: RecognizedTypeClassifier,
	ranker: R,
}

impl Default for SlateBuilder<TrendingRecencyRanker> {
	fn default() -> Self {
		let config = AllocationConfig::v0();
		Self {
			classifier: RecognizedTypeClassifier::new(config.recognized_types.clone()),
			config,
			ranker: TrendingRecencyRanker,
		}
	}
}

impl SlateBuilder<TrendingRecencyRanker> {
	pub fn new(config: AllocationConfig) -> Result<Self, ConfigError> {
		Self::with_ranker(config, TrendingRecencyRanker)
	}
}

impl<R> SlateBuilder<R>
where
	R: PriorityRanker,
{
	pub fn with_ranker(config: AllocationConfig, ranker: R) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self {
			classifier: RecognizedTypeClassifier::new(config.recognized_types.clone()),
			config,
			ranker,
		})
	}

	pub fn config(&self) -> &AllocationConfig {
		&self.config
	}

	pub fn build(&self, pool: &[ContentItem], capacity: Capacity) -> Result<Slate, SlateError> {
		// 0. Reject pools that reuse an id
		ensure_unique_ids(pool)?;

		let limit = capacity.get();

		// 1. Degenerate cases
		if limit == 0 || pool.is_empty() {
			debug!(capacity = limit, pool = pool.len(), "nothing to allocate");
			return Ok(assemble(Vec::new(), limit, pool.len()));
		}

		// 2. Exact fit: pool order, no ranking
		if pool.len() == limit {
			debug!(capacity = limit, "pool exactly fits capacity; keeping pool order");
			let picks = pool
				.iter()
				.map(|item| Pick {
					item,
					round: SelectionRound::ExactFit,
				})
				.collect();
			return Ok(assemble(picks, limit, pool.len()));
		}

		// 3. Diversity round: best remaining item of each type, in type order
		let (groups, unrecognized) = self.classifier.classify(pool).into_parts();

		let mut picks: Vec<Pick> = Vec::with_capacity(limit.min(pool.len()));
		let mut leftovers: Vec<&ContentItem> = Vec::with_capacity(pool.len());

		for (_, group) in &groups {
			let mut ranked = self.ranker.rank(group).into_iter();
			if picks.len() < limit {
				if let Some(best) = ranked.next() {
					picks.push(Pick {
						item: best,
						round: SelectionRound::Diversity,
					});
				}
			}
			leftovers.extend(ranked);
		}
		leftovers.extend(unrecognized);

		let diversity_picks = picks.len();

		// 4. Backfill round: leftovers ranked globally
		let ranked_leftovers = self.ranker.rank(&leftovers);

		debug_assert!(ranked_leftovers
			.windows(2)
			.all(|w| self.ranker.compare(w[0], w[1]) != std::cmp::Ordering::Greater));

		let BackfillResult {
			selected,
			items_selected,
			items_excluded_by_capacity,
		} = apply_capacity(ranked_leftovers, limit - picks.len());
		picks.extend(selected);

		debug!(
			capacity = limit,
			pool = pool.len(),
			diversity_picks,
			backfill_picks = items_selected,
			items_excluded_by_capacity,
			"slate allocated"
		);

		Ok(assemble(picks, limit, pool.len()))
	}
}

fn ensure_unique_ids(pool: &[ContentItem]) -> Result<(), SlateError> {
	let mut seen = HashSet::with_capacity(pool.len());
	for item in pool {
		if !seen.insert(&item.id) {
			return Err(SlateError::DuplicateItemId(item.id.clone()));
		}
	}
	Ok(())
}

fn assemble(picks: Vec<Pick<'_>>, capacity: usize, items_considered: usize) -> Slate {
	let count_round = |round: SelectionRound| picks.iter().filter(|p| p.round == round).count();
	let allocation = SlateMetadata {
		capacity,
		items_considered,
		items_selected: picks.len(),
		diversity_picks: count_round(SelectionRound::Diversity),
		backfill_picks: count_round(SelectionRound::Backfill),
		items_excluded_by_capacity: items_considered - picks.len(),
		exact_fit: picks.iter().any(|p| p.round == SelectionRound::ExactFit),
	};

	let entries: Vec<SlateEntry> = picks
		.into_iter()
		.enumerate()
		.map(|(position, pick)| SlateEntry {
			id: pick.item.id.clone(),
			content_type: pick.item.content_type.clone(),
			rank: position + 1,
			round: pick.round,
		})
		.collect();

	let version = SlateVersion::from_ids(entries.iter().map(|entry| &entry.id));

	Slate {
		version,
		entries,
		allocation,
	}
}
