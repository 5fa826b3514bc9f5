use std::cmp::Ordering;

use crate::content::ContentItem;

pub trait PriorityRanker {
    /// `Ordering::Less` means `a` ranks ahead of `b`.
    fn compare(&self, a: &ContentItem, b: &ContentItem) -> Ordering;

    /// Return a new, stably sorted sequence. Items the ranker considers
    /// equal keep their input order.
    fn rank<'a>(&self, items: &[&'a ContentItem]) -> Vec<&'a ContentItem> {
        let mut ranked = items.to_vec();
        ranked.sort_by(|a, b| self.compare(a, b));
        ranked
    }

    fn rank_pool<'a>(&self, pool: &'a [ContentItem]) -> Vec<&'a ContentItem> {
        let refs: Vec<&ContentItem> = pool.iter().collect();
        self.rank(&refs)
    }
}

/// Trending first, then most recently published.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendingRecencyRanker;

impl PriorityRanker for TrendingRecencyRanker {
    fn compare(&self, a: &ContentItem, b: &ContentItem) -> Ordering {
        // Descending on both keys
        b.is_trending
            .cmp(&a.is_trending)
            .then_with(|| b.published_at.cmp(&a.published_at))
    }
}
