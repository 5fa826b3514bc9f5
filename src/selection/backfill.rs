use crate::content::ContentItem;
use crate::types::slate::{Pick, SelectionRound};

pub(crate) struct BackfillResult<'a> {
    pub(crate) selected: Vec<Pick<'a>>,
    pub(crate) items_selected: usize,
    pub(crate) items_excluded_by_capacity: usize,
}

/// Take ranked leftovers in order until `remaining` slots are filled.
pub(crate) fn apply_capacity<'a>(ranked_leftovers: Vec<&'a ContentItem>, remaining: usize) -> BackfillResult<'a> {
    let mut selected = Vec::with_capacity(remaining.min(ranked_leftovers.len()));
    let mut items_excluded_by_capacity = 0;

    for item in ranked_leftovers {
        if selected.len() < remaining {
            selected.push(Pick {
                item,
                round: SelectionRound::Backfill,
            });
        } else {
            items_excluded_by_capacity += 1;
        }
    }

    BackfillResult {
        items_selected: selected.len(),
        selected,
        items_excluded_by_capacity,
    }
}
