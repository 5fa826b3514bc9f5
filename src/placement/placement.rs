use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::identifiers::{ContainerId, ItemId, SlateVersion};
use crate::types::slate::Slate;

/// Stored display position of one item in a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRank {
    pub item_id: ItemId,
    pub rank: usize,
}

/// The persisted form of a slate: display ranks for one container and publish date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub container: ContainerId,
    pub publish_date: NaiveDate,
    pub slate_version: SlateVersion,
    pub ranks: Vec<DisplayRank>,
}

impl Placement {
    pub fn from_slate(container: ContainerId, publish_date: NaiveDate, slate: &Slate) -> Self {
        let ranks = slate
            .entries
            .iter()
            .map(|entry| DisplayRank {
                item_id: entry.id.clone(),
                rank: entry.rank,
            })
            .collect();

        Self {
            container,
            publish_date,
            slate_version: slate.version.clone(),
            ranks,
        }
    }

    /// Recompute the slate version from the stored ranks.
    pub fn computed_version(&self) -> SlateVersion {
        let mut ordered: Vec<&DisplayRank> = self.ranks.iter().collect();
        ordered.sort_by_key(|r| r.rank);
        SlateVersion::from_ids(ordered.into_iter().map(|r| &r.item_id))
    }

    pub fn key(&self) -> String {
        placement_key(&self.container, self.publish_date)
    }
}

pub(crate) fn placement_key(container: &ContainerId, publish_date: NaiveDate) -> String {
    format!("{}@{}", container.as_str(), publish_date)
}
