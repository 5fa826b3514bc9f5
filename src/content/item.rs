use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content_type::ContentType;
use crate::types::identifiers::ItemId;

/// A post candidate. Owned by the caller; allocation only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    pub content_type: ContentType,
    pub is_trending: bool,
    pub published_at: DateTime<Utc>,
}

impl ContentItem {
    pub fn new(
        id: impl Into<ItemId>,
        content_type: impl Into<ContentType>,
        is_trending: bool,
        published_at: DateTime<Utc>,
    ) -> Self {
        ContentItem {
            id: id.into(),
            content_type: content_type.into(),
            is_trending,
            published_at,
        }
    }
}
