pub mod content_type;
pub mod item;

pub use crate::types::identifiers::ItemId;
pub use content_type::ContentType;
pub use item::ContentItem;
