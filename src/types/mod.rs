pub mod identifiers;
pub mod slate;

pub use identifiers::{ContainerId, ItemId, SlateVersion};
pub use slate::{Capacity, SelectionRound, Slate, SlateEntry, SlateError, SlateMetadata};
