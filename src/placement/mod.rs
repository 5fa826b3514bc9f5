pub mod placement;
pub mod store;

pub use placement::{DisplayRank, Placement};
pub use store::{ManifestPlacementEntry, PlacementError, PlacementManifest, PlacementStore, WriteOutcome};
