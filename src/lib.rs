//! Deterministic content-slot allocation for fixed-capacity display containers.
//!
//! `slate-core` chooses which posts fill a container from a larger candidate
//! pool. One pass guarantees content-type diversity (the best item of each
//! recognized type, in configured type order); a second pass backfills the
//! remaining slots by trending status, then recency. Allocation is pure:
//! identical pool, capacity and configuration always produce the identical
//! slate, down to its content-hash version.
//!
//! Around the core, [`allocation`] defines the collaborator traits for
//! candidate supply, capacity lookup and slate consumption, and
//! [`placement`] persists slates as per-item display ranks.

pub mod allocation;
pub mod config;
pub mod content;
pub mod placement;
pub mod selection;
pub mod types;

pub use config::{AllocationConfig, ConfigError};
pub use content::{ContentItem, ContentType};
pub use selection::SlateBuilder;
pub use types::{Capacity, Slate, SlateError};
