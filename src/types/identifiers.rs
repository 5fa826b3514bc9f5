use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Opaque identifier of a content item. Unique within a candidate pool.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a display container (a context/sector page, a homepage rail, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(String);

impl ContainerId {
    pub fn new(id: impl Into<String>) -> Self {
        ContainerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContainerId {
    fn from(id: &str) -> Self {
        ContainerId(id.to_string())
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash of an ordered slate.
///
/// Computed as `sha256` over each item id followed by `\n`, in slate order.
/// Two slates share a version exactly when they hold the same ids in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlateVersion(String);

impl SlateVersion {
    pub fn from_ids<'a, I>(ids: I) -> Self
    where
        I: IntoIterator<Item = &'a ItemId>,
    {
        let mut hasher = Sha256::new();
        for id in ids {
            hasher.update(id.as_str().as_bytes());
            hasher.update(b"\n");
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        SlateVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 hex characters of the digest, without the algorithm prefix.
    pub fn short(&self) -> &str {
        let digest = self.0.strip_prefix("sha256:").unwrap_or(&self.0);
        &digest[..digest.len().min(12)]
    }
}

impl fmt::Display for SlateVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
