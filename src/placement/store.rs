// Single writer per root directory. Readers see either the previous or the
// new file for a placement, never a partial one.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

use super::placement::{placement_key, Placement};
use crate::allocation::SlateConsumer;
use crate::types::identifiers::{ContainerId, SlateVersion};
use crate::types::slate::Slate;

const MANIFEST_FILE: &str = "manifest.json";
const PLACEMENTS_DIR: &str = "placements";

#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Placement version mismatch for {key}: manifest says {expected}, ranks hash to {actual}")]
    VersionMismatch {
        key: String,
        expected: SlateVersion,
        actual: SlateVersion,
    },
    #[error("Placement key mismatch: requested {expected}, file holds {actual}")]
    KeyMismatch { expected: String, actual: String },
    #[error("Placement filename collision: {0}")]
    FilenameCollision(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestPlacementEntry {
    pub container: ContainerId,
    pub publish_date: NaiveDate,
    pub slate_version: SlateVersion,
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementManifest {
    pub updated_at: DateTime<Utc>, // informational only
    pub placement_count: usize,
    pub placements: BTreeMap<String, ManifestPlacementEntry>,
}

impl PlacementManifest {
    fn empty() -> Self {
        Self {
            updated_at: Utc::now(),
            placement_count: 0,
            placements: BTreeMap::new(),
        }
    }

    pub fn get(&self, container: &ContainerId, publish_date: NaiveDate) -> Option<&ManifestPlacementEntry> {
        self.placements.get(&placement_key(container, publish_date))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

/// Directory-backed store of placements.
///
/// Layout:
/// - `manifest.json`: every placement key mapped to its file and slate version
/// - `placements/<container hash>-<date>.json`: one placement per file
#[derive(Debug, Clone)]
pub struct PlacementStore {
    root: PathBuf,
}

impl PlacementStore {
    pub fn open(root: &Path) -> Result<Self, PlacementError> {
        fs::create_dir_all(root.join(PLACEMENTS_DIR))?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> Result<PlacementManifest, PlacementError> {
        let path = self.root.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(PlacementManifest::empty());
        }
        let f = fs::File::open(path)?;
        Ok(serde_json::from_reader(f)?)
    }

    pub fn write(&self, placement: &Placement) -> Result<WriteOutcome, PlacementError> {
        let mut manifest = self.manifest()?;
        let key = placement.key();

        if let Some(existing) = manifest.placements.get(&key) {
            if existing.slate_version == placement.slate_version
                && self.root.join(&existing.file).exists()
            {
                debug!(%key, "placement unchanged");
                return Ok(WriteOutcome::Unchanged);
            }
        }

        let file = placement_file(&placement.container, placement.publish_date);
        ensure_file_unclaimed(&manifest, &key, &file)?;
        write_atomic(&self.root.join(&file), &serde_json::to_vec_pretty(placement)?)?;

        manifest.placements.insert(
            key.clone(),
            ManifestPlacementEntry {
                container: placement.container.clone(),
                publish_date: placement.publish_date,
                slate_version: placement.slate_version.clone(),
                file,
            },
        );
        manifest.placement_count = manifest.placements.len();
        manifest.updated_at = Utc::now();

        // Manifest last, so it never points at a file that is not there yet
        write_atomic(
            &self.root.join(MANIFEST_FILE),
            &serde_json::to_vec_pretty(&manifest)?,
        )?;

        debug!(%key, version = placement.slate_version.short(), "placement written");
        Ok(WriteOutcome::Written)
    }

    /// Load a placement and verify it against the manifest.
    pub fn load(
        &self,
        container: &ContainerId,
        publish_date: NaiveDate,
    ) -> Result<Option<Placement>, PlacementError> {
        let manifest = self.manifest()?;
        let entry = match manifest.get(container, publish_date) {
            Some(entry) => entry,
            None => return Ok(None),
        };

        let f = fs::File::open(self.root.join(&entry.file))?;
        let placement: Placement = serde_json::from_reader(f)?;

        let expected = placement_key(container, publish_date);
        if placement.key() != expected {
            return Err(PlacementError::KeyMismatch {
                expected,
                actual: placement.key(),
            });
        }

        let actual = placement.computed_version();
        if actual != entry.slate_version || placement.slate_version != entry.slate_version {
            return Err(PlacementError::VersionMismatch {
                key: placement.key(),
                expected: entry.slate_version.clone(),
                actual,
            });
        }

        Ok(Some(placement))
    }
}

impl SlateConsumer for PlacementStore {
    type Error = PlacementError;

    fn accept(
        &self,
        container: &ContainerId,
        publish_date: NaiveDate,
        slate: &Slate,
    ) -> Result<(), Self::Error> {
        let placement = Placement::from_slate(container.clone(), publish_date, slate);
        self.write(&placement).map(|_| ())
    }
}

/// Container ids are free-form, so files are named by a hash fragment of the id.
fn placement_file(container: &ContainerId, publish_date: NaiveDate) -> String {
    let digest = hex::encode(Sha256::digest(container.as_str().as_bytes()));
    format!("{}/{}-{}.json", PLACEMENTS_DIR, &digest[..12], publish_date)
}

/// A file may back only one placement key.
fn ensure_file_unclaimed(
    manifest: &PlacementManifest,
    key: &str,
    file: &str,
) -> Result<(), PlacementError> {
    let claimed = manifest
        .placements
        .iter()
        .any(|(other_key, entry)| other_key != key && entry.file == file);
    if claimed {
        return Err(PlacementError::FilenameCollision(file.to_string()));
    }
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), PlacementError> {
    let temp = path.with_extension("json.tmp");
    fs::write(&temp, bytes)?;
    fs::File::open(&temp)?.sync_all()?;
    fs::rename(&temp, path)?;
    Ok(())
}
