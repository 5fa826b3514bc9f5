use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::ContentType;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("At least one recognized content type is required")]
    EmptyRecognizedTypes,
    #[error("Content type listed more than once: {0}")]
    RepeatedType(ContentType),
}

// Serializable and comparable; the order of `recognized_types` is the
// order the diversity round walks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationConfig {
    pub version: String,
    pub recognized_types: Vec<ContentType>,
}

impl AllocationConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            recognized_types: vec![
                ContentType::News,
                ContentType::ExpertOpinion,
                ContentType::ResearchReport,
                ContentType::Infographic,
                ContentType::Interview,
            ],
        }
    }

    pub fn with_recognized_types(types: impl IntoIterator<Item = ContentType>) -> Self {
        Self {
            recognized_types: types.into_iter().collect(),
            ..Self::v0()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: AllocationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recognized_types.is_empty() {
            return Err(ConfigError::EmptyRecognizedTypes);
        }

        let mut seen = BTreeSet::new();
        for content_type in &self.recognized_types {
            if !seen.insert(content_type) {
                return Err(ConfigError::RepeatedType(content_type.clone()));
            }
        }
        Ok(())
    }
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self::v0()
    }
}
