use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a content item.
///
/// The five named variants are the types the default allocation config
/// recognizes. Any other name parses to `Other` and only competes in
/// backfill unless a config lists it explicitly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    News,
    ExpertOpinion,
    ResearchReport,
    Infographic,
    Interview,
    Other(String),
}

impl ContentType {
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::News => "News",
            ContentType::ExpertOpinion => "ExpertOpinion",
            ContentType::ResearchReport => "ResearchReport",
            ContentType::Infographic => "Infographic",
            ContentType::Interview => "Interview",
            ContentType::Other(name) => name,
        }
    }
}

impl From<&str> for ContentType {
    fn from(name: &str) -> Self {
        match name {
            "News" => ContentType::News,
            "ExpertOpinion" => ContentType::ExpertOpinion,
            "ResearchReport" => ContentType::ResearchReport,
            "Infographic" => ContentType::Infographic,
            "Interview" => ContentType::Interview,
            other => ContentType::Other(other.to_string()),
        }
    }
}

impl From<String> for ContentType {
    fn from(name: String) -> Self {
        ContentType::from(name.as_str())
    }
}

impl From<ContentType> for String {
    fn from(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Other(name) => name,
            named => named.as_str().to_string(),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
