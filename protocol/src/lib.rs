//! Wire types for the jService trivia API.
//!
//! Records decode strictly: a missing, null or mistyped field is a decode
//! error rather than a defaulted value. Extra fields the API sends (air dates,
//! clue values, ids) are ignored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base URL of the public jService deployment.
pub const DEFAULT_API_BASE: &str = "https://jservice.io";

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of `GET /api/categories`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub title: String,
    #[serde(alias = "clue_count")]
    pub clues_count: u32,
}

/// Category stub embedded in every clue record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueCategory {
    pub title: String,
}

/// One entry of `GET /api/clues?category=ID`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    pub question: String,
    pub answer: String,
    pub category: ClueCategory,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    base_url: String,
}

impl ApiEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn categories_url(&self, count: u32) -> String {
        format!("{}/api/categories?count={}", self.base_url, count)
    }

    pub fn clues_url(&self, category: CategoryId) -> String {
        format!("{}/api/clues?category={}", self.base_url, category)
    }
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

pub fn decode_categories(body: &str) -> serde_json::Result<Vec<CategoryRecord>> {
    serde_json::from_str(body)
}

pub fn decode_clues(body: &str) -> serde_json::Result<Vec<ClueRecord>> {
    serde_json::from_str(body)
}
