//! Movie record and collection types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// All records of one store, keyed by title.
///
/// Titles are case-sensitive and never normalized. Iteration order is sorted
/// by title, which keeps rewritten files deterministic.
pub type Collection = BTreeMap<String, Movie>;

/// One movie's attributes. The title lives in the [`Collection`] key.
///
/// Every field is optional because JSON files written by hand may omit any
/// of them. Keys this type does not know about are kept in `extra` so a
/// rewrite does not drop them. A standard key holding `null` is kept there
/// too, with the typed field left empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Movie {
    /// Build a record with all three standard fields present.
    pub fn new(year: i64, rating: f64, poster: impl Into<String>) -> Self {
        Self {
            year: Some(year),
            rating: Some(rating),
            poster: Some(poster.into()),
            extra: serde_json::Map::new(),
        }
    }

    /// Set the rating, replacing a `null` rating kept in `extra`.
    pub fn set_rating(&mut self, rating: f64) {
        self.extra.remove("rating");
        self.rating = Some(rating);
    }

    /// Whether year, rating and poster are all present.
    pub fn is_complete(&self) -> bool {
        self.year.is_some() && self.rating.is_some() && self.poster.is_some()
    }
}
