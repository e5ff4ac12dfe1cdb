//! JSON backend.
//!
//! The file is one object mapping each title to `{year, rating, poster}`:
//!
//! ```text
//! {
//!     "Titanic": {
//!         "year": 1997,
//!         "rating": 9.0,
//!         "poster": "titanic.jpg"
//!     }
//! }
//! ```
//!
//! Any of the three fields may be missing or `null` on read; both are
//! written back as they were found.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::format::StoreFormat;
use crate::model::{Collection, Movie};
use crate::persist;
use crate::store::{self, MovieStore};

/// Content written by [`JsonStore::init`].
const EMPTY_DOCUMENT: &str = "{}\n";

/// A [`MovieStore`] backed by a pretty-printed JSON file.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    label: Option<String>,
    movies: Collection,
}

impl JsonStore {
    /// Open an existing JSON store and read it into memory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let movies = read_collection(&path)?;
        log::debug!("Loaded {} movies from {}", movies.len(), path.display());
        Ok(Self {
            path,
            label: None,
            movies,
        })
    }

    /// Open a store and attach a display label (e.g. a family member's name).
    pub fn with_label(path: impl Into<PathBuf>, label: impl Into<String>) -> Result<Self, StoreError> {
        let mut store = Self::open(path)?;
        store.label = Some(label.into());
        Ok(store)
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    /// Write an empty JSON document at `path` unless a file is already there.
    pub fn init(path: &Path) -> Result<bool, StoreError> {
        persist::create_if_missing(path, EMPTY_DOCUMENT.as_bytes())
    }

    fn save(&self, movies: &Collection) -> Result<(), StoreError> {
        let text = render(&self.path, movies)?;
        persist::write_atomic(&self.path, text.as_bytes())?;
        log::debug!("Saved {} movies to {}", movies.len(), self.path.display());
        Ok(())
    }
}

impl MovieStore for JsonStore {
    fn format(&self) -> StoreFormat {
        StoreFormat::Json
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn load(&self) -> Result<Collection, StoreError> {
        read_collection(&self.path)
    }

    fn snapshot(&self) -> &Collection {
        &self.movies
    }

    fn add(&mut self, title: &str, year: i64, rating: f64, poster: &str) -> Result<(), StoreError> {
        let next = store::with_added(&self.movies, title, Movie::new(year, rating, poster))?;
        self.save(&next)?;
        self.movies = next;
        Ok(())
    }

    fn delete(&mut self, title: &str) -> Result<Movie, StoreError> {
        let (next, removed) = store::without(&self.movies, title)?;
        self.save(&next)?;
        self.movies = next;
        Ok(removed)
    }

    fn update(&mut self, title: &str, rating: f64) -> Result<(), StoreError> {
        let next = store::with_rating(&self.movies, title, rating)?;
        self.save(&next)?;
        self.movies = next;
        Ok(())
    }
}

fn read_collection(path: &Path) -> Result<Collection, StoreError> {
    let text = persist::read_to_string(path)?;
    parse(path, &text)
}

/// Keys with a typed field on [`Movie`].
const STANDARD_KEYS: [&str; 3] = ["year", "rating", "poster"];

/// Parse JSON text into a collection. `path` is only used in error messages.
///
/// A standard key set to `null` stays in the record's `extra` map so the
/// next save writes it back unchanged.
pub fn parse(path: &Path, text: &str) -> Result<Collection, StoreError> {
    let raw: BTreeMap<String, Map<String, Value>> =
        serde_json::from_str(text).map_err(|e| StoreError::malformed(path, e.to_string()))?;

    let mut movies = Collection::new();
    for (title, mut fields) in raw {
        let nulls: Vec<(String, Value)> = STANDARD_KEYS
            .iter()
            .filter_map(|&key| {
                if fields.get(key).is_some_and(Value::is_null) {
                    fields.remove_entry(key)
                } else {
                    None
                }
            })
            .collect();
        let mut movie: Movie = serde_json::from_value(Value::Object(fields))
            .map_err(|e| StoreError::malformed(path, format!("'{title}': {e}")))?;
        movie.extra.extend(nulls);
        movies.insert(title, movie);
    }
    Ok(movies)
}

/// Render a collection with four-space indentation and a trailing newline.
///
/// Non-finite ratings have no JSON representation and are written as `null`.
pub fn render(path: &Path, movies: &Collection) -> Result<String, StoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    movies
        .serialize(&mut ser)
        .map_err(|e| StoreError::malformed(path, e.to_string()))?;
    buf.push(b'\n');
    String::from_utf8(buf).map_err(|e| StoreError::malformed(path, e.to_string()))
}

#[cfg(test)]
#[path = "tests/json_store_tests.rs"]
mod tests;
