//! CSV backend.
//!
//! The file has the fixed header `title,rating,year,poster` followed by one
//! row per movie. Every row must carry all four columns; `rating` must parse
//! as a float and `year` as an integer (surrounding spaces allowed) or the
//! whole load fails.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::StoreError;
use crate::format::StoreFormat;
use crate::model::{Collection, Movie};
use crate::persist;
use crate::store::{self, MovieStore};

/// Column names, in file order.
pub const CSV_HEADER: [&str; 4] = ["title", "rating", "year", "poster"];

/// One CSV row. Field order matches [`CSV_HEADER`].
///
/// Text columns are taken verbatim, empty strings included. Numeric columns
/// may carry surrounding whitespace.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    title: String,
    #[serde(deserialize_with = "trimmed_number")]
    rating: f64,
    #[serde(deserialize_with = "trimmed_number")]
    year: i64,
    poster: String,
}

fn trimmed_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim()
        .parse()
        .map_err(|e| D::Error::custom(format!("invalid number '{raw}': {e}")))
}

impl CsvRow {
    fn from_entry(path: &Path, title: &str, movie: &Movie) -> Result<Self, StoreError> {
        match (movie.rating, movie.year, movie.poster.as_ref()) {
            (Some(rating), Some(year), Some(poster)) => Ok(Self {
                title: title.to_string(),
                rating,
                year,
                poster: poster.clone(),
            }),
            _ => Err(StoreError::malformed(
                path,
                format!("'{title}' is missing a column required by CSV"),
            )),
        }
    }
}

/// A [`MovieStore`] backed by a CSV file.
#[derive(Debug)]
pub struct CsvStore {
    path: PathBuf,
    movies: Collection,
}

impl CsvStore {
    /// Open an existing CSV store and read it into memory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let movies = read_collection(&path)?;
        log::debug!("Loaded {} movies from {}", movies.len(), path.display());
        Ok(Self { path, movies })
    }

    /// Write a header-only CSV file at `path` unless a file is already there.
    pub fn init(path: &Path) -> Result<bool, StoreError> {
        let text = render(path, &Collection::new())?;
        persist::create_if_missing(path, text.as_bytes())
    }

    fn save(&self, movies: &Collection) -> Result<(), StoreError> {
        let text = render(&self.path, movies)?;
        persist::write_atomic(&self.path, text.as_bytes())?;
        log::debug!("Saved {} movies to {}", movies.len(), self.path.display());
        Ok(())
    }
}

impl MovieStore for CsvStore {
    fn format(&self) -> StoreFormat {
        StoreFormat::Csv
    }

    fn path(&self) -> &Path {
        &self.path
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

/// Parse CSV text into a collection. `path` is only used in error messages.
///
/// A title that appears twice keeps the values of its last row.
pub fn parse(path: &Path, text: &str) -> Result<Collection, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| StoreError::malformed(path, e.to_string()))?;
    if headers.iter().ne(CSV_HEADER) {
        return Err(StoreError::malformed(
            path,
            format!(
                "expected header '{}', found '{}'",
                CSV_HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        ));
    }

    let mut movies = Collection::new();
    for result in reader.deserialize::<CsvRow>() {
        let row = result.map_err(|e| StoreError::malformed(path, e.to_string()))?;
        movies.insert(row.title, Movie::new(row.year, row.rating, row.poster));
    }
    Ok(movies)
}

/// Render a collection as CSV: header first, then one row per movie in
/// collection order.
pub fn render(path: &Path, movies: &Collection) -> Result<String, StoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| StoreError::malformed(path, e.to_string()))?;
    for (title, movie) in movies {
        let row = CsvRow::from_entry(path, title, movie)?;
        writer
            .serialize(row)
            .map_err(|e| StoreError::malformed(path, e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| StoreError::malformed(path, e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| StoreError::malformed(path, e.to_string()))
}

#[cfg(test)]
#[path = "tests/csv_store_tests.rs"]
mod tests;
