//! The storage contract shared by every backend.

use std::path::Path;

use crate::error::StoreError;
use crate::format::StoreFormat;
use crate::model::{Collection, Movie};

/// Record access over one flat file.
///
/// A store reads its file once when it is opened and keeps the collection
/// in memory. Mutations work on that cached collection, rewrite the whole
/// file, and only then replace the cache, so a failed call changes neither.
/// The file is never re-read before a mutation: edits made by another
/// process or another store on the same path are overwritten by the next
/// successful save.
pub trait MovieStore {
    fn format(&self) -> StoreFormat;

    /// Path of the backing file.
    fn path(&self) -> &Path;

    /// Display label attached to the store, if any. It never reaches the file.
    fn label(&self) -> Option<&str> {
        None
    }

    /// Read and parse the whole backing file.
    ///
    /// This does not touch the cached collection.
    fn load(&self) -> Result<Collection, StoreError>;

    /// The cached collection as of the last successful save.
    fn snapshot(&self) -> &Collection;

    fn get(&self, title: &str) -> Option<&Movie> {
        self.snapshot().get(title)
    }

    /// Insert a new record. Fails with [`StoreError::AlreadyExists`] if the
    /// title is taken; nothing is written in that case.
    fn add(&mut self, title: &str, year: i64, rating: f64, poster: &str) -> Result<(), StoreError>;

    /// Remove a record and return it.
    fn delete(&mut self, title: &str) -> Result<Movie, StoreError>;

    /// Overwrite the rating of an existing record, leaving its other fields.
    fn update(&mut self, title: &str, rating: f64) -> Result<(), StoreError>;
}

// The helpers below compute the next collection without touching the current
// one; backends persist the result and then swap it in.

pub(crate) fn with_added(
    movies: &Collection,
    title: &str,
    movie: Movie,
) -> Result<Collection, StoreError> {
    if movies.contains_key(title) {
        return Err(StoreError::AlreadyExists(title.to_string()));
    }
    let mut next = movies.clone();
    next.insert(title.to_string(), movie);
    Ok(next)
}

pub(crate) fn without(movies: &Collection, title: &str) -> Result<(Collection, Movie), StoreError> {
    let mut next = movies.clone();
    let removed = next
        .remove(title)
        .ok_or_else(|| StoreError::TitleNotFound(title.to_string()))?;
    Ok((next, removed))
}

pub(crate) fn with_rating(
    movies: &Collection,
    title: &str,
    rating: f64,
) -> Result<Collection, StoreError> {
    let mut next = movies.clone();
    let movie = next
        .get_mut(title)
        .ok_or_else(|| StoreError::TitleNotFound(title.to_string()))?;
    movie.set_rating(rating);
    Ok(next)
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
