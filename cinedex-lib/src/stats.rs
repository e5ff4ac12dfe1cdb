//! Rating statistics over a collection.

use cinedex_core::Collection;

use crate::error::LibError;

/// Summary of the ratings in a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieStats {
    pub count: usize,
    pub average: f64,
    pub median: f64,
    /// Highest rated movie; the first in collection order on ties.
    pub best: (String, f64),
    /// Lowest rated movie; the first in collection order on ties.
    pub worst: (String, f64),
}

/// Compute statistics over every movie that has a rating.
///
/// Returns [`LibError::EmptyCollection`] when no movie is rated.
pub fn compute_stats(movies: &Collection) -> Result<MovieStats, LibError> {
    let rated: Vec<(&str, f64)> = movies
        .iter()
        .filter_map(|(title, m)| m.rating.map(|r| (title.as_str(), r)))
        .collect();

    let (first_title, first_rating) = *rated.first().ok_or(LibError::EmptyCollection)?;
    let mut best = (first_title, first_rating);
    let mut worst = (first_title, first_rating);
    for &(title, rating) in &rated[1..] {
        if rating > best.1 {
            best = (title, rating);
        }
        if rating < worst.1 {
            worst = (title, rating);
        }
    }

    let ratings: Vec<f64> = rated.iter().map(|&(_, r)| r).collect();
    let average = ratings.iter().sum::<f64>() / ratings.len() as f64;

    Ok(MovieStats {
        count: ratings.len(),
        average,
        median: median(&ratings),
        best: (best.0.to_string(), best.1),
        worst: (worst.0.to_string(), worst.1),
    })
}

/// Median of a non-empty slice; the mean of the two middle values for even
/// lengths.
pub fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
#[path = "tests/stats_tests.rs"]
mod tests;
