//! Read-only lookups over a collection: search, rating order, random pick.

use std::cmp::Ordering;

use rand::Rng;
use rand::seq::IteratorRandom;

use cinedex_core::{Collection, Movie};

/// Movies whose title contains `needle`, ignoring case, in collection order.
pub fn search<'a>(movies: &'a Collection, needle: &str) -> Vec<(&'a str, &'a Movie)> {
    let needle = needle.to_lowercase();
    movies
        .iter()
        .filter(|(title, _)| title.to_lowercase().contains(&needle))
        .map(|(title, movie)| (title.as_str(), movie))
        .collect()
}

/// All movies, highest rating first. Unrated movies come last; equal
/// ratings keep collection order.
pub fn sorted_by_rating(movies: &Collection) -> Vec<(&str, &Movie)> {
    let mut entries: Vec<(&str, &Movie)> = movies
        .iter()
        .map(|(title, movie)| (title.as_str(), movie))
        .collect();
    entries.sort_by(|a, b| compare_rating_desc(a.1.rating, b.1.rating));
    entries
}

fn compare_rating_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// A uniformly random movie, or `None` for an empty collection.
pub fn random_movie<'a, R: Rng + ?Sized>(
    movies: &'a Collection,
    rng: &mut R,
) -> Option<(&'a str, &'a Movie)> {
    movies
        .iter()
        .choose(rng)
        .map(|(title, movie)| (title.as_str(), movie))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> Collection {
        let mut movies = Collection::new();
        movies.insert("Alien".to_string(), Movie::new(1979, 8.5, "a.jpg"));
        movies.insert("Aliens".to_string(), Movie::new(1986, 8.4, "b.jpg"));
        movies.insert("Heat".to_string(), Movie::new(1995, 8.3, "h.jpg"));
        movies.insert(
            "Unrated".to_string(),
            Movie {
                year: Some(2001),
                ..Movie::default()
            },
        );
        movies.insert("Ran".to_string(), Movie::new(1985, 8.5, "r.jpg"));
        movies
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let movies = sample();
        let hits: Vec<&str> = search(&movies, "ALIEN").into_iter().map(|(t, _)| t).collect();
        assert_eq!(hits, vec!["Alien", "Aliens"]);
    }

    #[test]
    fn search_no_match() {
        assert!(search(&sample(), "matrix").is_empty());
    }

    #[test]
    fn sorted_descending_with_unrated_last() {
        let movies = sample();
        let order: Vec<&str> = sorted_by_rating(&movies).into_iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec!["Alien", "Ran", "Aliens", "Heat", "Unrated"]);
    }

    #[test]
    fn random_pick_comes_from_collection() {
        let movies = sample();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let (title, _) = random_movie(&movies, &mut rng).unwrap();
            assert!(movies.contains_key(title));
        }
    }

    #[test]
    fn random_pick_on_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_movie(&Collection::new(), &mut rng).is_none());
    }
}
