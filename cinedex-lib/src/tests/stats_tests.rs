use super::*;

use cinedex_core::Movie;

fn collection(entries: &[(&str, f64)]) -> Collection {
    entries
        .iter()
        .map(|&(t, r)| (t.to_string(), Movie::new(2000, r, "p.jpg")))
        .collect()
}

#[test]
fn odd_count() {
    let stats = compute_stats(&collection(&[("A", 7.0), ("B", 9.0), ("C", 8.0)])).unwrap();
    assert_eq!(stats.count, 3);
    assert!((stats.average - 8.0).abs() < 1e-9);
    assert_eq!(stats.median, 8.0);
    assert_eq!(stats.best, ("B".to_string(), 9.0));
    assert_eq!(stats.worst, ("A".to_string(), 7.0));
}

#[test]
fn even_count_median_is_mean_of_middle() {
    let stats = compute_stats(&collection(&[("A", 6.0), ("B", 9.0), ("C", 8.0), ("D", 7.0)])).unwrap();
    assert_eq!(stats.median, 7.5);
    assert!((stats.average - 7.5).abs() < 1e-9);
}

#[test]
fn ties_keep_first_title() {
    let stats = compute_stats(&collection(&[("B", 9.0), ("A", 9.0), ("C", 1.0), ("D", 1.0)])).unwrap();
    // Collection order is by title: A, B, C, D.
    assert_eq!(stats.best.0, "A");
    assert_eq!(stats.worst.0, "C");
}

#[test]
fn unrated_movies_are_skipped() {
    let mut movies = collection(&[("A", 5.0)]);
    movies.insert(
        "Z".to_string(),
        Movie {
            year: Some(1990),
            ..Movie::default()
        },
    );
    let stats = compute_stats(&movies).unwrap();
    assert_eq!(stats.count, 1);
    assert_eq!(stats.best.0, "A");
}

#[test]
fn empty_collection_is_an_error() {
    assert!(matches!(
        compute_stats(&Collection::new()),
        Err(LibError::EmptyCollection)
    ));
}

#[test]
fn median_single_value() {
    assert_eq!(median(&[4.2]), 4.2);
}
