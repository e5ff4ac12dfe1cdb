use super::*;

fn sample() -> Collection {
    let mut movies = Collection::new();
    movies.insert("Alien".to_string(), Movie::new(1979, 8.5, "alien.jpg"));
    movies.insert("Heat".to_string(), Movie::new(1995, 8.3, "heat.jpg"));
    movies
}

#[test]
fn with_added_inserts_new_title() {
    let movies = sample();
    let next = with_added(&movies, "Titanic", Movie::new(1997, 9.0, "titanic.jpg")).unwrap();
    assert_eq!(next.len(), 3);
    assert_eq!(movies.len(), 2);
    assert_eq!(next["Titanic"].year, Some(1997));
}

#[test]
fn with_added_rejects_collision() {
    let movies = sample();
    let err = with_added(&movies, "Alien", Movie::new(2000, 1.0, "x")).unwrap_err();
    assert!(matches!(err, StoreError::AlreadyExists(ref t) if t == "Alien"));
}

#[test]
fn titles_are_case_sensitive() {
    let movies = sample();
    let next = with_added(&movies, "alien", Movie::new(2000, 1.0, "x")).unwrap();
    assert_eq!(next.len(), 3);
}

#[test]
fn without_returns_removed_record() {
    let movies = sample();
    let (next, removed) = without(&movies, "Heat").unwrap();
    assert!(!next.contains_key("Heat"));
    assert_eq!(removed.year, Some(1995));
}

#[test]
fn without_missing_title() {
    let err = without(&sample(), "Ghost").unwrap_err();
    assert!(matches!(err, StoreError::TitleNotFound(_)));
    assert!(err.is_not_found());
}

#[test]
fn with_rating_only_touches_rating() {
    let movies = sample();
    let next = with_rating(&movies, "Alien", 9.0).unwrap();
    let alien = &next["Alien"];
    assert_eq!(alien.rating, Some(9.0));
    assert_eq!(alien.year, Some(1979));
    assert_eq!(alien.poster.as_deref(), Some("alien.jpg"));
    assert_eq!(next["Heat"], movies["Heat"]);
    assert_eq!(movies["Alien"].rating, Some(8.5));
}

#[test]
fn with_rating_missing_title() {
    let err = with_rating(&sample(), "Ghost", 5.0).unwrap_err();
    assert!(matches!(err, StoreError::TitleNotFound(ref t) if t == "Ghost"));
}
