//! Application-layer functions driven through stores opened from disk.

use std::fs;

use cinedex_lib::query::{search, sorted_by_rating};
use cinedex_lib::settings::{Settings, load_settings_from, save_settings_to};
use cinedex_lib::stats::compute_stats;
use cinedex_lib::{
    Histogram, LibError, Profile, StoreError, StoreFormat, StoreTarget, open_store,
};
use tempfile::TempDir;

#[test]
fn stats_over_csv_store() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("movies.csv");
    fs::write(
        &path,
        "title,rating,year,poster\nAlien,8.5,1979,a.jpg\nHeat,8.3,1995,h.jpg\nCats,2.8,2019,c.jpg\n",
    )
    .unwrap();

    let store = open_store(&StoreTarget::from_path(&path), false).unwrap();
    let stats = compute_stats(store.snapshot()).unwrap();
    assert_eq!(stats.count, 3);
    assert_eq!(stats.median, 8.3);
    assert_eq!(stats.best, ("Alien".to_string(), 8.5));
    assert_eq!(stats.worst, ("Cats".to_string(), 2.8));
}

#[test]
fn json_store_with_missing_ratings() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("movies.json");
    fs::write(
        &path,
        r#"{"Alien": {"rating": 8.5, "year": 1979}, "Dune": {"year": 2021}}"#,
    )
    .unwrap();

    let store = open_store(&StoreTarget::from_path(&path), false).unwrap();
    let order: Vec<&str> = sorted_by_rating(store.snapshot())
        .into_iter()
        .map(|(t, _)| t)
        .collect();
    assert_eq!(order, ["Alien", "Dune"]);
    assert_eq!(compute_stats(store.snapshot()).unwrap().count, 1);
    assert_eq!(search(store.snapshot(), "DUNE").len(), 1);
}

#[test]
fn empty_store_has_no_stats_or_histogram() {
    let tmp = TempDir::new().unwrap();
    let target = StoreTarget::with_format(tmp.path().join("new.csv"), StoreFormat::Csv);
    let store = open_store(&target, true).unwrap();

    assert!(matches!(
        compute_stats(store.snapshot()),
        Err(LibError::EmptyCollection)
    ));
    assert!(matches!(
        Histogram::from_collection(store.snapshot(), 10),
        Err(LibError::EmptyCollection)
    ));
}

#[test]
fn missing_store_without_create_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let target = StoreTarget::from_path(tmp.path().join("absent.json"));
    let err = open_store(&target, false).err().unwrap();
    assert!(matches!(err, LibError::Store(StoreError::NotFound(_))));
    assert!(!target.path.exists());
}

#[test]
fn profile_store_is_labelled() {
    let tmp = TempDir::new().unwrap();
    let settings_path = tmp.path().join("settings.toml");
    let mut settings = Settings::default();
    settings.upsert(Profile::new("Mia", tmp.path().join("mia.json"), None));
    save_settings_to(&settings_path, &settings).unwrap();

    let loaded = load_settings_from(&settings_path).unwrap();
    let target = StoreTarget::from_profile(loaded.resolve("mia").unwrap());
    let mut store = open_store(&target, true).unwrap();
    store.add("Alien", 1979, 8.5, "a.jpg").unwrap();

    assert_eq!(store.label(), Some("Mia"));
    let contents = fs::read_to_string(tmp.path().join("mia.json")).unwrap();
    assert!(!contents.contains("Mia"));
}

#[test]
fn histogram_png_written_from_store() {
    let tmp = TempDir::new().unwrap();
    let target = StoreTarget::with_format(tmp.path().join("m.json"), StoreFormat::Json);
    let mut store = open_store(&target, true).unwrap();
    for (i, title) in ["A", "B", "C", "D"].iter().enumerate() {
        store.add(title, 2000, 5.0 + i as f64, "").unwrap();
    }

    let hist = Histogram::from_collection(store.snapshot(), 10).unwrap();
    assert_eq!(hist.total(), 4);
    let png = tmp.path().join("hist.png");
    hist.save_png(&png, 320, 200).unwrap();
    let img = image::open(&png).unwrap();
    assert_eq!((img.width(), img.height()), (320, 200));
}
