//! Read-only lookups: random pick, title search, rating order.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cinedex_lib::display::{rating_text, summary_line};
use cinedex_lib::query::{random_movie, search, sorted_by_rating};
use cinedex_lib::MovieStore;

use super::log_empty;

pub(crate) fn run_random(store: &dyn MovieStore) {
    let mut rng = rand::thread_rng();
    match random_movie(store.snapshot(), &mut rng) {
        Some((title, movie)) => log::info!(
            "Your movie for tonight: {}, it's rated {}",
            title.if_supports_color(Stdout, |t| t.bold()),
            rating_text(movie),
        ),
        None => log_empty(),
    }
}

pub(crate) fn run_search(store: &dyn MovieStore, needle: &str) {
    let hits = search(store.snapshot(), needle);
    if hits.is_empty() {
        log::info!(
            "{}",
            format!("No movie title contains '{needle}'.").if_supports_color(Stdout, |t| t.dimmed())
        );
        return;
    }
    for (title, movie) in hits {
        log::info!("{}", summary_line(title, movie));
    }
}

pub(crate) fn run_sorted(store: &dyn MovieStore) {
    let entries = sorted_by_rating(store.snapshot());
    if entries.is_empty() {
        log_empty();
        return;
    }
    for (title, movie) in entries {
        log::info!(
            "{}: {}",
            title.if_supports_color(Stdout, |t| t.bold()),
            rating_text(movie)
        );
    }
}
