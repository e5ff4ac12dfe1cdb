pub(crate) mod add;
pub(crate) mod delete;
pub(crate) mod histogram;
pub(crate) mod list;
pub(crate) mod menu;
pub(crate) mod profiles;
pub(crate) mod query;
pub(crate) mod stats;
pub(crate) mod update;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cinedex_lib::display::{poster_text, rating_text, year_text};
use cinedex_lib::{Movie, MovieStore};

/// Heading naming the store, e.g. `Movies (John, JSON: john.json)`.
pub(crate) fn store_heading(store: &dyn MovieStore) -> String {
    match store.label() {
        Some(label) => format!(
            "Movies ({}, {}: {})",
            label,
            store.format(),
            store.path().display()
        ),
        None => format!("Movies ({}: {})", store.format(), store.path().display()),
    }
}

/// Log one movie as an indented block.
pub(crate) fn log_movie(title: &str, movie: &Movie) {
    log::info!("{}", title.if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Rating: {}", rating_text(movie));
    log::info!("  Year:   {}", year_text(movie));
    log::info!("  Poster: {}", poster_text(movie));
}

pub(crate) fn log_empty() {
    log::info!(
        "{}",
        "No available movies in the database.".if_supports_color(Stdout, |t| t.dimmed()),
    );
}
