use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cinedex_lib::MovieStore;

use crate::CliError;

/// Add a movie and save the store.
pub(crate) fn run_add(
    store: &mut dyn MovieStore,
    title: &str,
    year: i64,
    rating: f64,
    poster: &str,
) -> Result<(), CliError> {
    store.add(title, year, rating, poster)?;
    log::info!(
        "{} Added {} ({}, rating {})",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        title.if_supports_color(Stdout, |t| t.bold()),
        year,
        rating,
    );
    Ok(())
}
