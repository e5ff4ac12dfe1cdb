use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cinedex_lib::{MovieStore, StoreError};

use crate::CliError;

use super::{log_empty, log_movie, store_heading};

/// List every movie in the store.
pub(crate) fn run_list(store: &dyn MovieStore) {
    let movies = store.snapshot();
    if movies.is_empty() {
        log_empty();
        return;
    }

    log::info!(
        "{} {}",
        store_heading(store).if_supports_color(Stdout, |t| t.bold()),
        format!("[{} movies]", movies.len()).if_supports_color(Stdout, |t| t.dimmed()),
    );
    for (title, movie) in movies {
        log_movie(title, movie);
    }
}

/// Show a single movie.
pub(crate) fn run_show(store: &dyn MovieStore, title: &str) -> Result<(), CliError> {
    let movie = store
        .get(title)
        .ok_or_else(|| StoreError::TitleNotFound(title.to_string()))?;
    log_movie(title, movie);
    Ok(())
}
