use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cinedex_lib::MovieStore;

use crate::CliError;

/// Set a new rating on an existing movie.
pub(crate) fn run_update(store: &mut dyn MovieStore, title: &str, rating: f64) -> Result<(), CliError> {
    store.update(title, rating)?;
    log::info!(
        "{} {} is successfully updated (rating {})",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        title.if_supports_color(Stdout, |t| t.bold()),
        rating,
    );
    Ok(())
}
