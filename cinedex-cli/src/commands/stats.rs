use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cinedex_lib::stats::compute_stats;
use cinedex_lib::{LibError, MovieStore};

use crate::CliError;

use super::store_heading;

/// Print rating statistics for the store.
///
/// A store with no rated movies is reported, not treated as a failure.
pub(crate) fn run_stats(store: &dyn MovieStore) -> Result<(), CliError> {
    let stats = match compute_stats(store.snapshot()) {
        Ok(stats) => stats,
        Err(LibError::EmptyCollection) => {
            log::info!("{}", LibError::EmptyCollection);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    log::info!(
        "{}",
        store_heading(store).if_supports_color(Stdout, |t| t.bold())
    );
    crate::log_blank();
    log::info!("  Rated movies:  {}", stats.count);
    log::info!("  Average:       {:.2}", stats.average);
    log::info!("  Median:        {:.2}", stats.median);
    log::info!(
        "  Best movie:    {}, {:.2}",
        stats.best.0.if_supports_color(Stdout, |t| t.green()),
        stats.best.1
    );
    log::info!(
        "  Worst movie:   {}, {:.2}",
        stats.worst.0.if_supports_color(Stdout, |t| t.red()),
        stats.worst.1
    );
    Ok(())
}
