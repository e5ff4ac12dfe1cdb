use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cinedex_lib::{Histogram, LibError, MovieStore};

use crate::CliError;

const BAR_WIDTH: usize = 40;
const IMAGE_WIDTH: u32 = 800;
const IMAGE_HEIGHT: u32 = 600;

/// Rating histogram, drawn as text or saved as a PNG when `output` is set.
pub(crate) fn run_histogram(
    store: &dyn MovieStore,
    output: Option<&Path>,
    bins: usize,
) -> Result<(), CliError> {
    let histogram = match Histogram::from_collection(store.snapshot(), bins) {
        Ok(h) => h,
        Err(LibError::EmptyCollection) => {
            log::info!("{}", LibError::EmptyCollection);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    match output {
        Some(path) => {
            histogram.save_png(path, IMAGE_WIDTH, IMAGE_HEIGHT)?;
            log::info!(
                "{} Histogram of {} ratings saved to {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                histogram.total(),
                path.display()
            );
        }
        None => {
            for line in histogram.render_text(BAR_WIDTH) {
                log::info!("{line}");
            }
        }
    }
    Ok(())
}
