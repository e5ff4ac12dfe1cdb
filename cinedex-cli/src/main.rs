//! cinedex CLI
//!
//! Command-line interface for a movie catalog kept in a JSON or CSV file.

mod cli_types;
mod commands;
mod error;
mod logging;
mod prompt;

use std::io::{BufRead, Write};

use clap::Parser;

use cinedex_lib::settings::{load_settings, settings_path};
use cinedex_lib::{MovieStore, StoreFormat, StoreTarget, open_store};

use cli_types::{Cli, Commands};
use prompt::Prompter;

pub(crate) use error::CliError;

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::init_logging(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(mut cli: Cli) -> Result<(), CliError> {
    let command = cli.command.take().unwrap_or(Commands::Menu);

    if let Commands::Profiles { action } = command {
        return commands::profiles::run_profiles(action, cli.format, &settings_path());
    }

    let mut prompter = Prompter::stdio();
    let target = match (&cli.profile, &cli.file, &command) {
        (None, None, Commands::Menu) => {
            commands::menu::choose_target(&mut prompter, &load_settings()?)?
        }
        _ => resolve_target(&cli)?,
    };
    log::debug!(
        "Using {} storage at {}",
        target.format,
        target.path().display()
    );
    let mut store = open_store(&target, cli.create)?;
    dispatch(command, store.as_mut(), &mut prompter)
}

/// Store selected by `--profile`, `--file` and `--format`, in that order of
/// precedence. Without either, the default file for the format is used.
fn resolve_target(cli: &Cli) -> Result<StoreTarget, CliError> {
    if let Some(key) = &cli.profile {
        let settings = load_settings()?;
        let mut target = StoreTarget::from_profile(settings.resolve(key)?);
        if let Some(format) = cli.format {
            target.format = format;
        }
        return Ok(target);
    }
    Ok(match (&cli.file, cli.format) {
        (Some(path), Some(format)) => StoreTarget::with_format(path, format),
        (Some(path), None) => StoreTarget::from_path(path),
        (None, format) => StoreTarget::default_for(format.unwrap_or(StoreFormat::Json)),
    })
}

fn dispatch<R: BufRead, W: Write>(
    command: Commands,
    store: &mut dyn MovieStore,
    prompter: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    match command {
        Commands::Menu => commands::menu::run_menu(store, prompter)?,
        Commands::List => commands::list::run_list(store),
        Commands::Show { title } => commands::list::run_show(store, &title)?,
        Commands::Add {
            title,
            year,
            rating,
            poster,
        } => commands::add::run_add(store, &title, year, rating, &poster)?,
        Commands::Delete { title, yes } => {
            commands::delete::run_delete(store, &title, yes, prompter)?;
        }
        Commands::Update { title, rating } => {
            commands::update::run_update(store, &title, rating)?
        }
        Commands::Stats => commands::stats::run_stats(store)?,
        Commands::Random => commands::query::run_random(store),
        Commands::Search { query } => commands::query::run_search(store, &query),
        Commands::Sorted => commands::query::run_sorted(store),
        Commands::Histogram { output, bins } => {
            commands::histogram::run_histogram(store, output.as_deref(), usize::from(bins))?
        }
        // Handled before a store is opened.
        Commands::Profiles { .. } => {}
    }
    Ok(())
}
