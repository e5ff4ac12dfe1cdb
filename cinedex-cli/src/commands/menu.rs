//! The interactive numbered menu and the interactive store selection.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use cinedex_lib::histogram::DEFAULT_BINS;
use cinedex_lib::settings::Settings;
use cinedex_lib::{MovieStore, StoreFormat, StoreTarget};

use crate::CliError;
use crate::prompt::Prompter;

use super::{add, delete, histogram, list, query, stats, update};

const MENU: &str = "
    ************ My Movies Database ************
    Menu:
    0. Exit
    1. List Movies
    2. Add Movie
    3. Delete Movie
    4. Update Movie
    5. Movie Stats
    6. Random Movie
    7. Search Movie
    8. Movies Sorted by Rating
    9. Creating a Rating Histogram

    Enter choice (0-9): ";

/// Run the menu until the user picks 0 or input ends.
///
/// A failing action is reported and the menu is shown again.
pub(crate) fn run_menu<R: BufRead, W: Write>(
    store: &mut dyn MovieStore,
    prompter: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    loop {
        let Some(answer) = prompter.line(MENU)? else {
            return Ok(());
        };
        let choice = match answer.trim().parse::<u8>() {
            Ok(n) if n <= 9 => n,
            _ => {
                prompter.say("Choose between 0 to 9")?;
                continue;
            }
        };
        if choice == 0 {
            prompter.say("Bye!")?;
            return Ok(());
        }

        match run_choice(store, choice, prompter) {
            Ok(()) => {}
            // Input ran out in the middle of an action.
            Err(CliError::Input(_)) => return Ok(()),
            Err(e) => log::warn!("{e}"),
        }
    }
}

fn run_choice<R: BufRead, W: Write>(
    store: &mut dyn MovieStore,
    choice: u8,
    prompter: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    match choice {
        1 => list::run_list(store),
        2 => {
            let title = prompter.required("Insert a name of the movie into the list: ")?;
            let rating: f64 = prompter.parsed("Provide a rating for the given movie: ")?;
            let year: i64 = prompter.parsed("Enter the year of the movie: ")?;
            let poster = prompter.required("Enter the poster url of the movie: ")?;
            add::run_add(store, &title, year, rating, &poster)?;
        }
        3 => {
            let title = prompter.required("Type the movie name to delete from the database: ")?;
            delete::run_delete(store, &title, false, prompter)?;
        }
        4 => {
            let title = prompter.required("Name of the movie to update: ")?;
            list::run_show(store, &title)?;
            let rating: f64 = prompter.parsed("Provide a new rating for the given movie: ")?;
            update::run_update(store, &title, rating)?;
        }
        5 => stats::run_stats(store)?,
        6 => query::run_random(store),
        7 => {
            let needle =
                prompter.required("Enter the movie name to search from the movie database: ")?;
            query::run_search(store, &needle);
        }
        8 => query::run_sorted(store),
        9 => {
            let file = prompter.required(
                "Enter the file name to save the histogram (e.g., histogram.png), or leave empty to print it: ",
            )?;
            let output = Some(file.trim())
                .filter(|f| !f.is_empty())
                .map(PathBuf::from);
            histogram::run_histogram(store, output.as_deref(), DEFAULT_BINS)?;
        }
        _ => prompter.say("Choose between 0 to 9")?,
    }
    Ok(())
}

/// Ask which store to work with: the default JSON or CSV file, or one of the
/// saved profiles.
pub(crate) fn choose_target<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    settings: &Settings,
) -> Result<StoreTarget, CliError> {
    prompter.say("######## Movie Database ########")?;
    let format = loop {
        match prompter.parsed::<u8>("Enter the number 1 to choose JSON and 2 for CSV file format: ")? {
            1 => break StoreFormat::Json,
            2 => break StoreFormat::Csv,
            _ => prompter.say("Invalid choice. Please enter 1 for JSON or 2 for CSV.")?,
        }
    };

    let option: u8 = prompter.parsed(
        "Enter the number 3 to work with family members' storage, or any other number for the default storage: ",
    )?;
    if option != 3 {
        prompter.say(&format!("Working with default {format} storage."))?;
        return Ok(StoreTarget::default_for(format));
    }
    if settings.profiles.is_empty() {
        prompter.say(&format!("No profiles saved. Working with default {format} storage."))?;
        return Ok(StoreTarget::default_for(format));
    }

    prompter.say("Choose a family member:")?;
    for (i, profile) in settings.profiles.iter().enumerate() {
        prompter.say(&format!("{}. {}", i + 1, profile.name))?;
    }
    loop {
        let answer = prompter.required("Enter the number of the family member: ")?;
        match settings.resolve(&answer) {
            Ok(profile) => {
                prompter.say(&format!("You are working on {} files.", profile.name))?;
                return Ok(StoreTarget::from_profile(profile));
            }
            Err(_) => prompter.say("Invalid choice. Please choose a valid family member.")?,
        }
    }
}

#[cfg(test)]
#[path = "../tests/menu_tests.rs"]
mod tests;
