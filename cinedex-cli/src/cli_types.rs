//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cinedex_lib::StoreFormat;

#[derive(Parser)]
#[command(name = "cinedex")]
#[command(about = "Manage a movie catalog stored in a JSON or CSV file", long_about = None)]
pub(crate) struct Cli {
    /// Store file (.json uses JSON storage, anything else CSV)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Storage format, overriding the file extension (json, csv)
    #[arg(long, global = true)]
    pub format: Option<StoreFormat>,

    /// Use a saved profile's store (name or number, see `cinedex profiles`)
    #[arg(short, long, global = true, conflicts_with = "file")]
    pub profile: Option<String>,

    /// Create the store file if it does not exist
    #[arg(long, global = true)]
    pub create: bool,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Interactive numbered menu (the default)
    Menu,

    /// List all movies
    List,

    /// Show one movie
    Show {
        title: String,
    },

    /// Add a movie
    Add {
        title: String,

        /// Release year
        #[arg(short, long, allow_negative_numbers = true)]
        year: i64,

        /// Rating (any number)
        #[arg(short, long, allow_negative_numbers = true)]
        rating: f64,

        /// Poster URL or path
        #[arg(long, default_value = "")]
        poster: String,
    },

    /// Delete a movie
    Delete {
        title: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Change a movie's rating
    Update {
        title: String,

        /// New rating
        #[arg(short, long, allow_negative_numbers = true)]
        rating: f64,
    },

    /// Average, median, best and worst ratings
    Stats,

    /// Pick a random movie
    Random,

    /// Case-insensitive title search
    Search {
        query: String,
    },

    /// Movies sorted by rating, best first
    Sorted,

    /// Rating histogram (text, or PNG with --output)
    Histogram {
        /// Write a PNG chart to this path instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of bins (1 to 65535)
        #[arg(
            long,
            default_value_t = cinedex_lib::histogram::DEFAULT_BINS as u16,
            value_parser = clap::value_parser!(u16).range(1..)
        )]
        bins: u16,
    },

    /// Manage saved store profiles
    Profiles {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },
}

#[derive(Subcommand)]
pub(crate) enum ProfileAction {
    /// List profiles (the default)
    List,

    /// Add or replace a profile
    Add {
        name: String,

        /// Store file for this profile
        path: PathBuf,
    },

    /// Remove a profile
    Remove {
        name: String,
    },

    /// Print the settings file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histogram_bins(args: &[&str]) -> Option<u16> {
        let cli = Cli::try_parse_from(args).ok()?;
        match cli.command {
            Some(Commands::Histogram { bins, .. }) => Some(bins),
            _ => None,
        }
    }

    #[test]
    fn histogram_bins_default_and_bounds() {
        assert_eq!(histogram_bins(&["cinedex", "histogram"]), Some(10));
        assert_eq!(histogram_bins(&["cinedex", "histogram", "--bins", "65535"]), Some(65535));
        assert_eq!(histogram_bins(&["cinedex", "histogram", "--bins", "0"]), None);
        assert_eq!(histogram_bins(&["cinedex", "histogram", "--bins", "70000"]), None);
    }
}
