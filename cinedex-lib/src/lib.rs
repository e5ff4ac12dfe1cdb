//! Application layer shared by the `cinedex` frontends.
//!
//! Everything here reads a [`MovieStore`]'s snapshot: statistics, search,
//! rating order, random picks, the rating histogram, plus the choice of
//! which store to open (file extension, explicit format, or a saved profile).

pub mod backend;
pub mod display;
pub mod error;
pub mod histogram;
pub mod query;
pub mod settings;
pub mod stats;

pub use backend::{StoreTarget, open_store};
pub use cinedex_core::{
    Collection, CsvStore, ErrorKind, JsonStore, Movie, MovieStore, StoreError, StoreFormat,
};
pub use error::LibError;
pub use histogram::{Histogram, HistogramBin};
pub use settings::{Profile, Settings};
pub use stats::MovieStats;
