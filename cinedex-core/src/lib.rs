//! Movie catalog data model and flat-file storage backends.
//!
//! A [`MovieStore`] binds one [`Collection`] to one file on disk. Two
//! backends implement it: [`JsonStore`] and [`CsvStore`]. Every mutation
//! rewrites the whole file before returning, and a failed write leaves both
//! the file and the in-memory collection as they were.

pub mod csv_store;
pub mod error;
pub mod format;
pub mod json_store;
pub mod model;
mod persist;
pub mod store;

pub use csv_store::CsvStore;
pub use error::{ErrorKind, StoreError};
pub use format::{StoreFormat, StoreFormatParseError};
pub use json_store::JsonStore;
pub use model::{Collection, Movie};
pub use store::MovieStore;
