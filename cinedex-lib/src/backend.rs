//! Choosing and opening a store.

use std::path::{Path, PathBuf};

use cinedex_core::{CsvStore, JsonStore, MovieStore, StoreFormat};

use crate::error::LibError;
use crate::settings::Profile;

/// Where a store lives and how it is encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreTarget {
    pub path: PathBuf,
    pub format: StoreFormat,
    /// Display label. Only the JSON backend carries one.
    pub label: Option<String>,
}

impl StoreTarget {
    /// Format picked from the file extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = StoreFormat::from_path(&path);
        Self {
            path,
            format,
            label: None,
        }
    }

    pub fn with_format(path: impl Into<PathBuf>, format: StoreFormat) -> Self {
        Self {
            path: path.into(),
            format,
            label: None,
        }
    }

    /// `movies.json` or `movies.csv` in the current directory.
    pub fn default_for(format: StoreFormat) -> Self {
        Self::with_format(format!("movies.{}", format.extension()), format)
    }

    /// A profile's store, labelled with the profile name.
    pub fn from_profile(profile: &Profile) -> Self {
        let format = profile
            .format
            .unwrap_or_else(|| StoreFormat::from_path(&profile.path));
        Self {
            path: profile.path.clone(),
            format,
            label: Some(profile.name.clone()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Open the store described by `target`.
///
/// With `create`, a missing file is first initialised as an empty store;
/// otherwise a missing file is [`StoreError::NotFound`](cinedex_core::StoreError::NotFound).
pub fn open_store(target: &StoreTarget, create: bool) -> Result<Box<dyn MovieStore>, LibError> {
    log::debug!(
        "Opening {} store at {}",
        target.format,
        target.path.display()
    );
    let store: Box<dyn MovieStore> = match target.format {
        StoreFormat::Json => {
            if create && JsonStore::init(&target.path)? {
                log::info!("Created {}", target.path.display());
            }
            let mut store = JsonStore::open(&target.path)?;
            store.set_label(target.label.clone());
            Box::new(store)
        }
        StoreFormat::Csv => {
            if create && CsvStore::init(&target.path)? {
                log::info!("Created {}", target.path.display());
            }
            if let Some(label) = &target.label {
                log::debug!("CSV stores carry no label; ignoring '{label}'");
            }
            Box::new(CsvStore::open(&target.path)?)
        }
    };
    Ok(store)
}
