use std::path::Path;

use serde::{Deserialize, Serialize};

/// On-disk serialization format of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreFormat {
    Json,
    Csv,
}

impl StoreFormat {
    /// Pick a format from a file extension: `.json` (any case) is JSON,
    /// everything else is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => StoreFormat::Json,
            _ => StoreFormat::Csv,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            StoreFormat::Json => "json",
            StoreFormat::Csv => "csv",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            StoreFormat::Json => "JSON",
            StoreFormat::Csv => "CSV",
        }
    }
}

impl std::fmt::Display for StoreFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `StoreFormat`.
#[derive(Debug, Clone)]
pub struct StoreFormatParseError(pub String);

impl std::fmt::Display for StoreFormatParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown storage format: '{}' (expected json or csv)", self.0)
    }
}

impl std::error::Error for StoreFormatParseError {}

impl std::str::FromStr for StoreFormat {
    type Err = StoreFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" | "1" => Ok(StoreFormat::Json),
            "csv" | "2" => Ok(StoreFormat::Csv),
            _ => Err(StoreFormatParseError(s.to_string())),
        }
    }
}
