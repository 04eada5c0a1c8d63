//! Static activity catalog loading.
//!
//! # Responsibility
//! - Parse the read-only catalog resource shipped with the application.
//! - Degrade load failures to an empty catalog for callers that must not
//!   surface errors.
//!
//! # Invariants
//! - The catalog is loaded once at startup and never written back.
//! - Catalog order is preserved; the selection engine relies on it for
//!   deterministic filtering.

use crate::model::activity::Activity;
use log::{error, info};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

/// Failure while reading or parsing the catalog resource.
#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read catalog: {err}"),
            Self::Parse(err) => write!(f, "failed to parse catalog: {err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Wire shape of the catalog resource: one object with an `activities` array.
#[derive(Deserialize)]
struct CatalogFile {
    activities: Vec<Activity>,
}

/// Parses catalog JSON text.
pub fn parse_catalog(json: &str) -> CatalogResult<Vec<Activity>> {
    let file: CatalogFile = serde_json::from_str(json)?;
    Ok(file.activities)
}

/// Loads and parses a catalog file from disk.
pub fn load_catalog(path: impl AsRef<Path>) -> CatalogResult<Vec<Activity>> {
    let raw = fs::read_to_string(path)?;
    parse_catalog(&raw)
}

/// Loads a catalog, substituting an empty one on any failure.
///
/// The failure is logged; every downstream selection over an empty catalog
/// yields no activity, which is the defined degraded behavior.
pub fn load_catalog_or_empty(path: impl AsRef<Path>) -> Vec<Activity> {
    match load_catalog(path.as_ref()) {
        Ok(activities) => {
            info!(
                "event=catalog_load module=catalog status=ok count={}",
                activities.len()
            );
            activities
        }
        Err(err) => {
            error!("event=catalog_load module=catalog status=error error={err}");
            Vec::new()
        }
    }
}
