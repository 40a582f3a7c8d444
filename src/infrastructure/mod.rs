pub mod csv_catalog;
pub mod csv_ledger;
pub mod models;

pub use csv_catalog::CsvCatalogStore;
pub use csv_ledger::CsvSalesLedger;

use std::path::Path;

use crate::domain::errors::DomainError;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

impl From<csv::Error> for DomainError {
    fn from(e: csv::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

impl From<tempfile::PersistError> for DomainError {
    fn from(e: tempfile::PersistError) -> Self {
        DomainError::Storage(e.to_string())
    }
}

/// Creates the directory holding `path`, returning it.
fn ensure_parent_dir(path: &Path) -> Result<&Path, DomainError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;
    Ok(dir)
}
