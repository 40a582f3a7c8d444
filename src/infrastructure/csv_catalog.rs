use std::collections::HashSet;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::errors::DomainError;
use crate::domain::ports::CatalogStore;
use crate::domain::product::Product;

use super::ensure_parent_dir;
use super::models::{ProductRow, CATALOG_HEADER};

pub struct CsvCatalogStore {
    path: PathBuf,
}

impl CsvCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogStore for CsvCatalogStore {
    fn load(&self) -> Result<Option<Vec<Product>>, DomainError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut products = Vec::new();
        let mut seen = HashSet::new();
        for record in reader.records() {
            let malformed =
                |e: csv::Error| DomainError::MalformedCatalog(format!("{}: {}", self.path.display(), e));
            // Columns are positional; the header row is only skipped.
            let row: ProductRow = record.map_err(malformed)?.deserialize(None).map_err(malformed)?;
            if !seen.insert(row.id) {
                return Err(DomainError::MalformedCatalog(format!(
                    "{}: duplicate product id {}",
                    self.path.display(),
                    row.id
                )));
            }
            products.push(Product::try_from(row)?);
        }

        log::info!(
            "Loaded {} products from {}",
            products.len(),
            self.path.display()
        );
        Ok(Some(products))
    }

    /// Rewrites the whole file through a temporary sibling that is renamed
    /// into place, so readers never see a half-written catalog. The file
    /// keeps the permissions it had before.
    fn save(&self, products: &[Product]) -> Result<(), DomainError> {
        let dir = ensure_parent_dir(&self.path)?;
        let mut tmp = temp_sibling(dir)?;
        match fs::metadata(&self.path) {
            Ok(meta) => tmp.as_file().set_permissions(meta.permissions())?,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file_mut());
            writer.write_record(CATALOG_HEADER)?;
            for product in products {
                writer.serialize(ProductRow::from(product))?;
            }
            writer.flush()?;
        }
        tmp.persist(&self.path)?;

        log::info!(
            "Saved {} products to {}",
            products.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Temp file in `dir` created with the mode a plain `File::create` would
/// get, rather than the owner-only default.
fn temp_sibling(dir: &Path) -> Result<NamedTempFile, DomainError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".products").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    Ok(builder.tempfile_in(dir)?)
}
