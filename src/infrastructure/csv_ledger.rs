use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::domain::errors::DomainError;
use crate::domain::ports::SalesLedger;
use crate::domain::product::money;
use crate::domain::sale::Sale;

use super::ensure_parent_dir;
use super::models::{SaleRow, LEDGER_TIMESTAMP_FORMAT};

/// Append-only sales log. Rows of one sale are not written atomically.
pub struct CsvSalesLedger {
    path: PathBuf,
}

impl CsvSalesLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SalesLedger for CsvSalesLedger {
    fn append(&self, sale: &Sale<'_>) -> Result<(), DomainError> {
        ensure_parent_dir(&self.path)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        let timestamp = sale.timestamp.format(LEDGER_TIMESTAMP_FORMAT).to_string();
        let sale_total = money(&sale.total).to_string();
        for line in sale.lines {
            writer.serialize(SaleRow {
                timestamp: &timestamp,
                customer: &sale.customer,
                product_name: &line.product_name,
                quantity: line.quantity,
                unit_price: line.charged_unit_price().to_string(),
                sale_total: sale_total.clone(),
            })?;
        }
        writer.flush()?;

        log::info!(
            "Recorded sale to {} ({} lines, total {})",
            sale.customer,
            sale.lines.len(),
            sale_total
        );
        Ok(())
    }
}
