pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;

use std::io::{BufRead, Write};

use application::shop_service::{CatalogStatus, ShopService};
use config::Settings;
use errors::AppError;
use handlers::menu::Menu;
use infrastructure::{CsvCatalogStore, CsvSalesLedger};

/// Open the CSV-backed shop described by `settings` and run the menu over
/// `input`/`output` until the operator exits.
pub fn run<R: BufRead, W: Write>(settings: &Settings, input: R, mut output: W) -> Result<(), AppError> {
    let catalog = CsvCatalogStore::new(&settings.catalog_path);
    let ledger = CsvSalesLedger::new(&settings.sales_path);

    let (mut shop, status) = ShopService::open(catalog, ledger, settings.restore_stock_on_cancel)?;
    if status == CatalogStatus::Missing {
        writeln!(
            output,
            "Warning: product file {} not found. A new one will be created.",
            settings.catalog_path.display()
        )?;
    }

    Menu::new(input, output).run(&mut shop)
}
