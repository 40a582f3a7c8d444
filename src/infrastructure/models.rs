use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::product::Product;

pub const CATALOG_HEADER: [&str; 5] = ["id", "name", "category", "price", "stock"];

pub const LEDGER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the product file, in column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: u32,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            category: p.category.clone(),
            price: p.unit_price.to_string(),
            stock: p.stock,
        }
    }
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let unit_price = BigDecimal::from_str(&row.price).map_err(|e| {
            DomainError::MalformedCatalog(format!(
                "product {}: invalid price '{}': {}",
                row.id, row.price, e
            ))
        })?;
        if unit_price < BigDecimal::from(0) {
            return Err(DomainError::MalformedCatalog(format!(
                "product {}: negative price {}",
                row.id, unit_price
            )));
        }
        Ok(Product {
            id: row.id,
            name: row.name,
            category: row.category,
            unit_price,
            stock: row.stock,
        })
    }
}

/// One row of the sales ledger. There is no header.
#[derive(Debug, Clone, Serialize)]
pub struct SaleRow<'a> {
    pub timestamp: &'a str,
    pub customer: &'a str,
    pub product_name: &'a str,
    pub quantity: u32,
    pub unit_price: String,
    pub sale_total: String,
}
