use super::errors::DomainError;
use super::product::Product;
use super::sale::Sale;

pub trait CatalogStore {
    /// `Ok(None)` when no catalog has been written yet.
    fn load(&self) -> Result<Option<Vec<Product>>, DomainError>;
    fn save(&self, products: &[Product]) -> Result<(), DomainError>;
}

pub trait SalesLedger {
    fn append(&self, sale: &Sale<'_>) -> Result<(), DomainError>;
}
