use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Product not found: {0}")]
    ProductNotFound(u32),
    #[error("Insufficient stock of {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: u32,
        available: u32,
    },
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("The cart is empty")]
    EmptyCart,
    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),
    #[error("Storage error: {0}")]
    Storage(String),
}
