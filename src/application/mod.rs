pub mod command;
pub mod shop_service;

pub use command::{is_confirmation, parse_number, Command};
pub use shop_service::{CatalogStatus, CheckoutOutcome, ShopService};
