use bigdecimal::BigDecimal;
use chrono::{Local, NaiveDateTime};

use crate::domain::cart::{Cart, CartLine};
use crate::domain::errors::DomainError;
use crate::domain::ports::{CatalogStore, SalesLedger};
use crate::domain::product::Product;
use crate::domain::sale::Sale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    Loaded(usize),
    /// No product file yet; one is written on the first checkout.
    Missing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    Completed {
        total: BigDecimal,
        /// False when the sale was recorded but the catalog could not be
        /// rewritten. In-memory stock is still correct.
        catalog_saved: bool,
    },
    Cancelled {
        stock_restored: bool,
    },
}

/// Holds the in-memory catalog and the current cart for one session.
pub struct ShopService<C, L> {
    catalog: C,
    ledger: L,
    products: Vec<Product>,
    cart: Cart,
    restore_stock_on_cancel: bool,
}

impl<C: CatalogStore, L: SalesLedger> ShopService<C, L> {
    pub fn open(
        catalog: C,
        ledger: L,
        restore_stock_on_cancel: bool,
    ) -> Result<(Self, CatalogStatus), DomainError> {
        let (products, status) = match catalog.load()? {
            Some(products) => {
                let n = products.len();
                (products, CatalogStatus::Loaded(n))
            }
            None => {
                log::info!("No product catalog found, starting empty");
                (Vec::new(), CatalogStatus::Missing)
            }
        };

        let service = Self {
            catalog,
            ledger,
            products,
            cart: Cart::new(),
            restore_stock_on_cancel,
        };
        Ok((service, status))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_to_cart(&mut self, product_id: u32, quantity: u32) -> Result<CartLine, DomainError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or(DomainError::ProductNotFound(product_id))?;

        let line = self.cart.add(product, quantity)?.clone();
        log::debug!(
            "Reserved {} x {} (stock left {})",
            line.quantity,
            line.product_name,
            product.stock
        );
        Ok(line)
    }

    pub fn checkout(&mut self, customer: &str, confirmed: bool) -> Result<CheckoutOutcome, DomainError> {
        self.checkout_at(customer, confirmed, Local::now().naive_local())
    }

    /// Records the sale and persists the catalog when `confirmed`.
    ///
    /// A failed ledger append leaves the cart in place. Once the ledger has
    /// the sale the cart is always cleared, even if the catalog save fails.
    pub fn checkout_at(
        &mut self,
        customer: &str,
        confirmed: bool,
        now: NaiveDateTime,
    ) -> Result<CheckoutOutcome, DomainError> {
        if self.cart.is_empty() {
            return Err(DomainError::EmptyCart);
        }

        if !confirmed {
            if self.restore_stock_on_cancel {
                self.cart.release(&mut self.products);
            }
            log::info!("Checkout cancelled for {}", customer);
            return Ok(CheckoutOutcome::Cancelled {
                stock_restored: self.restore_stock_on_cancel,
            });
        }

        let total = self.cart.total();
        self.ledger.append(&Sale {
            timestamp: now,
            customer: customer.to_string(),
            total: total.clone(),
            lines: self.cart.lines(),
        })?;

        let catalog_saved = match self.catalog.save(&self.products) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Sale recorded but catalog save failed: {}", e);
                false
            }
        };

        self.cart = Cart::new();
        Ok(CheckoutOutcome::Completed {
            total,
            catalog_saved,
        })
    }
}
