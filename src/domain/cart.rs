use bigdecimal::BigDecimal;

use super::errors::DomainError;
use super::product::{money, Product};

/// A reserved quantity of one product, with the name and price it had when
/// it went into the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: u32,
    pub product_name: String,
    pub unit_price: BigDecimal,
    pub quantity: u32,
}

impl CartLine {
    /// Catalog price rounded to cents. Lines are charged at this price.
    pub fn charged_unit_price(&self) -> BigDecimal {
        money(&self.unit_price)
    }

    pub fn subtotal(&self) -> BigDecimal {
        self.charged_unit_price() * BigDecimal::from(self.quantity)
    }
}

#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves `quantity` units of `product` and records the line.
    ///
    /// Stock is decremented immediately. On failure neither the product nor
    /// the cart change.
    pub fn add(&mut self, product: &mut Product, quantity: u32) -> Result<&CartLine, DomainError> {
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity(quantity));
        }
        product.reserve(quantity)?;
        self.lines.push(CartLine {
            product_id: product.id,
            product_name: product.name.clone(),
            unit_price: product.unit_price.clone(),
            quantity,
        });
        Ok(&self.lines[self.lines.len() - 1])
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total(&self) -> BigDecimal {
        lines_total(&self.lines)
    }

    /// `None` for an empty cart.
    pub fn describe(&self) -> Option<CartSummary<'_>> {
        if self.lines.is_empty() {
            None
        } else {
            Some(CartSummary { lines: &self.lines })
        }
    }

    /// Puts every reserved quantity back on its product and empties the cart.
    pub fn release(&mut self, products: &mut [Product]) {
        for line in self.lines.drain(..) {
            match products.iter_mut().find(|p| p.id == line.product_id) {
                Some(product) => product.restock(line.quantity),
                None => log::warn!(
                    "Cannot release {} units of product {}: no longer in catalog",
                    line.quantity,
                    line.product_id
                ),
            }
        }
    }
}

/// Borrowed view over a non-empty cart. Each call to [`CartSummary::lines`]
/// starts a fresh pass.
#[derive(Debug, Clone, Copy)]
pub struct CartSummary<'a> {
    lines: &'a [CartLine],
}

impl<'a> CartSummary<'a> {
    pub fn lines(&self) -> impl Iterator<Item = String> + 'a {
        self.lines.iter().map(|line| {
            format!(
                "- {} x{} = ${}",
                line.product_name,
                line.quantity,
                money(&line.subtotal())
            )
        })
    }

    pub fn total(&self) -> BigDecimal {
        lines_total(self.lines)
    }
}

fn lines_total(lines: &[CartLine]) -> BigDecimal {
    lines.iter().map(CartLine::subtotal).sum()
}
