use std::fmt;

use bigdecimal::BigDecimal;

use super::errors::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub unit_price: BigDecimal,
    pub stock: u32,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: BigDecimal,
        stock: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            unit_price,
            stock,
        }
    }

    /// Takes `quantity` units out of stock, leaving the product untouched
    /// when there are not enough.
    pub fn reserve(&mut self, quantity: u32) -> Result<(), DomainError> {
        if quantity > self.stock {
            return Err(DomainError::InsufficientStock {
                product: self.name.clone(),
                requested: quantity,
                available: self.stock,
            });
        }
        self.stock -= quantity;
        Ok(())
    }

    pub fn restock(&mut self, quantity: u32) {
        self.stock = self.stock.saturating_add(quantity);
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}] (${}) | Stock: {}",
            self.id,
            self.name,
            self.category,
            money(&self.unit_price),
            self.stock
        )
    }
}

/// Renders an amount with two decimal places, rounding half up.
pub fn money(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(2, bigdecimal::RoundingMode::HalfUp)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dog_food(stock: u32) -> Product {
        Product::new(
            1,
            "Dog Food",
            "Food",
            BigDecimal::from_str("10.00").expect("valid decimal"),
            stock,
        )
    }

    #[test]
    fn reserve_decrements_stock() {
        let mut p = dog_food(5);
        p.reserve(3).expect("enough stock");
        assert_eq!(p.stock, 2);
    }

    #[test]
    fn reserve_whole_stock_leaves_zero() {
        let mut p = dog_food(5);
        p.reserve(5).expect("enough stock");
        assert_eq!(p.stock, 0);
    }

    #[test]
    fn reserve_more_than_stock_fails_without_change() {
        let mut p = dog_food(5);
        let err = p.reserve(10).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InsufficientStock {
                requested: 10,
                available: 5,
                ..
            }
        ));
        assert_eq!(p.stock, 5);
    }

    #[test]
    fn restock_adds_back() {
        let mut p = dog_food(2);
        p.restock(3);
        assert_eq!(p.stock, 5);
    }

    #[test]
    fn display_shows_price_with_two_decimals() {
        let p = Product::new(7, "Cat Toy", "Toys", BigDecimal::from(4), 12);
        assert_eq!(p.to_string(), "7: Cat Toy [Toys] ($4.00) | Stock: 12");
    }

    #[test]
    fn money_rounds_half_up() {
        let amount = BigDecimal::from_str("2.345").expect("valid decimal");
        assert_eq!(money(&amount).to_string(), "2.35");
    }
}
