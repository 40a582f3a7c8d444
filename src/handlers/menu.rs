use std::io::{BufRead, Write};

use crate::application::command::{is_confirmation, parse_number, Command};
use crate::application::shop_service::{CheckoutOutcome, ShopService};
use crate::domain::errors::DomainError;
use crate::domain::ports::{CatalogStore, SalesLedger};
use crate::domain::product::money;
use crate::errors::AppError;

const BANNER: &str = "Welcome to the pet shop!";
const TITLE: &str = "=== PET SHOP - POINT OF SALE ===";

/// Console front end. All reading and printing happens here; decisions are
/// left to [`ShopService`].
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the operator picks Exit or input runs out.
    pub fn run<C, L>(&mut self, shop: &mut ShopService<C, L>) -> Result<(), AppError>
    where
        C: CatalogStore,
        L: SalesLedger,
    {
        writeln!(self.output, "{}", BANNER)?;

        loop {
            self.show_menu()?;
            let Some(choice) = self.prompt("Select an option: ")? else {
                break;
            };

            let command = match choice.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };
            if command.is_terminal() {
                break;
            }

            match self.dispatch(command, shop) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if e.is_recoverable() => self.report(&e)?,
                Err(e) => return Err(e),
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    // ── Commands ─────────────────────────────────────────────────────────────

    /// Returns `Ok(false)` when input ended mid-command.
    fn dispatch<C, L>(&mut self, command: Command, shop: &mut ShopService<C, L>) -> Result<bool, AppError>
    where
        C: CatalogStore,
        L: SalesLedger,
    {
        match command {
            Command::ListProducts => self.list_products(shop).map(|_| true),
            Command::AddToCart => self.add_to_cart(shop),
            Command::ViewCart => self.view_cart(shop).map(|_| true),
            Command::Checkout => self.checkout(shop),
            Command::Exit => Ok(false),
        }
    }

    fn list_products<C, L>(&mut self, shop: &ShopService<C, L>) -> Result<(), AppError>
    where
        C: CatalogStore,
        L: SalesLedger,
    {
        writeln!(self.output, "\n=== PRODUCTS ===")?;
        if shop.products().is_empty() {
            writeln!(self.output, "(no products)")?;
        }
        for product in shop.products() {
            writeln!(self.output, "{}", product)?;
        }
        Ok(())
    }

    fn add_to_cart<C, L>(&mut self, shop: &mut ShopService<C, L>) -> Result<bool, AppError>
    where
        C: CatalogStore,
        L: SalesLedger,
    {
        self.list_products(shop)?;

        let Some(raw_id) = self.prompt("\nProduct ID: ")? else {
            return Ok(false);
        };
        let product_id = parse_number(&raw_id)?;
        let Some(raw_quantity) = self.prompt("Quantity: ")? else {
            return Ok(false);
        };
        let quantity = parse_number(&raw_quantity)?;

        let line = shop.add_to_cart(product_id, quantity)?;
        writeln!(self.output, "Added {}x {} to the cart", line.quantity, line.product_name)?;
        Ok(true)
    }

    fn view_cart<C, L>(&mut self, shop: &ShopService<C, L>) -> Result<(), AppError>
    where
        C: CatalogStore,
        L: SalesLedger,
    {
        let Some(summary) = shop.cart().describe() else {
            writeln!(self.output, "\nThe cart is empty")?;
            return Ok(());
        };

        writeln!(self.output, "\n=== CART ===")?;
        for line in summary.lines() {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output, "\nTOTAL: ${}", money(&summary.total()))?;
        Ok(())
    }

    fn checkout<C, L>(&mut self, shop: &mut ShopService<C, L>) -> Result<bool, AppError>
    where
        C: CatalogStore,
        L: SalesLedger,
    {
        if shop.cart().is_empty() {
            return Err(DomainError::EmptyCart.into());
        }
        self.view_cart(shop)?;

        let Some(customer) = self.prompt("\nCustomer name: ")? else {
            return Ok(false);
        };
        let Some(answer) = self.prompt("Confirm purchase? (s/n): ")? else {
            return Ok(false);
        };

        match shop.checkout(customer.trim(), is_confirmation(&answer))? {
            CheckoutOutcome::Completed {
                total,
                catalog_saved,
            } => {
                writeln!(self.output, "\nPurchase completed. Total: ${}", money(&total))?;
                if !catalog_saved {
                    writeln!(
                        self.output,
                        "Warning: the sale was recorded but the product file could not be updated"
                    )?;
                }
            }
            CheckoutOutcome::Cancelled { stock_restored } => {
                writeln!(self.output, "Purchase cancelled")?;
                if stock_restored {
                    writeln!(self.output, "Reserved stock was returned to the shelves")?;
                }
            }
        }
        Ok(true)
    }

    // ── Console helpers ──────────────────────────────────────────────────────

    fn show_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\n{}", TITLE)?;
        for command in Command::ALL {
            writeln!(self.output, "{}", command)?;
        }
        Ok(())
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn report(&mut self, error: &AppError) -> Result<(), AppError> {
        log::debug!("Recoverable error: {}", error);
        writeln!(self.output, "Error: {}", error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::str::FromStr;

    use bigdecimal::BigDecimal;

    use super::*;
    use crate::domain::product::Product;
    use crate::domain::sale::Sale;

    struct MemoryCatalog {
        products: Vec<Product>,
        saves: RefCell<usize>,
    }

    impl CatalogStore for &MemoryCatalog {
        fn load(&self) -> Result<Option<Vec<Product>>, DomainError> {
            Ok(Some(self.products.clone()))
        }

        fn save(&self, _products: &[Product]) -> Result<(), DomainError> {
            *self.saves.borrow_mut() += 1;
            Ok(())
        }
    }

    struct MemoryLedger {
        customers: RefCell<Vec<String>>,
    }

    impl SalesLedger for &MemoryLedger {
        fn append(&self, sale: &Sale<'_>) -> Result<(), DomainError> {
            self.customers.borrow_mut().push(sale.customer.clone());
            Ok(())
        }
    }

    fn catalog() -> MemoryCatalog {
        MemoryCatalog {
            products: vec![Product::new(
                1,
                "Dog Food",
                "Food",
                BigDecimal::from_str("10.00").unwrap(),
                5,
            )],
            saves: RefCell::new(0),
        }
    }

    fn ledger() -> MemoryLedger {
        MemoryLedger {
            customers: RefCell::new(Vec::new()),
        }
    }

    fn session(script: &str, catalog: &MemoryCatalog, ledger: &MemoryLedger) -> String {
        let (mut shop, _) = ShopService::open(catalog, ledger, false).unwrap();
        let mut menu = Menu::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        menu.run(&mut shop).expect("session failed");
        String::from_utf8(menu.into_output()).unwrap()
    }

    #[test]
    fn lists_products_and_exits() {
        let (c, l) = (catalog(), ledger());
        let out = session("1\n5\n", &c, &l);

        assert!(out.starts_with(BANNER));
        assert!(out.contains("1: Dog Food [Food] ($10.00) | Stock: 5"));
        assert!(out.trim_end().ends_with("Goodbye!"));
    }

    #[test]
    fn invalid_option_returns_to_menu() {
        let (c, l) = (catalog(), ledger());
        let out = session("9\n5\n", &c, &l);

        assert!(out.contains("Error: Invalid option: '9'"));
        assert_eq!(out.matches(TITLE).count(), 2);
    }

    #[test]
    fn non_numeric_quantity_is_reported() {
        let (c, l) = (catalog(), ledger());
        let out = session("2\n1\nthree\n3\n5\n", &c, &l);

        assert!(out.contains("Error: Please enter a valid number (got 'three')"));
        assert!(out.contains("The cart is empty"));
    }

    #[test]
    fn unknown_id_and_insufficient_stock_are_distinct() {
        let (c, l) = (catalog(), ledger());
        let out = session("2\n7\n1\n2\n1\n10\n5\n", &c, &l);

        assert!(out.contains("Error: Product not found: 7"));
        assert!(out.contains("Error: Insufficient stock of Dog Food: requested 10, available 5"));
    }

    #[test]
    fn empty_cart_checkout_is_reported() {
        let (c, l) = (catalog(), ledger());
        let out = session("4\n5\n", &c, &l);

        assert!(out.contains("Error: The cart is empty"));
        assert!(l.customers.borrow().is_empty());
        assert_eq!(*c.saves.borrow(), 0);
    }

    #[test]
    fn confirmed_checkout_reports_total() {
        let (c, l) = (catalog(), ledger());
        let out = session("2\n1\n3\n3\n4\nAna\nS\n3\n5\n", &c, &l);

        assert!(out.contains("Added 3x Dog Food to the cart"));
        assert!(out.contains("- Dog Food x3 = $30.00"));
        assert!(out.contains("TOTAL: $30.00"));
        assert!(out.contains("Purchase completed. Total: $30.00"));
        assert_eq!(*l.customers.borrow(), vec!["Ana".to_string()]);
        assert_eq!(*c.saves.borrow(), 1);
        assert!(out.trim_end().ends_with("Goodbye!"));
        assert!(out.contains("The cart is empty"));
    }

    #[test]
    fn declined_checkout_is_cancelled() {
        let (c, l) = (catalog(), ledger());
        let out = session("2\n1\n3\n4\nAna\nn\n1\n5\n", &c, &l);

        assert!(out.contains("Purchase cancelled"));
        assert!(out.contains("1: Dog Food [Food] ($10.00) | Stock: 2"));
        assert!(l.customers.borrow().is_empty());
        assert_eq!(*c.saves.borrow(), 0);
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (c, l) = (catalog(), ledger());
        let out = session("2\n1\n", &c, &l);

        assert!(out.trim_end().ends_with("Goodbye!"));
    }
}
