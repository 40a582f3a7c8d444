use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;

use super::cart::CartLine;

/// A confirmed checkout, ready to be written to the sales ledger.
#[derive(Debug, Clone)]
pub struct Sale<'a> {
    pub timestamp: NaiveDateTime,
    pub customer: String,
    pub total: BigDecimal,
    pub lines: &'a [CartLine],
}
