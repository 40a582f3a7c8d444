use std::env;
use std::path::PathBuf;

use crate::errors::AppError;

pub const CATALOG_PATH_VAR: &str = "SHOP_CATALOG_PATH";
pub const SALES_PATH_VAR: &str = "SHOP_SALES_PATH";
pub const RESTORE_STOCK_VAR: &str = "SHOP_RESTORE_STOCK_ON_CANCEL";

pub const DEFAULT_CATALOG_PATH: &str = "data/products.csv";
pub const DEFAULT_SALES_PATH: &str = "data/sales.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog_path: PathBuf,
    pub sales_path: PathBuf,
    /// Put reserved stock back when a checkout is declined.
    pub restore_stock_on_cancel: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            sales_path: PathBuf::from(DEFAULT_SALES_PATH),
            restore_stock_on_cancel: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let restore_stock_on_cancel = match lookup(RESTORE_STOCK_VAR) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::Config(format!("{} must be true or false, got '{}'", RESTORE_STOCK_VAR, raw))
            })?,
            None => defaults.restore_stock_on_cancel,
        };

        Ok(Self {
            catalog_path: lookup(CATALOG_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            sales_path: lookup(SALES_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.sales_path),
            restore_stock_on_cancel,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.catalog_path, PathBuf::from("data/products.csv"));
        assert_eq!(settings.sales_path, PathBuf::from("data/sales.csv"));
        assert!(!settings.restore_stock_on_cancel);
    }

    #[test]
    fn overrides_from_environment() {
        let settings = Settings::from_lookup(lookup_from(&[
            (CATALOG_PATH_VAR, "/srv/shop/catalog.csv"),
            (SALES_PATH_VAR, "/srv/shop/sales.csv"),
            (RESTORE_STOCK_VAR, "TRUE"),
        ]))
        .unwrap();

        assert_eq!(settings.catalog_path, PathBuf::from("/srv/shop/catalog.csv"));
        assert_eq!(settings.sales_path, PathBuf::from("/srv/shop/sales.csv"));
        assert!(settings.restore_stock_on_cancel);
    }

    #[test]
    fn invalid_bool_is_config_error() {
        let err = Settings::from_lookup(lookup_from(&[(RESTORE_STOCK_VAR, "maybe")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
