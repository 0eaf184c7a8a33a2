use std::env;
use std::path::PathBuf;

/// Where the product and cart collections live on disk.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub products_file: String,
    pub carts_file: String,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - DATA_DIR: Directory holding the collection files (default: ".")
    /// - PRODUCTS_FILE: Product collection file name (default: "products.json")
    /// - CARTS_FILE: Cart collection file name (default: "carts.json")
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            products_file: env::var("PRODUCTS_FILE")
                .unwrap_or_else(|_| "products.json".to_string()),
            carts_file: env::var("CARTS_FILE").unwrap_or_else(|_| "carts.json".to_string()),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            products_file: "products.json".to_string(),
            carts_file: "carts.json".to_string(),
        }
    }
}
