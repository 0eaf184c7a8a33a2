use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;

use crate::lenient;

/// Product record as stored in the products blob. Missing, `null` or
/// mistyped fields decode to their defaults; `timestamp` is epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductEntity {
    #[serde(deserialize_with = "lenient::u32_or_default")]
    pub id: u32,
    #[serde(deserialize_with = "lenient::i64_or_default")]
    pub timestamp: i64,
    #[serde(deserialize_with = "lenient::string_or_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string_or_default")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string_or_default")]
    pub code: String,
    #[serde(deserialize_with = "lenient::string_or_default")]
    pub photo: String,
    #[serde(deserialize_with = "lenient::f64_or_default")]
    pub price: f64,
    #[serde(deserialize_with = "lenient::i64_or_default")]
    pub stock: i64,
}

impl ProductEntity {
    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id,
            timestamp: product.timestamp.timestamp_millis(),
            name: product.name.clone(),
            description: product.description.clone(),
            code: product.code.clone(),
            photo: product.photo.clone(),
            price: product.price,
            stock: product.stock,
        }
    }

    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            DateTime::<Utc>::from_timestamp_millis(self.timestamp).unwrap_or_default(),
            self.name,
            self.description,
            self.code,
            self.photo,
            self.price,
            self.stock,
        )
    }
}
