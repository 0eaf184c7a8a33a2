use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::{DenseId, DenseRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub description: String,
    pub code: String,
    pub photo: String,
    pub price: f64,
    pub stock: i64,
}

/// Caller-supplied product fields. Create and update both take the full set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub code: String,
    pub photo: String,
    pub price: f64,
    pub stock: i64,
}

impl Product {
    /// Builds a fresh record stamped with the current time.
    pub fn new(id: DenseId, fields: ProductFields) -> Self {
        Self {
            id: id.value(),
            timestamp: Utc::now(),
            name: fields.name,
            description: fields.description,
            code: fields.code,
            photo: fields.photo,
            price: fields.price,
            stock: fields.stock,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: u32,
        timestamp: DateTime<Utc>,
        name: String,
        description: String,
        code: String,
        photo: String,
        price: f64,
        stock: i64,
    ) -> Self {
        Self {
            id,
            timestamp,
            name,
            description,
            code,
            photo,
            price,
            stock,
        }
    }
}

impl DenseRecord for Product {
    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }
}
