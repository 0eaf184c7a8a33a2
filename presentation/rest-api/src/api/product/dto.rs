use std::str::FromStr;

use poem_openapi::{ApiRequest, Object, payload::Form, payload::Json};
use serde::{Deserialize, Deserializer};

use business::domain::product::model::{Product, ProductFields};

/// Body of create and update. Absent fields fall back to empty values.
#[derive(Debug, Clone, Default, Object, Deserialize)]
#[serde(default)]
pub struct ProductRequest {
    /// Product name
    #[oai(default)]
    pub name: String,
    /// Free-form description
    #[oai(default)]
    pub description: String,
    /// Catalogue code
    #[oai(default)]
    pub code: String,
    /// Photo URL
    #[oai(default)]
    pub photo: String,
    /// Unit price
    #[oai(default)]
    #[serde(deserialize_with = "number_or_default")]
    pub price: f64,
    /// Units in stock
    #[oai(default)]
    #[serde(deserialize_with = "number_or_default")]
    pub stock: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FormNumber<T> {
    Number(T),
    Text(String),
}

/// Form fields arrive as text; blank or unparsable values become zero.
fn number_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr + Default,
{
    Ok(match FormNumber::<T>::deserialize(deserializer)? {
        FormNumber::Number(n) => n,
        FormNumber::Text(s) => s.trim().parse().unwrap_or_default(),
    })
}

/// Product body, sent either as JSON or as an HTML form.
#[derive(ApiRequest)]
pub enum ProductBody {
    Json(Json<ProductRequest>),
    Form(Form<ProductRequest>),
}

impl From<ProductBody> for ProductFields {
    fn from(body: ProductBody) -> Self {
        match body {
            ProductBody::Json(Json(request)) | ProductBody::Form(Form(request)) => request.into(),
        }
    }
}

impl From<ProductRequest> for ProductFields {
    fn from(request: ProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            code: request.code,
            photo: request.photo,
            price: request.price,
            stock: request.stock,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Position-based identifier (1..N)
    pub id: u32,
    /// Creation time in epoch milliseconds
    pub timestamp: i64,
    pub name: String,
    pub description: String,
    pub code: String,
    pub photo: String,
    pub price: f64,
    pub stock: i64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            timestamp: product.timestamp.timestamp_millis(),
            name: product.name,
            description: product.description,
            code: product.code,
            photo: product.photo,
            price: product.price,
            stock: product.stock,
        }
    }
}
