use serde::{Deserialize, Serialize};

use business::domain::cart::model::{Cart, LineItem};

use crate::lenient;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItemEntity {
    #[serde(deserialize_with = "lenient::u32_or_default")]
    pub id: u32,
    #[serde(deserialize_with = "lenient::u32_or_default")]
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartEntity {
    #[serde(deserialize_with = "lenient::u32_or_default")]
    pub id: u32,
    #[serde(deserialize_with = "lenient::vec_or_default")]
    pub products: Vec<LineItemEntity>,
}

impl CartEntity {
    pub fn from_domain(cart: &Cart) -> Self {
        Self {
            id: cart.id,
            products: cart
                .products
                .iter()
                .map(|item| LineItemEntity {
                    id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }

    pub fn into_domain(self) -> Cart {
        Cart::from_repository(
            self.id,
            self.products
                .into_iter()
                .map(|item| LineItem {
                    product_id: item.id,
                    quantity: item.quantity,
                })
                .collect(),
        )
    }
}
