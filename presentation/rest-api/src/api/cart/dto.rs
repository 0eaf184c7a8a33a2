use poem_openapi::Object;

use business::domain::cart::model::LineItem;

#[derive(Debug, Clone, Object)]
pub struct LineItemResponse {
    /// Referenced product identifier
    pub id: u32,
    /// Units of the product in the cart
    pub quantity: u32,
}

impl From<LineItem> for LineItemResponse {
    fn from(item: LineItem) -> Self {
        Self {
            id: item.product_id,
            quantity: item.quantity,
        }
    }
}
