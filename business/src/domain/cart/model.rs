use super::errors::CartError;
use crate::domain::shared::value_objects::{DenseId, DenseRecord};

/// One product entry in a cart. `product_id` is checked only when the item is
/// first added and may point at a product that was deleted later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub product_id: u32,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub id: u32,
    pub products: Vec<LineItem>,
}

/// What `Cart::add_product` did to the line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemChange {
    Created,
    Incremented { quantity: u32 },
}

impl Cart {
    pub fn new(id: DenseId) -> Self {
        Self {
            id: id.value(),
            products: Vec::new(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: u32, products: Vec<LineItem>) -> Self {
        Self { id, products }
    }

    pub fn contains_product(&self, product_id: u32) -> bool {
        self.products.iter().any(|item| item.product_id == product_id)
    }

    /// Adds one unit: a new line item at quantity 1, or +1 on the existing one.
    pub fn add_product(&mut self, product_id: u32) -> LineItemChange {
        match self
            .products
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                LineItemChange::Incremented {
                    quantity: item.quantity,
                }
            }
            None => {
                self.products.push(LineItem {
                    product_id,
                    quantity: 1,
                });
                LineItemChange::Created
            }
        }
    }

    /// Removes the whole line item for `product_id`, whatever its quantity.
    pub fn remove_product(&mut self, product_id: u32) -> Result<LineItem, CartError> {
        let position = self
            .products
            .iter()
            .position(|item| item.product_id == product_id)
            .ok_or(CartError::ProductNotInCart)?;
        Ok(self.products.remove(position))
    }
}

impl DenseRecord for Cart {
    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_cart() -> Cart {
        Cart::new(DenseId::next(0))
    }

    #[test]
    fn should_start_with_no_line_items() {
        let cart = empty_cart();

        assert_eq!(cart.id, 1);
        assert!(cart.products.is_empty());
    }

    #[test]
    fn should_create_line_item_with_quantity_one_when_product_is_new() {
        let mut cart = empty_cart();

        let change = cart.add_product(2);

        assert_eq!(change, LineItemChange::Created);
        assert_eq!(
            cart.products,
            vec![LineItem {
                product_id: 2,
                quantity: 1
            }]
        );
    }

    #[test]
    fn should_aggregate_repeated_adds_into_single_line_item() {
        let mut cart = empty_cart();

        cart.add_product(2);
        cart.add_product(2);
        let change = cart.add_product(2);

        assert_eq!(change, LineItemChange::Incremented { quantity: 3 });
        assert_eq!(cart.products.len(), 1);
        assert_eq!(cart.products[0].quantity, 3);
    }

    #[test]
    fn should_keep_insertion_order_across_products() {
        let mut cart = empty_cart();

        cart.add_product(3);
        cart.add_product(1);
        cart.add_product(3);

        let ids: Vec<u32> = cart.products.iter().map(|item| item.product_id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn should_remove_whole_line_item_regardless_of_quantity() {
        let mut cart = empty_cart();
        cart.add_product(5);
        cart.add_product(5);
        cart.add_product(7);

        let removed = cart.remove_product(5).unwrap();

        assert_eq!(removed.quantity, 2);
        assert!(!cart.contains_product(5));
        assert!(cart.contains_product(7));
    }

    #[test]
    fn should_reject_removal_when_product_not_in_cart() {
        let mut cart = empty_cart();
        cart.add_product(1);

        let result = cart.remove_product(2);

        assert!(matches!(result.unwrap_err(), CartError::ProductNotInCart));
        assert_eq!(cart.products.len(), 1);
    }
}
