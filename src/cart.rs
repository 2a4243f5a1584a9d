//! The customer's cart: an ordered list of menu items and quantities.
//!
//! [`Cart`] is a plain value. [`CartStore`] wraps one in a watch channel so every
//! mutation is published to subscribers (a cart badge, a checkout page) as a new snapshot.

use crate::clients::OrderClient;
use crate::menu::MenuItem;
use crate::model::{CreateOrderRequest, OrderLineRequest, OrderReceipt, OrderType};
use crate::order_actor::OrderError;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds one of `item`, appending a new line the first time it is added.
    pub fn add_item(&mut self, item: &MenuItem) {
        match self.lines.iter_mut().find(|line| line.item.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine {
                item: item.clone(),
                quantity: 1,
            }),
        }
    }

    pub fn remove_item(&mut self, item_id: &str) {
        self.lines.retain(|line| line.item.id != item_id);
    }

    /// Sets the quantity of an existing line; zero removes it. Unknown ids are ignored.
    pub fn update_quantity(&mut self, item_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(item_id);
        } else if let Some(line) = self.lines.iter_mut().find(|line| line.item.id == item_id) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.item.price * f64::from(line.quantity))
            .sum()
    }

    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    /// Builds the order request for this cart. The total is the cart's own.
    pub fn to_order_request(&self, customer: &CheckoutDetails) -> CreateOrderRequest {
        CreateOrderRequest {
            customer_name: Some(customer.customer_name.clone()),
            customer_email: Some(customer.customer_email.clone()),
            order_type: Some(customer.order_type.to_string()),
            payment_method: Some(customer.payment_method.clone()),
            items: Some(
                self.lines
                    .iter()
                    .map(|line| OrderLineRequest {
                        name: Some(line.item.name.clone()),
                        price: Some(line.item.price),
                        quantity: Some(i64::from(line.quantity)),
                    })
                    .collect(),
            ),
            total_amount: Some(self.total()),
        }
    }
}

/// Customer information collected at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutDetails {
    pub customer_name: String,
    pub customer_email: String,
    pub order_type: OrderType,
    pub payment_method: String,
}

/// A cart that publishes every change.
#[derive(Debug)]
pub struct CartStore {
    cart: watch::Sender<Cart>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    pub fn new() -> Self {
        let (cart, _) = watch::channel(Cart::default());
        Self { cart }
    }

    /// A receiver that sees the current cart and every later snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.cart.subscribe()
    }

    pub fn snapshot(&self) -> Cart {
        self.cart.borrow().clone()
    }

    pub fn add_item(&self, item: &MenuItem) -> Cart {
        self.mutate(|cart| cart.add_item(item))
    }

    pub fn remove_item(&self, item_id: &str) -> Cart {
        self.mutate(|cart| cart.remove_item(item_id))
    }

    pub fn update_quantity(&self, item_id: &str, quantity: u32) -> Cart {
        self.mutate(|cart| cart.update_quantity(item_id, quantity))
    }

    pub fn clear(&self) -> Cart {
        self.mutate(Cart::clear)
    }

    /// Places an order for the current cart. The cart is cleared only if the order was
    /// created; on failure it is left as it was so the customer can retry.
    pub async fn checkout(
        &self,
        orders: &OrderClient,
        customer: &CheckoutDetails,
    ) -> Result<OrderReceipt, OrderError> {
        let request = self.snapshot().to_order_request(customer);
        let receipt = orders.create_order(request).await?;

        info!(order_id = %receipt.order_id, queue_number = receipt.queue_number, "Checkout complete");
        self.clear();
        Ok(receipt)
    }

    fn mutate(&self, change: impl FnOnce(&mut Cart)) -> Cart {
        self.cart.send_modify(change);
        let cart = self.snapshot();
        debug!(lines = cart.lines.len(), items = cart.item_count(), "Cart updated");
        cart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Menu;

    #[test]
    fn test_add_increments_existing_line() {
        let menu = Menu::default();
        let mut cart = Cart::default();
        cart.add_item(menu.find("6").unwrap());
        cart.add_item(menu.find("7").unwrap());
        cart.add_item(menu.find("6").unwrap());

        let names: Vec<&str> = cart.lines().iter().map(|l| l.item.name.as_str()).collect();
        assert_eq!(names, vec!["Rice", "Water"]);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), 150.0);
    }

    #[test]
    fn test_update_quantity() {
        let menu = Menu::default();
        let mut cart = Cart::default();
        cart.add_item(menu.find("1").unwrap());

        cart.update_quantity("1", 4);
        assert_eq!(cart.item_count(), 4);

        cart.update_quantity("9", 2);
        assert_eq!(cart.lines().len(), 1);

        cart.update_quantity("1", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantities_saturate() {
        let menu = Menu::default();
        let mut cart = Cart::default();
        cart.add_item(menu.find("1").unwrap());
        cart.add_item(menu.find("2").unwrap());

        cart.update_quantity("1", u32::MAX);
        cart.add_item(menu.find("1").unwrap());
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
        assert_eq!(cart.item_count(), u32::MAX);
    }

    #[test]
    fn test_order_request_from_cart() {
        let menu = Menu::default();
        let mut cart = Cart::default();
        cart.add_item(menu.find("6").unwrap());
        cart.add_item(menu.find("6").unwrap());

        let customer = CheckoutDetails {
            customer_name: "Pim".into(),
            customer_email: "pim@example.com".into(),
            order_type: OrderType::EatHere,
            payment_method: "mobile-banking".into(),
        };
        let draft = cart.to_order_request(&customer).validate().unwrap();
        assert_eq!(draft.order.total_amount, 100.0);
        assert_eq!(draft.items[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_store_publishes_snapshots() {
        let menu = Menu::default();
        let store = CartStore::new();
        let mut updates = store.subscribe();

        let after_add = store.add_item(menu.find("2").unwrap());
        updates.changed().await.unwrap();
        assert_eq!(*updates.borrow_and_update(), after_add);

        let after_clear = store.clear();
        updates.changed().await.unwrap();
        assert!(updates.borrow_and_update().is_empty());
        assert!(after_clear.is_empty());
    }

    #[tokio::test]
    async fn test_checkout_clears_only_on_success() {
        let system = crate::lifecycle::OrderSystem::new(&crate::config::Config::default());
        let store = CartStore::new();
        let customer = CheckoutDetails {
            customer_name: "Pim".into(),
            customer_email: "pim@example.com".into(),
            order_type: OrderType::TakeHome,
            payment_method: "cash".into(),
        };

        // An empty cart is rejected and stays as it was.
        let err = store.checkout(&system.order_client, &customer).await.unwrap_err();
        assert!(matches!(err, OrderError::Validation(_)));

        store.add_item(system.menu.find("6").unwrap());
        let receipt = store.checkout(&system.order_client, &customer).await.unwrap();
        assert_eq!(receipt.queue_number, 1);
        assert!(store.snapshot().is_empty());

        system.shutdown().await.unwrap();
    }
}
