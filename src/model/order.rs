/// Represents a placed customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Queue number assignment in `on_create`
use crate::model::OrderItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    EatHere,
    TakeHome,
}

impl Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::EatHere => f.write_str("eat-here"),
            OrderType::TakeHome => f.write_str("take-home"),
        }
    }
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eat-here" => Ok(OrderType::EatHere),
            "take-home" => Ok(OrderType::TakeHome),
            other => Err(format!("Unknown order type: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    /// Assigned once, by `on_create`.
    pub queue_number: u32,
    pub customer_name: String,
    pub customer_email: String,
    pub order_type: OrderType,
    /// Free-form label such as `cash` or `qr-code`.
    pub payment_method: String,
    /// As submitted by the client, see [`TotalPolicy`](crate::pricing::TotalPolicy).
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new order. Produced by [`CreateOrderRequest::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub customer_name: String,
    pub customer_email: String,
    pub order_type: OrderType,
    pub payment_method: String,
    pub total_amount: f64,
}

/// One validated cart line of an order request.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl OrderLine {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A request that passed validation and has not touched any state yet.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub order: OrderCreate,
    pub items: Vec<OrderLine>,
}

impl OrderDraft {
    /// Σ price × quantity over the lines.
    pub fn computed_total(&self) -> f64 {
        self.items.iter().map(OrderLine::subtotal).sum()
    }
}

/// The `CreateOrder` body as it arrives over the wire.
///
/// Every field is optional so that a missing field is reported as a validation error
/// instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub order_type: Option<String>,
    pub payment_method: Option<String>,
    pub items: Option<Vec<OrderLineRequest>>,
    pub total_amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderLineRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

pub const MISSING_FIELDS: &str = "Missing required fields";

impl CreateOrderRequest {
    /// Checks presence and shape of every field. Returns the message to report on failure.
    pub fn validate(self) -> Result<OrderDraft, String> {
        let customer_name = required(self.customer_name)?;
        let customer_email = required(self.customer_email)?;
        let order_type: OrderType = required(self.order_type)?.parse()?;
        let payment_method = required(self.payment_method)?;
        let total_amount = self.total_amount.ok_or(MISSING_FIELDS)?;
        let lines = self.items.ok_or(MISSING_FIELDS)?;

        if lines.is_empty() {
            return Err("Order must contain at least one item".into());
        }
        if !total_amount.is_finite() || total_amount < 0.0 {
            return Err("Invalid total amount".into());
        }

        let items = lines
            .into_iter()
            .map(OrderLineRequest::validate)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(OrderDraft {
            order: OrderCreate {
                customer_name,
                customer_email,
                order_type,
                payment_method,
                total_amount,
            },
            items,
        })
    }
}

impl OrderLineRequest {
    fn validate(self) -> Result<OrderLine, String> {
        let name = required(self.name)?;
        let price = self.price.ok_or(MISSING_FIELDS)?;
        let quantity = self.quantity.ok_or(MISSING_FIELDS)?;

        if !price.is_finite() || price < 0.0 {
            return Err(format!("Invalid price for {name}"));
        }
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| format!("Invalid quantity for {name}"))?;

        Ok(OrderLine {
            name,
            price,
            quantity,
        })
    }
}

fn required(field: Option<String>) -> Result<String, String> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MISSING_FIELDS.into()),
    }
}

/// What the caller gets back from a successful `createOrder`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReceipt {
    pub order_id: OrderId,
    pub queue_number: u32,
    /// The submitted total differed from Σ price × quantity and was kept as submitted.
    pub total_mismatch: bool,
}

/// An order together with its lines, as returned by `getOrder`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetails {
    pub order: Order,
    /// Insertion ordered; empty when no lines were stored.
    pub items: Vec<OrderItem>,
}

impl OrderDetails {
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateOrderRequest {
        CreateOrderRequest {
            customer_name: Some("Nok".into()),
            customer_email: Some("nok@example.com".into()),
            order_type: Some("eat-here".into()),
            payment_method: Some("cash".into()),
            items: Some(vec![OrderLineRequest {
                name: Some("Rice".into()),
                price: Some(50.0),
                quantity: Some(2),
            }]),
            total_amount: Some(100.0),
        }
    }

    #[test]
    fn test_valid_request() {
        let draft = request().validate().unwrap();
        assert_eq!(draft.order.order_type, OrderType::EatHere);
        assert_eq!(draft.items[0].quantity, 2);
        assert_eq!(draft.computed_total(), 100.0);
    }

    #[test]
    fn test_missing_fields() {
        let mut req = request();
        req.customer_email = None;
        assert_eq!(req.validate().unwrap_err(), MISSING_FIELDS);

        let mut req = request();
        req.payment_method = Some("  ".into());
        assert_eq!(req.validate().unwrap_err(), MISSING_FIELDS);

        let mut req = request();
        req.total_amount = None;
        assert_eq!(req.validate().unwrap_err(), MISSING_FIELDS);
    }

    #[test]
    fn test_malformed_fields() {
        let mut req = request();
        req.items = Some(vec![]);
        assert!(req.validate().is_err());

        let mut req = request();
        req.order_type = Some("delivery".into());
        assert_eq!(req.validate().unwrap_err(), "Unknown order type: delivery");

        let mut req = request();
        req.items.as_mut().unwrap()[0].quantity = Some(0);
        assert_eq!(req.validate().unwrap_err(), "Invalid quantity for Rice");

        let mut req = request();
        req.items.as_mut().unwrap()[0].price = Some(-1.0);
        assert_eq!(req.validate().unwrap_err(), "Invalid price for Rice");

        let mut req = request();
        req.total_amount = Some(f64::NAN);
        assert_eq!(req.validate().unwrap_err(), "Invalid total amount");
    }

    /// Zero is a total, not a missing one: only an absent `totalAmount` is reported as
    /// a missing field.
    #[test]
    fn test_zero_total_is_not_a_missing_field() {
        let mut req = request();
        req.total_amount = Some(0.0);
        let draft = req.validate().unwrap();
        assert_eq!(draft.order.total_amount, 0.0);

        let mut req = request();
        req.total_amount = None;
        assert_eq!(req.validate().unwrap_err(), MISSING_FIELDS);

        let mut req = request();
        req.total_amount = Some(-0.01);
        assert_eq!(req.validate().unwrap_err(), "Invalid total amount");
    }

    #[test]
    fn test_wire_names() {
        let req: CreateOrderRequest = serde_json::from_str(
            r#"{"customerName":"A","customerEmail":"a@b.c","orderType":"take-home",
                "paymentMethod":"qr-code","items":[{"name":"Ice","price":50,"quantity":1}],
                "totalAmount":50}"#,
        )
        .unwrap();
        let draft = req.validate().unwrap();
        assert_eq!(draft.order.order_type, OrderType::TakeHome);

        let json = serde_json::to_value(OrderType::EatHere).unwrap();
        assert_eq!(json, "eat-here");
    }
}
