//! JSON API over the ordering core, built on axum.
//!
//! | Method | Path               | Operation                      |
//! |--------|--------------------|--------------------------------|
//! | POST   | `/api/orders`      | place an order                 |
//! | GET    | `/api/orders/{id}` | order with its items           |
//! | GET    | `/api/menu`        | menu, optional `?category=`    |
//! | POST   | `/api/send-otp`    | issue a verification code      |
//! | PUT    | `/api/send-otp`    | verify a code                  |
//!
//! Failures are reported as `{"error": "<message>"}` with a status matching the category.

pub mod error;
pub mod handlers;
pub mod models;

pub use error::ApiError;
pub use handlers::{router, AppState};
