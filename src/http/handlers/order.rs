use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use tracing::{instrument, warn};

use crate::http::error::ApiError;
use crate::http::models::CreateOrderResponse;
use crate::model::{CreateOrderRequest, OrderDetails, OrderId};

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/orders", post(create_order))
        .route("/api/orders/{id}", get(get_order))
}

#[instrument(skip_all)]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<CreateOrderResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        warn!(error = %e, "Unreadable order body");
        ApiError::Validation("Invalid request body".into())
    })?;

    let receipt = state.order_client.create_order(request).await?;

    Ok(Json(CreateOrderResponse {
        success: true,
        order_id: receipt.order_id,
        queue_number: receipt.queue_number,
    }))
}

#[instrument(skip(state))]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderDetails>, ApiError> {
    // An id that is not a UUID cannot name an order.
    let id: OrderId = id
        .parse()
        .map_err(|_| ApiError::NotFound("Order not found".into()))?;

    let details = state.order_client.get_order(id).await?;
    Ok(Json(details))
}
