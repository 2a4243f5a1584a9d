use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};

use crate::http::error::ApiError;
use crate::http::models::MenuQuery;
use crate::menu::{Category, MenuItem};

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/menu", get(list_menu))
}

/// The whole menu, or one category of it. `all` is the same as no filter.
pub async fn list_menu(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    let category = match query.category.as_deref() {
        None | Some("all") => None,
        Some(name) => Some(name.parse::<Category>().map_err(ApiError::Validation)?),
    };

    let items = state.menu.by_category(category).into_iter().cloned().collect();
    Ok(Json(items))
}
