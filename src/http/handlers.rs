use crate::clients::{OrderClient, VerificationClient};
use crate::config::Config;
use crate::lifecycle::OrderSystem;
use crate::menu::Menu;
use axum::Router;
use std::sync::Arc;

pub mod menu;
pub mod order;
pub mod otp;

#[derive(Clone)]
pub struct AppState {
    pub order_client: OrderClient,
    pub verification_client: VerificationClient,
    pub menu: Arc<Menu>,
    /// Include issued verification codes in responses (demo only).
    pub echo_otp: bool,
}

impl AppState {
    pub fn new(system: &OrderSystem, config: &Config) -> Self {
        Self {
            order_client: system.order_client.clone(),
            verification_client: system.verification_client.clone(),
            menu: system.menu.clone(),
            echo_otp: config.echo_otp,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(order::router())
        .merge(menu::router())
        .merge(otp::router())
        .with_state(state)
}
