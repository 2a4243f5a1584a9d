use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::post,
    Router,
};
use tracing::instrument;

use crate::http::error::ApiError;
use crate::http::models::{OtpResponse, SendOtpRequest, VerifyOtpRequest};

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/send-otp", post(send_otp).put(verify_otp))
}

#[instrument(skip_all)]
pub async fn send_otp(
    State(state): State<AppState>,
    payload: Result<Json<SendOtpRequest>, JsonRejection>,
) -> Result<Json<OtpResponse>, ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::Validation("Valid email is required".into()))?;
    let email = request.email.unwrap_or_default();

    let issued = state.verification_client.issue(&email).await?;

    Ok(Json(OtpResponse {
        success: true,
        message: "OTP sent successfully".into(),
        expires_at: Some(issued.expires_at),
        otp: state.echo_otp.then_some(issued.code),
    }))
}

#[instrument(skip_all)]
pub async fn verify_otp(
    State(state): State<AppState>,
    payload: Result<Json<VerifyOtpRequest>, JsonRejection>,
) -> Result<Json<OtpResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|_| ApiError::Validation("Email and OTP are required".into()))?;
    let email = request.email.unwrap_or_default();
    let otp = request.otp.unwrap_or_default();

    state.verification_client.verify(&email, &otp).await?;

    Ok(Json(OtpResponse {
        success: true,
        message: "OTP verified successfully".into(),
        expires_at: None,
        otp: None,
    }))
}
