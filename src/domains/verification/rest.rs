use axum::{
  extract::{Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};
use validator::Validate;

use super::model::SendVerificationRequest;
use crate::{
  email::DeliveryReceipt,
  state::{AppState, SharedAppState},
  utils::error::AppError,
};

pub fn verification_routes() -> Router<SharedAppState> {
  Router::new().route("/emails/verification", post(send_verification_handler))
}

pub async fn send_verification_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<SendVerificationRequest>,
) -> Result<JsonResponse<DeliveryReceipt>, AppError> {
  payload.validate()?;

  let receipt = state.send_verification_email(payload).await?;
  Ok(JsonResponse(receipt))
}
