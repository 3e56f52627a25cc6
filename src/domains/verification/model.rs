use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct SendVerificationRequest {
  #[validate(length(min = 1, message = "email must not be empty"))]
  pub email: String,
  #[validate(length(min = 1, message = "token must not be empty"))]
  pub token: String,
}
