use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::AccountError;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ExistsResponse {
    pub exists: bool,
}

// Error response struct
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for AccountError to implement IntoResponse
pub struct ApiError(pub AccountError);

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            AccountError::AlreadyExists(_) => StatusCode::CONFLICT,
            AccountError::NotFound(_) => StatusCode::NOT_FOUND,
            AccountError::InvalidCredentials | AccountError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AccountError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AccountError::Storage(_) | AccountError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Collaborator diagnostics stay in the logs.
        let error_message = match self.0 {
            AccountError::Storage(_) | AccountError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
