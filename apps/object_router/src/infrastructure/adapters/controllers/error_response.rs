use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::core::domain::models::AppError;

pub fn status_of(err: &AppError) -> StatusCode {
    match err {
        AppError::InstanceNotAccessible(_)
        | AppError::NoAvailableNode
        | AppError::ObjectNotFound(_)
        | AppError::UnknownInstance(_) => StatusCode::NOT_FOUND,
        AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        AppError::Timeout(_)
        | AppError::Backend(_)
        | AppError::Discovery(_)
        | AppError::Config(_)
        | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_of(&self);

        if status.is_server_error() {
            error!(error = %self, %status, "request failed");
        } else {
            warn!(error = %self, %status, "request rejected");
        }

        (status, self.to_string()).into_response()
    }
}
