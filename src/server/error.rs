use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::error::FolioError;

/// Handler error. Renders as a small HTML page; page handlers never let a
/// single failure take the rest of the site down.
#[derive(Debug)]
pub struct AppError(pub FolioError);

impl From<FolioError> for AppError {
    fn from(err: FolioError) -> Self {
        AppError(err)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            FolioError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            FolioError::SubmissionInProgress => StatusCode::CONFLICT,
            FolioError::Delivery(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }
        let body = format!(
            "<!DOCTYPE html><html><body><h1>{}</h1><p><a href=\"/\">Return to Home</a></p></body></html>",
            status.canonical_reason().unwrap_or("Error")
        );
        (status, Html(body)).into_response()
    }
}
