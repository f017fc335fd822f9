use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const WWW_AUTHENTICATE_CHALLENGE: &str = "Bearer realm=\"services-api\"";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
}

#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, WWW_AUTHENTICATE_CHALLENGE)],
                Json(StatusBody {
                    status: "unauthorized",
                }),
            )
                .into_response(),
        }
    }
}
