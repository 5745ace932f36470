// src/error.rs
//! Error taxonomy surfaced at the web boundary.
//!
//! Validation -> 400, NotFound -> 404, everything else -> 500. Store and
//! internal failures are logged server-side and replaced by a generic
//! message so persistence details never leak into responses.

use rocket::http::{ContentType, Status};
use rocket::response::{self, Responder, Response};
use rocket::Request;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    ExternalService(String),
    #[error("storage failure")]
    Store(#[from] sqlx::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    fn status(&self) -> Status {
        match self {
            ApiError::Validation(_) => Status::BadRequest,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::ExternalService(_) | ApiError::Store(_) | ApiError::Internal(_) => {
                Status::InternalServerError
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            ApiError::Store(_) => "STORE_ERROR",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn public_message(&self) -> String {
        match self {
            ApiError::Validation(msg) | ApiError::NotFound(msg) => msg.clone(),
            ApiError::ExternalService(msg) => msg.clone(),
            ApiError::Store(_) | ApiError::Internal(_) => "Server error".to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    error_code: &'static str,
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        match &self {
            ApiError::Store(e) => error!("store failure: {e}"),
            ApiError::Internal(e) => error!("internal error: {e:?}"),
            ApiError::ExternalService(msg) => error!("external service failure: {msg}"),
            _ => {}
        }

        let body = serde_json::to_string(&ErrorBody {
            success: false,
            message: self.public_message(),
            error_code: self.error_code(),
        })
        .map_err(|_| Status::InternalServerError)?;

        Response::build()
            .status(self.status())
            .header(ContentType::JSON)
            .sized_body(body.len(), std::io::Cursor::new(body))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::validation("bad").status(), Status::BadRequest);
        assert_eq!(ApiError::not_found("gone").status(), Status::NotFound);
        assert_eq!(
            ApiError::ExternalService("down".into()).status(),
            Status::InternalServerError
        );
    }

    #[test]
    fn test_store_errors_do_not_leak_details() {
        let err = ApiError::Store(sqlx::Error::PoolClosed);
        assert_eq!(err.public_message(), "Server error");
        assert_eq!(err.error_code(), "STORE_ERROR");
    }
}
