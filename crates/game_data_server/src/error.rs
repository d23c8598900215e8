//! HTTP error responses.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use game_data_db::DbError;

/// Message returned in place of driver text when database errors are hidden.
pub const GENERIC_DB_ERROR: &str = "Internal server error";

/// JSON body of every error response: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// Error returned by request handlers.
#[derive(Debug, Display, Error)]
pub enum ApiError {
    /// A store operation failed. Always answered with 500.
    #[display("Database operation failed: {}", message)]
    Database {
        /// Message placed in the response body.
        message: String,
    },
    /// The request could not be extracted (bad JSON body, non-integer id).
    #[display("Rejected request ({}): {}", status, reason)]
    Rejected {
        /// Status chosen by the extractor.
        status: StatusCode,
        /// Extractor's explanation.
        reason: String,
    },
}

impl ApiError {
    /// Maps a store failure to a 500 response, logging the full detail.
    ///
    /// With `expose` set the body carries the raw driver message, otherwise
    /// [`GENERIC_DB_ERROR`].
    pub fn database(err: DbError, expose: bool) -> Self {
        error!(error = %err, "Database operation failed");
        let message = if expose {
            err.message
        } else {
            GENERIC_DB_ERROR.to_string()
        };
        Self::Database { message }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(status = %rejection.status(), reason = %rejection.body_text(), "Rejected request body");
        Self::Rejected {
            status: rejection.status(),
            reason: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        warn!(status = %rejection.status(), reason = %rejection.body_text(), "Rejected request path");
        Self::Rejected {
            status: rejection.status(),
            reason: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::Database { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
            Self::Rejected { status, reason } => (status, reason),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}
