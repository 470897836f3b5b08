use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Internal server error: {0}")]
    InternalWithMsg(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(e) => {
                error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalWithMsg(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

/// The three independent reads an availability calculation depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    StudioConfiguration,
    Services,
    Reservations,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataSource::StudioConfiguration => "studio configuration",
            DataSource::Services => "services",
            DataSource::Reservations => "reservations",
        };
        f.write_str(name)
    }
}

/// Why an availability calculation produced no result. Callers degrade both
/// to an empty list but may report them differently.
#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Studio {studio_id} has no resolvable schedule")]
    ConfigurationNotFound { studio_id: String },
    #[error("Failed to fetch {source_kind}: {error}")]
    SourceFetch {
        source_kind: DataSource,
        #[source]
        error: AppError,
    },
}

impl AvailabilityError {
    pub fn is_configuration_not_found(&self) -> bool {
        matches!(self, AvailabilityError::ConfigurationNotFound { .. })
    }
}
