use axum::{Json, http::StatusCode, response::IntoResponse};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

use crate::types::ErrorBody;

#[derive(Debug, ThisError)]
pub enum VisitsError {
    #[error("failed to connect to DB after {attempts} attempts: {source}")]
    Connection {
        attempts: usize,
        #[source]
        source: SqlxError,
    },

    #[error("{0}")]
    Query(#[from] SqlxError),

    #[error("Config error: {0}")]
    Config(#[from] figment::Error),
}

impl IntoResponse for VisitsError {
    fn into_response(self) -> axum::response::Response {
        // Every failure is scoped to the request and reported verbatim.
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
