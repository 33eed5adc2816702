use axum::{
    Json,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use sqlx::Connection;
use tracing::{debug, error};

use crate::config::Config;
use crate::db::{connect, record_visit};
use crate::types::VisitReport;
use crate::{VisitsError, router::VisitsState};

/// `/`: answer preflights, otherwise record a visit and report it.
pub async fn visits_handler(
    State(state): State<VisitsState>,
    method: Method,
) -> Result<Response, VisitsError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    match visit(&state.config).await {
        Ok(report) => Ok(Json(report).into_response()),
        Err(e) => {
            error!(error = %e, "visit request failed");
            Err(e)
        }
    }
}

/// One connection per request, closed on every exit path once connected.
async fn visit(cfg: &Config) -> Result<VisitReport, VisitsError> {
    let mut conn = connect(cfg).await?;
    let result = record_visit(&mut conn).await;
    if let Err(e) = conn.close().await {
        debug!(error = %e, "closing database connection failed");
    }
    result
}
