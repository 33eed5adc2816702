use std::sync::Arc;

use axum::{Router, middleware, routing::any};

use crate::config::Config;
use crate::handlers::visits_handler;
use crate::middleware::allow_any_origin;

#[derive(Clone)]
pub struct VisitsState {
    pub config: Arc<Config>,
}

impl VisitsState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

pub fn visits_router(state: VisitsState) -> Router {
    Router::new()
        .route("/", any(visits_handler))
        .layer(middleware::from_fn(allow_any_origin))
        .with_state(state)
}
