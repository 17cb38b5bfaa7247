pub mod hello;
pub mod users;

use std::sync::Arc;

use axum::Router;

use crate::AppState;

/// All API routes, before nesting under the context path.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(hello::router())
        .merge(users::router(state))
}
