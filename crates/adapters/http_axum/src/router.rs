//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use itech_app::ports::{ProductRepository, ServiceRepository};

use crate::state::AppState;

/// Switches applied when assembling the router.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Accept cross-origin requests from anywhere, credentials included.
    ///
    /// This mirrors the caller's origin, methods and headers back, so it must
    /// be narrowed before facing untrusted clients.
    pub cors_enabled: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self { cors_enabled: true }
    }
}

/// Build the top-level axum [`Router`].
///
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<PR, SR>(state: AppState<PR, SR>, options: &RouterOptions) -> Router
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
{
    let mut router = Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .with_state(state);

    if options.cors_enabled {
        router = router.layer(CorsLayer::very_permissive());
    }

    router.layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}
