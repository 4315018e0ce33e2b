pub mod projects;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

/// Read-only JSON view of the catalog, mounted under the site's base path.
pub fn api_routes(base_path: &str) -> Router<SharedState> {
    Router::new()
        .route(&format!("{base_path}api/v1/projects"), get(projects::list))
        .route(&format!("{base_path}api/v1/projects/{{id}}"), get(projects::get))
}
