pub mod components;
pub mod page;

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::config::Config;
use crate::state::SharedState;

pub fn view_routes(config: &Config) -> Router<SharedState> {
    let base = config.base_path.as_str();

    let mut router = Router::new()
        .route(base, get(index))
        .nest_service(
            &format!("{base}images"),
            ServeDir::new(config.static_dir.join("images")),
        )
        .nest_service(
            &format!("{base}assets"),
            ServeDir::new(config.static_dir.join("assets")),
        );

    // Send the bare prefix and the site root to the canonical base path.
    if let Some(prefix) = config.base_prefix() {
        router = router
            .route(prefix, get(to_base))
            .route("/", get(to_base));
    }

    router
}

async fn index(State(state): State<SharedState>) -> impl IntoResponse {
    Html(state.document.clone())
}

async fn to_base(State(state): State<SharedState>) -> Redirect {
    Redirect::to(&state.config.base_path)
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::Config;

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn nested_base_path_serves_index() {
        let config = Config {
            base_path: "/sites/me/".to_string(),
            ..Config::default()
        };
        let app = crate::build_app(config).unwrap();

        let (status, body) = get(app.clone(), "/sites/me/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Andrew"));

        let (status, _) = get(app.clone(), "/sites/me").await;
        assert_eq!(status, StatusCode::SEE_OTHER);

        let (status, _) = get(app, "/portfolio/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
