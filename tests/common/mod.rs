use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;

use portfolio::config::Config;

/// A running test server backed by a throwaway static directory.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    _static_dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// GET a path and return the status plus body text.
    pub async fn get_text(&self, path: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }

    /// GET a path and decode the body as JSON.
    pub async fn get_json(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// Spawn the app with the default `/portfolio/` base path.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Spawn the app after letting the caller adjust the config.
pub async fn spawn_app_with(customize: impl FnOnce(&mut Config)) -> TestApp {
    let static_dir = tempfile::tempdir().expect("Failed to create static dir");
    std::fs::create_dir_all(static_dir.path().join("images")).unwrap();
    std::fs::write(static_dir.path().join("images/beetle.jpeg"), b"beetle").unwrap();

    let mut config = Config {
        static_dir: static_dir.path().to_path_buf(),
        log_level: "warn".to_string(),
        ..Config::default()
    };
    customize(&mut config);

    let app = portfolio::build_app(config).expect("Failed to build app");

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        _static_dir: static_dir,
    }
}
