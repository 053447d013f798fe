//! Native preview server for the Trunk build output.

use axum::{routing::get, Router};
use serde_json::json;
use std::path::PathBuf;
use tower_http::services::{ServeDir, ServeFile};

use crate::telemetry::{log_event, non_empty, LogLevel};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .filter(|value| (PORT_BOUNDS.0..=PORT_BOUNDS.1).contains(value))
            .unwrap_or(DEFAULT_PORT);
        let dist_dir = non_empty(lookup("DIST_DIR").as_deref())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));

        Self { port, dist_dir }
    }
}

async fn healthz() -> &'static str {
    "ok"
}

/// Static files from `dist_dir`; unknown paths get the app shell with a 200.
pub fn router(config: &ServerConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let app = router(&config);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        LogLevel::Info,
        "server_listening",
        json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| env.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = config_from(&[]);

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
    }

    #[test]
    fn port_outside_bounds_or_malformed_falls_back() {
        assert_eq!(config_from(&[("PORT", "0")]).port, DEFAULT_PORT);
        assert_eq!(config_from(&[("PORT", "70000")]).port, DEFAULT_PORT);
        assert_eq!(config_from(&[("PORT", "http")]).port, DEFAULT_PORT);
        assert_eq!(config_from(&[("PORT", " 3000 ")]).port, 3000);
    }

    #[test]
    fn blank_dist_dir_is_ignored() {
        assert_eq!(config_from(&[("DIST_DIR", "  ")]).dist_dir, PathBuf::from("dist"));
        assert_eq!(
            config_from(&[("DIST_DIR", "build/site")]).dist_dir,
            PathBuf::from("build/site")
        );
    }

    const SHELL: &str = "<!doctype html><div id=\"app\"></div>";

    fn dist_with_shell() -> tempfile::TempDir {
        let dist = tempfile::tempdir().expect("temp dist dir");
        std::fs::write(dist.path().join("index.html"), SHELL).expect("write index.html");
        std::fs::write(dist.path().join("portfolio.js"), "export default 1;").expect("write bundle");
        dist
    }

    async fn fetch(app: Router, path: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
        let address = listener.local_addr().expect("local address");
        tokio::spawn(async move { axum::serve(listener, app).await });

        let mut stream = TcpStream::connect(address).await.expect("connect");
        let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.expect("write request");

        let mut response = String::new();
        stream.read_to_string(&mut response).await.expect("read response");
        response
    }

    fn router_over(dist: &tempfile::TempDir) -> Router {
        router(&ServerConfig {
            port: DEFAULT_PORT,
            dist_dir: dist.path().to_path_buf(),
        })
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_app_shell() {
        let dist = dist_with_shell();

        let response = fetch(router_over(&dist), "/some/deep/route").await;

        assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
        assert!(response.ends_with(SHELL), "{response}");
    }

    #[tokio::test]
    async fn built_assets_are_served_from_dist() {
        let dist = dist_with_shell();

        let response = fetch(router_over(&dist), "/portfolio.js").await;

        assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
        assert!(response.ends_with("export default 1;"), "{response}");

        let root = fetch(router_over(&dist), "/").await;
        assert!(root.ends_with(SHELL), "{root}");
    }

    #[tokio::test]
    async fn healthz_route_reports_ok() {
        let dist = dist_with_shell();

        let response = fetch(router_over(&dist), "/healthz").await;

        assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
        assert!(response.ends_with("ok"), "{response}");
    }
}
