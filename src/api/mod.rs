//! Bootstrap document fetching.
//!
//! The bootstrap document is a JSON array of game records used to seed the
//! list on startup. It can live behind an http(s) URL or on the local disk.
//! Every failure is reported as [`Error::BootstrapFetch`] so callers can fall
//! back to durable storage; nothing here retries.

use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

use crate::games::GameRecord;
use crate::{Error, Result};

const USER_AGENT: &str = concat!("roblox-game-list/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapSource {
    Remote(String),
    Local(PathBuf),
}

impl BootstrapSource {
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        if source.starts_with("http://") || source.starts_with("https://") {
            BootstrapSource::Remote(source.to_string())
        } else if let Some(path) = source.strip_prefix("file://") {
            BootstrapSource::Local(PathBuf::from(path))
        } else {
            BootstrapSource::Local(PathBuf::from(source))
        }
    }
}

impl std::fmt::Display for BootstrapSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BootstrapSource::Remote(url) => write!(f, "{}", url),
            BootstrapSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

pub struct Bootstrap {
    client: Client,
    source: BootstrapSource,
}

impl Bootstrap {
    pub fn new(source: BootstrapSource, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, source })
    }

    pub fn source(&self) -> &BootstrapSource {
        &self.source
    }

    /// Fetch and parse the bootstrap document
    pub async fn fetch(&self) -> Result<Vec<GameRecord>> {
        log::info!("Fetching bootstrap document from {}", self.source);

        let games = match &self.source {
            BootstrapSource::Remote(url) => self.fetch_remote(url).await?,
            BootstrapSource::Local(path) => {
                let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
                    Error::BootstrapFetch(format!("Failed to read {}: {}", path.display(), e))
                })?;
                parse_document(&contents)?
            }
        };

        log::debug!("Bootstrap document contains {} game(s)", games.len());
        Ok(games)
    }

    async fn fetch_remote(&self, url: &str) -> Result<Vec<GameRecord>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::BootstrapFetch(format!("Request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(Error::BootstrapFetch(format!(
                "Bootstrap request returned {}",
                response.status()
            )));
        }

        response
            .json::<Vec<GameRecord>>()
            .await
            .map_err(|e| Error::BootstrapFetch(format!("Malformed bootstrap document: {}", e)))
    }
}

fn parse_document(contents: &str) -> Result<Vec<GameRecord>> {
    serde_json::from_str(contents)
        .map_err(|e| Error::BootstrapFetch(format!("Malformed bootstrap document: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use tempfile::TempDir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response on a local port and return its URL
    async fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/games.json", addr)
    }

    /// Accept a connection and never answer it
    async fn serve_silence() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });

        format!("http://{}/games.json", addr)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) {
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
    }

    fn remote(url: String, timeout: Duration) -> Bootstrap {
        Bootstrap::new(BootstrapSource::parse(&url), timeout).unwrap()
    }

    #[test]
    fn test_source_parsing() {
        assert_eq!(
            BootstrapSource::parse("https://example.com/games.json"),
            BootstrapSource::Remote("https://example.com/games.json".to_string())
        );
        assert_eq!(
            BootstrapSource::parse("file:///tmp/games.json"),
            BootstrapSource::Local(PathBuf::from("/tmp/games.json"))
        );
        assert_eq!(
            BootstrapSource::parse("games.json"),
            BootstrapSource::Local(PathBuf::from("games.json"))
        );
    }

    #[test]
    fn test_bootstrap_creation() {
        let bootstrap = Bootstrap::new(
            BootstrapSource::parse("games.json"),
            Duration::from_secs(5),
        );
        assert!(bootstrap.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_local_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("games.json");
        std::fs::write(&path, r#"[{"id": 1, "name": "A", "added": "now"}]"#).unwrap();

        let bootstrap =
            Bootstrap::new(BootstrapSource::Local(path), Duration::from_secs(5)).unwrap();
        let games = bootstrap.fetch().await.unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].name, "A");
    }

    #[tokio::test]
    async fn test_fetch_missing_file_is_bootstrap_error() {
        let temp_dir = TempDir::new().unwrap();
        let bootstrap = Bootstrap::new(
            BootstrapSource::Local(temp_dir.path().join("missing.json")),
            Duration::from_secs(5),
        )
        .unwrap();

        assert!(matches!(bootstrap.fetch().await, Err(Error::BootstrapFetch(_))));
    }

    #[tokio::test]
    async fn test_fetch_malformed_document_is_bootstrap_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("games.json");
        std::fs::write(&path, r#"{"not": "an array"}"#).unwrap();

        let bootstrap =
            Bootstrap::new(BootstrapSource::Local(path), Duration::from_secs(5)).unwrap();
        assert!(matches!(bootstrap.fetch().await, Err(Error::BootstrapFetch(_))));
    }

    #[tokio::test]
    async fn test_fetch_remote_document() {
        let body = r#"[{"id": 1, "name": "A", "added": "now"}]"#;
        let url = serve_once(format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        ))
        .await;

        let games = remote(url, Duration::from_secs(5)).fetch().await.unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, crate::games::GameId::Number(1));
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_bootstrap_error() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                .to_string(),
        )
        .await;

        let result = remote(url, Duration::from_secs(5)).fetch().await;
        match result {
            Err(Error::BootstrapFetch(message)) => assert!(message.contains("404")),
            other => panic!("expected bootstrap error, got {:?}", other.map(|g| g.len())),
        }
    }

    #[tokio::test]
    async fn test_fetch_garbage_body_is_bootstrap_error() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot json!"
                .to_string(),
        )
        .await;

        let result = remote(url, Duration::from_secs(5)).fetch().await;
        assert!(matches!(result, Err(Error::BootstrapFetch(_))));
    }

    #[tokio::test]
    async fn test_fetch_times_out_on_silent_server() {
        let url = serve_silence().await;
        let bootstrap = remote(url, Duration::from_secs(1));

        let started = Instant::now();
        let result = bootstrap.fetch().await;
        assert!(matches!(result, Err(Error::BootstrapFetch(_))));
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
