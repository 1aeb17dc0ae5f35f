//! HTTP snapshot source

use crate::{
    constants::{REQUEST_TIMEOUT_SECS, USER_AGENT},
    error::FetchError,
    source::{parse_snapshots, SnapshotSource},
    types::SnapshotRecord,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Error body the history endpoint returns alongside a 500
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Fetches the snapshot list with one GET to a history endpoint
pub struct HttpSnapshotSource {
    client: Client,
    endpoint: String,
}

impl HttpSnapshotSource {
    /// Creates a new HTTP source for `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(endpoint, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    /// Creates a new HTTP source whose whole request, body included, must
    /// finish within `timeout`
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::NetworkError)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Maps a reqwest failure, keeping timeouts distinct
fn request_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::NetworkError(e)
    }
}

/// Builds the error for a non-success response
fn status_error(status: StatusCode, body: &str) -> FetchError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return FetchError::RateLimitExceeded;
    }

    let detail = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.to_string());
    FetchError::ApiError(format!("HTTP {}: {}", status, detail))
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn fetch_snapshots(&self) -> Result<Vec<SnapshotRecord>, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching snapshot history");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        let body = response.text().await.map_err(request_error)?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        let records = parse_snapshots(&body, &self.endpoint)?;

        tracing::debug!(
            count = records.len(),
            endpoint = %self.endpoint,
            "Fetched snapshot history"
        );

        Ok(records)
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response on a local port and returns its URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/fetch-data", addr)
    }

    #[tokio::test]
    async fn test_fetch_snapshots_success() {
        let url = serve_once(
            "200 OK",
            r#"[{"timestamp":"2","data":{"1":null}},{"timestamp":1,"data":{}}]"#,
        )
        .await;

        let records = HttpSnapshotSource::new(url)
            .unwrap()
            .fetch_snapshots()
            .await
            .unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_snapshots_server_error_body() {
        let url = serve_once(
            "500 Internal Server Error",
            r#"{"error": "Requested resource not found"}"#,
        )
        .await;

        let err = HttpSnapshotSource::new(url)
            .unwrap()
            .fetch_snapshots()
            .await
            .unwrap_err();
        match err {
            FetchError::ApiError(msg) => assert_eq!(
                msg,
                "HTTP 500 Internal Server Error: Requested resource not found"
            ),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_snapshots_rate_limited() {
        let url = serve_once("429 Too Many Requests", "").await;

        let err = HttpSnapshotSource::new(url)
            .unwrap()
            .fetch_snapshots()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::RateLimitExceeded));
    }

    #[tokio::test]
    async fn test_stalled_body_is_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n[{\"timestamp\"")
                .await
                .unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let err = HttpSnapshotSource::with_timeout(
            format!("http://{}/fetch-data", addr),
            Duration::from_millis(200),
        )
        .unwrap()
        .fetch_snapshots()
        .await
        .unwrap_err();
        assert!(matches!(err, FetchError::Timeout), "unexpected error: {:?}", err);
    }

    #[tokio::test]
    async fn test_fetch_snapshots_invalid_body() {
        let url = serve_once("200 OK", "<html>maintenance</html>").await;

        let err = HttpSnapshotSource::new(url)
            .unwrap()
            .fetch_snapshots()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidResponse(_)));
    }

    #[test]
    fn test_status_error_extracts_server_message() {
        let err = status_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error": "table not found"}"#,
        );
        match err {
            FetchError::ApiError(msg) => {
                assert_eq!(msg, "HTTP 500 Internal Server Error: table not found")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_status_error_rate_limit_and_plain_body() {
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, ""),
            FetchError::RateLimitExceeded
        ));
        match status_error(StatusCode::NOT_FOUND, "nope") {
            FetchError::ApiError(msg) => assert_eq!(msg, "HTTP 404 Not Found: nope"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_new_keeps_endpoint() {
        let source = HttpSnapshotSource::new("http://example.test/fetch-data").unwrap();
        assert_eq!(source.endpoint(), "http://example.test/fetch-data");
        assert_eq!(source.source_name(), "http");
    }
}
