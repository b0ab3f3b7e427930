use bytes::Bytes;
use reqwest::Client;
use thiserror::Error;

use super::models::ProxyConfig;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Proxy returned error: {0}")]
    ProxyError(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Thin client around the CORS-bypass proxy. The proxy fetches an arbitrary
/// resource on our behalf; we only ever issue a single GET per download.
#[derive(Clone)]
pub struct ProxyClient {
    config: ProxyConfig,
}

impl ProxyClient {
    pub fn new(config: ProxyConfig) -> Self {
        Self { config }
    }

    /// The proxied request target: the original URL, percent-encoded,
    /// appended to the proxy endpoint as its query string.
    fn proxied_request_url(&self, file_url: &str) -> String {
        format!("{}?{}", self.config.base_url, urlencoding::encode(file_url))
    }

    /// Fetch the file through the proxy and return the full response body.
    /// The body is treated as opaque bytes whatever its declared content type.
    pub async fn fetch_via_proxy(&self, file_url: &str) -> Result<Bytes> {
        let client = Client::new();
        let response = client
            .get(self.proxied_request_url(file_url))
            .send()
            .await?
            .error_for_status()
            .map_err(|e| ApiError::ProxyError(format!("Download request failed: {}", e)))?;

        Ok(response.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxied_request_url() {
        let client = ProxyClient::new(ProxyConfig::default());
        assert_eq!(
            client.proxied_request_url("https://example.com/a b.bin"),
            "https://corsproxy.io/?https%3A%2F%2Fexample.com%2Fa%20b.bin"
        );
    }

    #[tokio::test]
    async fn test_fetch_via_proxy_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Regex("example".to_string()))
            .with_status(200)
            .with_body("file-bytes")
            .create_async()
            .await;

        let client = ProxyClient::new(ProxyConfig {
            base_url: server.url(),
        });
        let payload = client
            .fetch_via_proxy("https://example.com/files/report.pdf")
            .await
            .unwrap();

        assert_eq!(payload.as_ref(), b"file-bytes");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_via_proxy_http_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(502)
            .create_async()
            .await;

        let client = ProxyClient::new(ProxyConfig {
            base_url: server.url(),
        });
        let result = client
            .fetch_via_proxy("https://example.com/files/report.pdf")
            .await;

        assert!(matches!(result, Err(ApiError::ProxyError(_))));
    }
}
