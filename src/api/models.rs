/// Configuration for the proxy client
///
/// Not a user-facing surface: the default endpoint is the only one the app
/// ever uses. Tests override `base_url` to point at a local mock server.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub base_url: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            base_url: "https://corsproxy.io/".to_string(),
        }
    }
}
