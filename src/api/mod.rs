pub mod client;
pub mod models;

pub use client::{ApiError, ProxyClient, Result};
pub use models::ProxyConfig;
