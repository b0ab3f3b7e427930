use std::path::PathBuf;

use bytes::Bytes;
use tokio::io::AsyncWriteExt;

use crate::{
    api::ProxyClient,
    domain::{AppError, DownloadPlan},
    utils::{file_name_from_url, is_valid_https_link},
};

/// Runs one download flow end to end: plan, proxied fetch, save dialog,
/// file write.
#[derive(Clone)]
pub struct DownloadCoordinator {
    proxy_client: ProxyClient,
}

impl DownloadCoordinator {
    pub fn new(proxy_client: ProxyClient) -> Self {
        Self { proxy_client }
    }

    /// Turn the entered URL into a plan. The UI only submits valid input,
    /// but the check is repeated here so the coordinator never trusts it.
    pub fn prepare_download(&self, file_url: &str) -> Result<DownloadPlan, AppError> {
        if !is_valid_https_link(file_url) {
            return Err(AppError::InvalidInput);
        }

        Ok(DownloadPlan {
            source_url: file_url.to_string(),
            file_name: file_name_from_url(file_url),
        })
    }

    /// One GET through the proxy; the whole body is awaited in memory.
    /// No streaming and no progress reporting.
    pub async fn fetch_payload(&self, plan: &DownloadPlan) -> Result<Bytes, AppError> {
        self.proxy_client
            .fetch_via_proxy(&plan.source_url)
            .await
            .map_err(|e| AppError::Proxy(e.to_string()))
    }

    /// Returns `None` when the user dismisses the dialog.
    pub async fn choose_save_path(&self, suggested_filename: String) -> Option<PathBuf> {
        rfd::AsyncFileDialog::new()
            .set_file_name(&suggested_filename)
            .save_file()
            .await
            .map(|handle| handle.path().to_path_buf())
    }

    pub async fn save_payload(&self, path: PathBuf, payload: Bytes) -> Result<PathBuf, AppError> {
        let mut file = tokio::fs::File::create(&path)
            .await
            .map_err(|e| AppError::Io(format!("Failed to create file: {}", e)))?;

        file.write_all(&payload)
            .await
            .map_err(|e| AppError::Io(format!("Write error: {}", e)))?;

        file.sync_all()
            .await
            .map_err(|e| AppError::Io(format!("Failed to sync file: {}", e)))?;

        Ok(path)
    }
}
