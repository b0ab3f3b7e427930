#[derive(Debug, Clone)]
pub struct DownloadPlan {
    pub source_url: String,
    /// Everything after the last `/` of the source URL, suggested to the
    /// save dialog as-is. May be empty for URLs ending in a slash.
    pub file_name: String,
}
