use reqwest::Client;
use tracing::{debug, info};

use crate::error::DashboardError;
use crate::model::DashboardData;

#[derive(Clone, Debug)]
pub struct LoaderConfig {
    pub data_url: String,
    pub data_path: String,
}

impl LoaderConfig {
    #[must_use]
    pub fn new(data_url: &str, data_path: &str) -> Self {
        Self {
            data_url: data_url.to_string(),
            data_path: data_path.to_string(),
        }
    }

    #[must_use]
    pub fn resource_url(&self) -> String {
        format!(
            "{}/{}",
            self.data_url.trim_end_matches('/'),
            self.data_path.trim_start_matches('/')
        )
    }
}

/// Fetches one dashboard export and decodes it.
///
/// # Errors
///
/// Will return `DashboardError::Network` if the request fails or the server
/// answers with a non-success status, and `DashboardError::Parse` if the body
/// is not a valid export.
pub async fn fetch_dashboard_data(
    client: &Client,
    config: &LoaderConfig,
) -> Result<DashboardData, DashboardError> {
    let url = config.resource_url();
    debug!(%url, "requesting dashboard export");

    let resp = client.get(&url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(DashboardError::Network(format!("{url} answered {status}")));
    }

    let body = resp.text().await?;
    let data: DashboardData = serde_json::from_str(&body)?;
    info!(
        version = %data.metadata.version,
        generated_at = %data.generated_at,
        "dashboard export decoded"
    );
    Ok(data)
}
