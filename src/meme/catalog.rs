// Template catalog client
//
// Fetches the live memegen template list; filtering happens
// client-side because the catalog is small and the search semantics
// (substring on id or name) are ours, not the API's.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::meme::encode::API_BASE;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client shared by every catalog built with default options
static SHARED_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    build_client(DEFAULT_TIMEOUT)
});

fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("chaperone/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to build HTTP client")
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemeTemplate {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blank: Option<String>,
}

impl MemeTemplate {
    /// Case-insensitive substring match on id or name
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.id.to_lowercase().contains(&query) || self.name.to_lowercase().contains(&query)
    }
}

/// HTTP client over the template catalog endpoint
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl TemplateCatalog {
    /// Catalog against the public API
    pub fn new() -> Self {
        Self {
            client: SHARED_CLIENT.clone(),
            base_url: API_BASE.to_string(),
        }
    }

    /// Catalog against another endpoint (mirrors, mock servers)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: SHARED_CLIENT.clone(),
            base_url: base_url.into(),
        }
    }

    /// Catalog with a dedicated client and timeout
    pub fn with_options(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            base_url: base_url.into(),
        }
    }

    /// Fetch the full template list
    pub async fn list(&self) -> Result<Vec<MemeTemplate>> {
        let url = format!("{}/templates/", self.base_url);
        debug!(url = %url, "Fetching meme template catalog");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch meme templates from {}", url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP error {} fetching meme templates", status);
        }

        let templates: Vec<MemeTemplate> = response
            .json()
            .await
            .context("Failed to decode meme template catalog")?;

        debug!(count = templates.len(), "Catalog fetched");
        Ok(templates)
    }

    /// Fetch and filter by case-insensitive substring on id or name.
    /// An empty query matches every template.
    pub async fn search(&self, query: &str) -> Result<Vec<MemeTemplate>> {
        let templates = self.list().await?;
        Ok(templates
            .into_iter()
            .filter(|template| template.matches(query))
            .collect())
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::new()
    }
}
