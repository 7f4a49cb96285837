// MCP server records
//
// The agent keeps a table of registered servers; establishing the
// actual connection (and any OAuth dance) is the host runtime's job.

use serde::{Deserialize, Serialize};

/// One registered MCP server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpServerRecord {
    /// Server id assigned at registration
    pub id: String,

    /// Human-readable server name
    pub name: String,

    /// Server endpoint URL
    pub url: String,

    /// OAuth callback host handed to the server at registration
    pub callback_host: String,

    /// Authorization URL when the server requires a sign-in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_url: Option<String>,
}

impl McpServerRecord {
    pub fn new(name: impl Into<String>, url: impl Into<String>, callback_host: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            url: url.into(),
            callback_host: callback_host.into(),
            auth_url: None,
        }
    }

    /// Validate the record before it enters the server table
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("MCP server requires a non-empty name");
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            anyhow::bail!("MCP server '{}': url must be http(s), got '{}'", self.name, self.url);
        }
        Ok(())
    }
}

/// What `add_mcp_server` hands back to the calling tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpServerHandle {
    pub id: String,
    /// Present when the human must authenticate before the server is usable
    pub auth_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_validation() {
        let record = McpServerRecord::new(
            "docs",
            "https://mcp.example.com/sse",
            "http://localhost:5173",
        );
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_record_rejects_non_http_url() {
        let record = McpServerRecord::new("docs", "ftp://mcp.example.com", "http://localhost:5173");
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_record_rejects_empty_name() {
        let record = McpServerRecord::new("  ", "https://mcp.example.com", "http://localhost:5173");
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_record_serialization_omits_missing_auth_url() {
        let record = McpServerRecord::new("docs", "https://mcp.example.com", "http://localhost:5173");
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("auth_url"));

        let mut with_auth = record.clone();
        with_auth.auth_url = Some("https://mcp.example.com/authorize".to_string());
        let json = serde_json::to_string(&with_auth).unwrap();
        assert!(json.contains("\"auth_url\":\"https://mcp.example.com/authorize\""));
    }
}
