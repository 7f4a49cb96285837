// Meme tools over the memegen.link API
//
// URL generation is offline; only the template catalog touches the
// network.

use crate::agent::ToolContext;
use crate::meme::{build_meme_url, MemeOptions, TemplateCatalog};
use crate::tools::output::ToolOutput;
use crate::tools::registry::Tool;
use crate::tools::types::ToolInputSchema;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

pub struct GenerateMemeTool;

#[async_trait]
impl Tool for GenerateMemeTool {
    fn name(&self) -> &str {
        "generate_meme"
    }

    fn description(&self) -> &str {
        "Generate a meme image using the memegen.link API. Provide template, top text, bottom text, and optional style parameters."
    }

    fn input_schema(&self) -> ToolInputSchema {
        ToolInputSchema {
            schema_type: "object".to_string(),
            properties: json!({
                "template": {
                    "type": "string",
                    "description": "The meme template id, e.g. 'buzz', 'drake', 'doge'"
                },
                "top_text": {
                    "type": "string",
                    "description": "Text to display at the top of the meme. Use '-' for blank."
                },
                "bottom_text": {
                    "type": "string",
                    "description": "Text to display at the bottom of the meme. Use '-' for blank."
                },
                "extension": {
                    "type": "string",
                    "description": "Image extension, e.g. 'jpg', 'png'"
                },
                "font": {
                    "type": "string",
                    "description": "Font style, e.g. 'impact', 'titilliumweb'"
                },
                "width": {
                    "type": "number",
                    "description": "Image width in pixels"
                },
                "height": {
                    "type": "number",
                    "description": "Image height in pixels"
                }
            }),
            required: vec![
                "template".to_string(),
                "top_text".to_string(),
                "bottom_text".to_string(),
            ],
        }
    }

    async fn execute(&self, input: Value, _context: &ToolContext<'_>) -> Result<ToolOutput> {
        let template = input["template"]
            .as_str()
            .context("Missing template parameter")?;
        let top_text = input["top_text"]
            .as_str()
            .context("Missing top_text parameter")?;
        let bottom_text = input["bottom_text"]
            .as_str()
            .context("Missing bottom_text parameter")?;

        let options = MemeOptions {
            extension: input["extension"].as_str().map(str::to_string),
            font: input["font"].as_str().map(str::to_string),
            width: input["width"].as_u64().map(|w| w as u32),
            height: input["height"].as_u64().map(|h| h as u32),
        };

        let url = build_meme_url(template, top_text, bottom_text, &options);
        debug!(url = %url, "Meme URL built");
        Ok(ToolOutput::ImageUrl(url))
    }
}

pub struct SearchMemeTemplatesTool {
    catalog: TemplateCatalog,
}

impl SearchMemeTemplatesTool {
    pub fn new(catalog: TemplateCatalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for SearchMemeTemplatesTool {
    fn name(&self) -> &str {
        "search_meme_templates"
    }

    fn description(&self) -> &str {
        "Search available meme templates from memegen.link by a query string."
    }

    fn input_schema(&self) -> ToolInputSchema {
        ToolInputSchema::simple(vec![(
            "query",
            "A search string to filter meme templates by id or name",
        )])
    }

    async fn execute(&self, input: Value, _context: &ToolContext<'_>) -> Result<ToolOutput> {
        let query = input["query"].as_str().context("Missing query parameter")?;

        let templates = self.catalog.search(query.trim()).await?;
        Ok(ToolOutput::Json(serde_json::to_value(templates)?))
    }
}

pub struct ListMemeTemplatesTool {
    catalog: TemplateCatalog,
}

impl ListMemeTemplatesTool {
    pub fn new(catalog: TemplateCatalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for ListMemeTemplatesTool {
    fn name(&self) -> &str {
        "list_all_meme_templates"
    }

    fn description(&self) -> &str {
        "List all available meme templates from memegen.link."
    }

    fn input_schema(&self) -> ToolInputSchema {
        ToolInputSchema::empty()
    }

    async fn execute(&self, _input: Value, _context: &ToolContext<'_>) -> Result<ToolOutput> {
        let templates = self.catalog.list().await?;
        Ok(ToolOutput::Json(serde_json::to_value(templates)?))
    }
}
