// Tool output union
//
// Every tool result is decoded into one of these variants at the
// result boundary, so the renderer never sniffs raw JSON shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::meme::IMAGE_URL_PREFIX;

/// One entry of a provider-style content envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub text: String,
}

impl ContentItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            item_type: "text".to_string(),
            text: text.into(),
        }
    }

    pub fn is_text(&self) -> bool {
        self.item_type == "text"
    }
}

/// Classified tool output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ToolOutput {
    /// Plain text, rendered verbatim
    Text(String),
    /// A meme image URL, rendered as a link (or inlined by GUI hosts)
    ImageUrl(String),
    /// Content envelope (MCP-style tool results)
    Content(Vec<ContentItem>),
    /// Any other structured payload, rendered as pretty-printed JSON
    Json(Value),
}

impl ToolOutput {
    pub fn text(text: impl Into<String>) -> Self {
        ToolOutput::Text(text.into())
    }

    /// Decode a raw result value into its output variant.
    ///
    /// Priority order:
    /// 1. a string that is a meme image URL
    /// 2. a content envelope holding a meme image URL in one of its
    ///    text items (first match in item order wins)
    /// 3. a content envelope without one
    /// 4. everything else, including envelopes whose items do not
    ///    decode, falls back to structured JSON
    pub fn classify(value: &Value) -> ToolOutput {
        match value {
            Value::String(text) => {
                if text.starts_with(IMAGE_URL_PREFIX) {
                    ToolOutput::ImageUrl(text.clone())
                } else {
                    ToolOutput::Text(text.clone())
                }
            }
            Value::Object(map) => {
                if let Some(content) = map.get("content").filter(|c| c.is_array()) {
                    if let Ok(items) = serde_json::from_value::<Vec<ContentItem>>(content.clone())
                    {
                        if let Some(item) = items
                            .iter()
                            .find(|item| item.is_text() && item.text.starts_with(IMAGE_URL_PREFIX))
                        {
                            return ToolOutput::ImageUrl(item.text.clone());
                        }
                        return ToolOutput::Content(items);
                    }
                }
                ToolOutput::Json(value.clone())
            }
            _ => ToolOutput::Json(value.clone()),
        }
    }

    /// Encode back to the untyped value a runtime result channel carries
    pub fn to_result_value(&self) -> Value {
        match self {
            ToolOutput::Text(text) => Value::String(text.clone()),
            ToolOutput::ImageUrl(url) => Value::String(url.clone()),
            ToolOutput::Content(items) => serde_json::json!({ "content": items }),
            ToolOutput::Json(value) => value.clone(),
        }
    }

    /// Extract plain text when this output carries any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ToolOutput::Text(text) => Some(text),
            ToolOutput::ImageUrl(url) => Some(url),
            _ => None,
        }
    }

    pub fn is_image_url(&self) -> bool {
        matches!(self, ToolOutput::ImageUrl(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_image_url_string() {
        let value = json!("https://api.memegen.link/images/drake/a/b.png");
        assert_eq!(
            ToolOutput::classify(&value),
            ToolOutput::ImageUrl("https://api.memegen.link/images/drake/a/b.png".to_string())
        );
    }

    #[test]
    fn test_classify_plain_string() {
        let value = json!("The weather in Tokyo is sunny");
        assert_eq!(
            ToolOutput::classify(&value),
            ToolOutput::Text("The weather in Tokyo is sunny".to_string())
        );
    }

    #[test]
    fn test_classify_envelope_picks_first_image_url_in_order() {
        // The URL sits in the second item; the scan must walk items in order
        let value = json!({
            "content": [
                { "type": "text", "text": "Generated meme:" },
                { "type": "text", "text": "https://api.memegen.link/images/doge/top/bottom.png" },
                { "type": "text", "text": "https://api.memegen.link/images/doge/other/other.png" }
            ]
        });
        assert_eq!(
            ToolOutput::classify(&value),
            ToolOutput::ImageUrl(
                "https://api.memegen.link/images/doge/top/bottom.png".to_string()
            )
        );
    }

    #[test]
    fn test_classify_envelope_without_image_url() {
        let value = json!({
            "content": [
                { "type": "text", "text": "line one" },
                { "type": "text", "text": "line two" }
            ]
        });
        let output = ToolOutput::classify(&value);
        match output {
            ToolOutput::Content(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].text, "line one");
            }
            other => panic!("expected Content, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_non_text_items_are_kept_but_not_scanned() {
        let value = json!({
            "content": [
                { "type": "image", "text": "https://api.memegen.link/images/x/y/z.png" },
                { "type": "text", "text": "done" }
            ]
        });
        // The first item is not a text item, so the URL scan skips it
        let output = ToolOutput::classify(&value);
        assert!(matches!(output, ToolOutput::Content(_)));
    }

    #[test]
    fn test_classify_malformed_envelope_degrades_to_json() {
        let value = json!({ "content": [42, "not an item"] });
        assert_eq!(ToolOutput::classify(&value), ToolOutput::Json(value.clone()));
    }

    #[test]
    fn test_classify_unknown_shapes_degrade_to_json() {
        for value in [json!(7), json!(["a", "b"]), json!(null), json!({ "ok": true })] {
            assert_eq!(ToolOutput::classify(&value), ToolOutput::Json(value.clone()));
        }
    }

    #[test]
    fn test_result_value_round_trip() {
        let outputs = vec![
            ToolOutput::text("hello"),
            ToolOutput::ImageUrl("https://api.memegen.link/images/drake/a/b.png".to_string()),
            ToolOutput::Content(vec![ContentItem::text("line")]),
            ToolOutput::Json(json!({ "tasks": [] })),
        ];
        for output in outputs {
            assert_eq!(ToolOutput::classify(&output.to_result_value()), output);
        }
    }
}
