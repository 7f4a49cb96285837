// Meme caption encoding and image URL construction
//
// Follows the memegen.link path conventions

/// Public memegen API root
pub const API_BASE: &str = "https://api.memegen.link";

/// Prefix every generated image URL starts with; the result classifier
/// keys off this exact string
pub const IMAGE_URL_PREFIX: &str = "https://api.memegen.link/images/";

/// Optional knobs for a generated meme URL
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemeOptions {
    /// File extension appended to the path (png, jpg, gif, webp)
    pub extension: Option<String>,
    pub font: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Escape caption text into a URL path segment.
///
/// The token escapes must run before percent-encoding, otherwise the
/// memegen control sequences would themselves get percent-escaped.
/// Empty text encodes to "_" so the path keeps its slot.
pub fn encode_meme_text(text: &str) -> String {
    if text.is_empty() {
        return "_".to_string();
    }

    let escaped = text
        .replace('_', "__")
        .replace('-', "--")
        .replace(' ', "_")
        .replace('?', "~q")
        .replace('%', "~p")
        .replace('#', "~h")
        .replace('/', "~s")
        .replace('\\', "~b")
        .replace('"', "''");

    urlencoding::encode(&escaped).into_owned()
}

/// Build the image URL for a template and two captions
pub fn build_meme_url(
    template: &str,
    top_text: &str,
    bottom_text: &str,
    options: &MemeOptions,
) -> String {
    let mut url = format!(
        "{}{}/{}/{}",
        IMAGE_URL_PREFIX,
        template,
        encode_meme_text(top_text),
        encode_meme_text(bottom_text)
    );

    if let Some(extension) = &options.extension {
        url.push('.');
        url.push_str(extension);
    }

    let mut params = Vec::new();
    if let Some(font) = &options.font {
        params.push(format!("font={}", font));
    }
    if let Some(width) = options.width {
        params.push(format!("width={}", width));
    }
    if let Some(height) = options.height {
        params.push(format!("height={}", height));
    }
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_escapes_reserved_characters() {
        assert_eq!(encode_meme_text("50% off - a/b"), "50~p_off_--_a~sb");
    }

    #[test]
    fn test_encode_doubles_literal_underscore_and_dash() {
        assert_eq!(encode_meme_text("a_b-c"), "a__b--c");
        // Spaces become single underscores after literals are doubled
        assert_eq!(encode_meme_text("one two"), "one_two");
    }

    #[test]
    fn test_encode_question_hash_backslash() {
        assert_eq!(encode_meme_text("what?"), "what~q");
        assert_eq!(encode_meme_text("#1"), "~h1");
        assert_eq!(encode_meme_text("a\\b"), "a~bb");
    }

    #[test]
    fn test_encode_quotes_then_percent_encodes() {
        // Double quotes become paired apostrophes first, which the
        // percent-encoder then escapes
        assert_eq!(encode_meme_text("\"hi\""), "%27%27hi%27%27");
    }

    #[test]
    fn test_encode_empty_text_keeps_path_slot() {
        assert_eq!(encode_meme_text(""), "_");
    }

    #[test]
    fn test_build_url_basic() {
        let url = build_meme_url("drake", "old way", "new way", &MemeOptions::default());
        assert_eq!(
            url,
            "https://api.memegen.link/images/drake/old_way/new_way"
        );
    }

    #[test]
    fn test_build_url_with_extension_and_params() {
        let options = MemeOptions {
            extension: Some("png".to_string()),
            font: Some("impact".to_string()),
            width: Some(640),
            height: Some(480),
        };
        let url = build_meme_url("doge", "such test", "very url", &options);
        assert_eq!(
            url,
            "https://api.memegen.link/images/doge/such_test/very_url.png?font=impact&width=640&height=480"
        );
    }

    #[test]
    fn test_build_url_empty_captions() {
        let url = build_meme_url("fry", "", "", &MemeOptions::default());
        assert_eq!(url, "https://api.memegen.link/images/fry/_/_");
    }

    #[test]
    fn test_built_urls_carry_the_classifier_prefix() {
        let url = build_meme_url("drake", "a", "b", &MemeOptions::default());
        assert!(url.starts_with(IMAGE_URL_PREFIX));
    }
}
