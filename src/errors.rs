// User-friendly error messages
//
// Provides helpers to convert technical errors into actionable messages
// that guide users toward solutions.

/// Format a config parse error with helpful suggestions
pub fn config_parse_error(error: &str) -> String {
    format!(
        "Failed to load configuration\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check config file syntax:\n\
           \x1b[36mcat ~/.chaperone/config.toml\x1b[0m\n\n\
        2. Start from a minimal config:\n\
           \x1b[36m[meme]\x1b[0m\n\
           \x1b[36mbase_url = \"https://api.memegen.link\"\x1b[0m\n\n\
        3. Common mistakes:\n\
           • Missing quotes around strings\n\
           • Misspelled section or key names (unknown keys are rejected)\n\
           • Invalid TOML syntax",
        error
    )
}

/// Format a template catalog fetch error with helpful suggestions
pub fn catalog_fetch_error(base_url: &str, error: &str) -> String {
    format!(
        "Could not fetch the meme template catalog from {}\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;33mPossible causes:\x1b[0m\n\
        • No network connectivity\n\
        • The catalog endpoint is down\n\
        • A base_url override points at the wrong host\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check the endpoint:\n\
           \x1b[36mcurl {}/templates/\x1b[0m\n\n\
        2. Check for an override:\n\
           \x1b[36mecho $CHAPERONE_MEME_BASE_URL\x1b[0m\n\
           \x1b[36mcat ~/.chaperone/config.toml\x1b[0m",
        base_url, error, base_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse_error_names_the_file() {
        let msg = config_parse_error("expected `=`");
        assert!(msg.contains("~/.chaperone/config.toml"));
        assert!(msg.contains("expected `=`"));
    }

    #[test]
    fn test_catalog_fetch_error_suggests_override_check() {
        let msg = catalog_fetch_error("https://api.memegen.link", "timed out");
        assert!(msg.contains("CHAPERONE_MEME_BASE_URL"));
        assert!(msg.contains("curl https://api.memegen.link/templates/"));
    }
}
