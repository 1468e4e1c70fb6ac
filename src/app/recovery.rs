#[must_use]
pub fn get_suggestions(msg: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("rate limit") || msg_lower.contains("http 403") {
        suggestions.push(
            "GitHub limits anonymous API calls per hour; wait a while or point listing_url at a mirror"
                .to_string(),
        );
    }

    if msg_lower.contains("http 404") {
        suggestions.push("Check listing_url in ~/.config/gaas/config.toml".to_string());
    }

    if msg_lower.contains("error sending request")
        || msg_lower.contains("dns")
        || msg_lower.contains("connection refused")
    {
        suggestions.push("Check your network connection or proxy settings".to_string());
    }

    if msg_lower.contains("timed out") || msg_lower.contains("timeout") {
        suggestions.push("Raise timeout_secs in ~/.config/gaas/config.toml".to_string());
    }

    if msg_lower.contains("unexpected listing format") {
        suggestions.push(
            "The listing endpoint must return a JSON array of {name, download_url}".to_string(),
        );
    }

    if msg_lower.contains("clipboard") || msg_lower.contains("copy failed") {
        suggestions.push("Install xclip or wl-copy, or select the output manually".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions() {
        let s = get_suggestions("Failed to load templates: HTTP 403 from https://api.github.com/x");
        assert_eq!(s.len(), 1);
        assert!(s[0].contains("listing_url"));

        let s = get_suggestions("Network error: error sending request for url (https://x)");
        assert!(s.contains(&"Check your network connection or proxy settings".to_string()));

        let s = get_suggestions("Failed to fetch Node.gitignore: operation timed out");
        assert!(s[0].contains("timeout_secs"));
    }

    #[test]
    fn test_unknown_message_has_no_suggestions() {
        assert!(get_suggestions("something odd").is_empty());
    }
}
