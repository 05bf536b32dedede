/// Per-page client settings, read from data attributes on the guess form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSettings {
    /// Prefix for endpoint URLs. Empty means same-origin relative paths.
    pub api_base_url: String,
    /// Ask before revealing a hint.
    pub confirm_hints: bool,
}

impl PageSettings {
    pub fn from_attributes(api_base: Option<&str>, confirm_hints: Option<&str>) -> Self {
        Self {
            api_base_url: api_base
                .map(|base| base.trim().trim_end_matches('/').to_string())
                .unwrap_or_default(),
            confirm_hints: confirm_hints.and_then(parse_flag).unwrap_or(false),
        }
    }

    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

/// Parses a boolean data attribute. A bare attribute (empty value) counts as set.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_relative_and_unconfirmed() {
        let settings = PageSettings::from_attributes(None, None);
        assert_eq!(settings, PageSettings::default());
        assert_eq!(settings.endpoint_url("/guess"), "/guess");
    }

    #[test]
    fn test_api_base_drops_trailing_slash() {
        let settings = PageSettings::from_attributes(Some("https://poozles.example/"), None);
        assert_eq!(settings.endpoint_url("/hint"), "https://poozles.example/hint");
    }

    #[test]
    fn test_confirm_flag_values() {
        assert_eq!(parse_flag(""), Some(true));
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("sometimes"), None);
        assert!(!PageSettings::from_attributes(None, Some("sometimes")).confirm_hints);
        assert!(PageSettings::from_attributes(None, Some("yes")).confirm_hints);
    }
}
