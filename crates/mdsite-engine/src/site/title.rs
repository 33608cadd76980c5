use std::sync::OnceLock;

use regex::Regex;

use super::SiteError;

/// Extracts the page title from the first `# ` heading line.
pub fn extract_title(markdown: &str) -> Result<String, SiteError> {
    static TITLE_REGEX: OnceLock<Regex> = OnceLock::new();
    let title_regex =
        TITLE_REGEX.get_or_init(|| Regex::new(r"(?m)^\s*#\s+(.*)$").expect("Invalid title regex"));

    title_regex
        .captures(markdown)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_owned())
        .ok_or(SiteError::MissingTitle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Hello", "Hello")]
    #[case("#   Padded title   ", "Padded title")]
    #[case("intro\n\n# Later Title\n\n## Sub", "Later Title")]
    #[case("  # Indented", "Indented")]
    fn finds_title(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(extract_title(markdown).unwrap(), expected);
    }

    #[test]
    fn subheadings_are_not_titles() {
        assert!(matches!(
            extract_title("## Only a subtitle"),
            Err(SiteError::MissingTitle)
        ));
    }

    #[test]
    fn missing_title() {
        assert!(matches!(
            extract_title("no heading here"),
            Err(SiteError::MissingTitle)
        ));
    }
}
