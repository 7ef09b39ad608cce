//! Keyword heuristics for spotting error-ish log lines.

/// Case-sensitive substrings that mark a line as error-ish
pub const DEFAULT_KEYWORDS: &[&str] = &["ERROR", " 500 ", "InternalServerError", "Sell"];

/// Filters log lines by substring match
#[derive(Debug, Clone)]
pub struct Classifier {
    keywords: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}

impl Classifier {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if a single line contains any keyword
    pub fn is_match(&self, line: &str) -> bool {
        self.keywords.iter().any(|keyword| line.contains(keyword.as_str()))
    }

    /// Return the matching lines, preserving their order
    pub fn classify<'a>(&self, lines: &'a [String]) -> Vec<&'a str> {
        lines
            .iter()
            .map(String::as_str)
            .filter(|line| self.is_match(line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn should_match_each_default_keyword() {
        // Arrange
        let classifier = Classifier::default();

        // Assert
        assert!(classifier.is_match("2026-01-31 ERROR db timeout"));
        assert!(classifier.is_match("GET /api/orders 500 12ms"));
        assert!(classifier.is_match("InternalServerError: boom"));
        assert!(classifier.is_match("Sell order placed"));
    }

    #[test]
    fn should_be_case_sensitive() {
        // Arrange
        let classifier = Classifier::default();

        // Assert
        assert!(!classifier.is_match("error: lowercase does not count"));
        assert!(!classifier.is_match("sell order placed"));
    }

    #[test]
    fn should_require_spaces_around_500() {
        // Arrange
        let classifier = Classifier::default();

        // Assert
        assert!(!classifier.is_match("GET /api/orders/500 200 3ms"));
        assert!(!classifier.is_match("took 1500 ms"));
    }

    #[test]
    fn should_keep_matching_lines_in_order() {
        // Arrange
        let classifier = Classifier::default();
        let input = lines(&[
            "INFO started",
            "ERROR first",
            "INFO ok",
            "GET / 500 1ms",
            "WARN slow",
        ]);

        // Act
        let matched = classifier.classify(&input);

        // Assert
        assert_eq!(matched, vec!["ERROR first", "GET / 500 1ms"]);
    }

    #[test]
    fn should_count_line_once_when_multiple_keywords_match() {
        // Arrange
        let classifier = Classifier::default();
        let input = lines(&["ERROR InternalServerError 500 "]);

        // Act
        let matched = classifier.classify(&input);

        // Assert
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn should_be_idempotent() {
        // Arrange
        let classifier = Classifier::default();
        let input = lines(&["INFO a", "ERROR b", "Sell c"]);

        // Act
        let first = classifier.classify(&input);
        let second = classifier.classify(&input);
        let again: Vec<String> = first.iter().map(|l| l.to_string()).collect();
        let reclassified = classifier.classify(&again);

        // Assert
        assert_eq!(first, second);
        assert_eq!(first, reclassified);
        assert_eq!(input, lines(&["INFO a", "ERROR b", "Sell c"]));
    }

    #[test]
    fn should_use_custom_keywords() {
        // Arrange
        let classifier = Classifier::new(["panic"]);
        let input = lines(&["ERROR ignored", "thread panicked"]);

        // Act
        let matched = classifier.classify(&input);

        // Assert
        assert_eq!(matched, vec!["thread panicked"]);
    }
}
