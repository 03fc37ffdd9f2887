//! Highlight request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{models::extension_for, utils::validation::validate_source_size};

/// Highlight request
#[derive(Debug, Deserialize, Validate)]
pub struct HighlightRequest {
    #[validate(custom(function = "validate_source_size"))]
    pub source: String,

    /// Language tag such as `cpp`, `java` or `python`
    pub language: Option<String>,

    /// Codeforces language id, used when no tag is given
    pub language_id: Option<i32>,

    /// Group spans per line instead of emitting newline spans
    #[serde(default)]
    pub by_line: bool,
}

impl HighlightRequest {
    /// Tag passed to the highlighter; an explicit tag wins over the id
    pub fn language_tag(&self) -> String {
        match (&self.language, self.language_id) {
            (Some(tag), _) => tag.trim().to_ascii_lowercase(),
            (None, Some(id)) => extension_for(id).to_string(),
            (None, None) => "txt".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(language: Option<&str>, language_id: Option<i32>) -> HighlightRequest {
        HighlightRequest {
            source: String::new(),
            language: language.map(str::to_string),
            language_id,
            by_line: false,
        }
    }

    #[test]
    fn test_language_tag_resolution() {
        assert_eq!(request(Some(" Java "), Some(71)).language_tag(), "java");
        assert_eq!(request(None, Some(71)).language_tag(), "py");
        assert_eq!(request(None, Some(12345)).language_tag(), "txt");
        assert_eq!(request(None, None).language_tag(), "txt");
    }
}
