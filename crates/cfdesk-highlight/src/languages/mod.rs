//! Language selection for highlighting

pub mod cpp;
pub mod java;
pub mod python;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages with a keyword table.
///
/// Anything else highlights with an empty keyword set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cpp,
    Java,
    Python,
}

impl Language {
    /// Resolve a language tag (case-insensitive; `c++` and `py` are aliases)
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "cpp" | "c++" => Some(Self::Cpp),
            "java" => Some(Self::Java),
            "python" | "py" => Some(Self::Python),
            _ => None,
        }
    }

    /// Fixed keyword set of the language
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Cpp => cpp::KEYWORDS,
            Self::Java => java::KEYWORDS,
            Self::Python => python::KEYWORDS,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpp => write!(f, "cpp"),
            Self::Java => write!(f, "java"),
            Self::Python => write!(f, "python"),
        }
    }
}

/// Keyword set for an arbitrary tag; unknown tags get an empty set.
pub fn keywords_for(tag: &str) -> &'static [&'static str] {
    Language::from_tag(tag).map(Language::keywords).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_aliases() {
        assert_eq!(Language::from_tag("cpp"), Some(Language::Cpp));
        assert_eq!(Language::from_tag("C++"), Some(Language::Cpp));
        assert_eq!(Language::from_tag("Java"), Some(Language::Java));
        assert_eq!(Language::from_tag("PY"), Some(Language::Python));
        assert_eq!(Language::from_tag("python"), Some(Language::Python));
        assert_eq!(Language::from_tag("rust"), None);
    }

    #[test]
    fn test_keyword_tables() {
        assert!(Language::Cpp.keywords().contains(&"include"));
        assert!(Language::Java.keywords().contains(&"synchronized"));
        assert!(Language::Python.keywords().contains(&"None"));
        // Python keywords are case-sensitive
        assert!(!Language::Python.keywords().contains(&"none"));
        assert!(!Language::Cpp.keywords().contains(&"def"));
    }

    #[test]
    fn test_unknown_tag_has_no_keywords() {
        assert!(keywords_for("haskell").is_empty());
        assert!(!keywords_for("c++").is_empty());
    }
}
