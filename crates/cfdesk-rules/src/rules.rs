//! Problem rules used by the filter engine.

use cfdesk_common::Problem;

use crate::specification::Specification;

// =============================================================================
// Rating bounds
// =============================================================================

/// Rating floor. Unrated problems always pass, as does an unset floor.
#[derive(Debug, Clone, Copy)]
pub struct RatingAtLeast {
    pub min: Option<i32>,
}

impl RatingAtLeast {
    pub fn new(min: Option<i32>) -> Self {
        Self { min }
    }
}

impl Specification<Problem> for RatingAtLeast {
    fn is_satisfied_by(&self, ctx: &Problem) -> bool {
        match (self.min, ctx.rating) {
            (Some(min), Some(rating)) => rating >= min,
            _ => true,
        }
    }
}

/// Rating ceiling. Unrated problems always pass, as does an unset ceiling.
#[derive(Debug, Clone, Copy)]
pub struct RatingAtMost {
    pub max: Option<i32>,
}

impl RatingAtMost {
    pub fn new(max: Option<i32>) -> Self {
        Self { max }
    }
}

impl Specification<Problem> for RatingAtMost {
    fn is_satisfied_by(&self, ctx: &Problem) -> bool {
        match (self.max, ctx.rating) {
            (Some(max), Some(rating)) => rating <= max,
            _ => true,
        }
    }
}

// =============================================================================
// Tags and text
// =============================================================================

/// Check if the problem carries a specific tag.
#[derive(Debug, Clone)]
pub struct HasTag {
    pub tag: String,
}

impl HasTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl Specification<Problem> for HasTag {
    fn is_satisfied_by(&self, ctx: &Problem) -> bool {
        ctx.has_tag(&self.tag)
    }
}

/// Case-insensitive substring match against the problem name or id.
///
/// A blank needle matches every problem.
#[derive(Debug, Clone)]
pub struct MatchesText {
    needle: String,
}

impl MatchesText {
    pub fn new(search: &str) -> Self {
        Self {
            needle: search.to_lowercase(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.needle.trim().is_empty()
    }
}

impl Specification<Problem> for MatchesText {
    fn is_satisfied_by(&self, ctx: &Problem) -> bool {
        self.is_blank()
            || ctx.name.to_lowercase().contains(&self.needle)
            || ctx.id.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::Spec;

    fn rated(rating: i32) -> Problem {
        Problem::new(Some(4), "A", "Watermelon").with_rating(rating)
    }

    fn unrated() -> Problem {
        Problem::new(Some(2000), "Z", "Fresh problem")
    }

    #[test]
    fn test_rating_floor() {
        let rule = RatingAtLeast::new(Some(1000));
        assert!(rule.is_satisfied_by(&rated(1000)));
        assert!(rule.is_satisfied_by(&rated(1900)));
        assert!(!rule.is_satisfied_by(&rated(800)));
        assert!(rule.is_satisfied_by(&unrated()));
    }

    #[test]
    fn test_rating_ceiling() {
        let rule = RatingAtMost::new(Some(800));
        assert!(rule.is_satisfied_by(&rated(800)));
        assert!(!rule.is_satisfied_by(&rated(1200)));
        assert!(rule.is_satisfied_by(&unrated()));
    }

    #[test]
    fn test_unset_bounds_pass_everything() {
        assert!(RatingAtLeast::new(None).is_satisfied_by(&rated(3500)));
        assert!(RatingAtMost::new(None).is_satisfied_by(&rated(3500)));
    }

    #[test]
    fn test_degenerate_range_keeps_unrated() {
        let rule = Spec(RatingAtLeast::new(Some(1500))) & Spec(RatingAtMost::new(Some(1500)));
        assert!(rule.is_satisfied_by(&rated(1500)));
        assert!(!rule.is_satisfied_by(&rated(1400)));
        assert!(!rule.is_satisfied_by(&rated(1600)));
        assert!(rule.is_satisfied_by(&unrated()));
    }

    #[test]
    fn test_has_tag() {
        let problem = rated(800).with_tags(["dp", "graphs"]);
        assert!(HasTag::new("graphs").is_satisfied_by(&problem));
        assert!(!HasTag::new("geometry").is_satisfied_by(&problem));
        // Tags are matched exactly
        assert!(!HasTag::new("Graphs").is_satisfied_by(&problem));
    }

    #[test]
    fn test_matches_text_on_name_or_id() {
        let problem = Problem::new(Some(4), "A", "Watermelon Salad");
        assert!(MatchesText::new("WATERMELON").is_satisfied_by(&problem));
        assert!(MatchesText::new("salad").is_satisfied_by(&problem));
        assert!(MatchesText::new("4-a").is_satisfied_by(&problem));
        assert!(!MatchesText::new("tree").is_satisfied_by(&problem));
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let problem = Problem::new(Some(4), "A", "Watermelon");
        assert!(MatchesText::new("").is_satisfied_by(&problem));
        assert!(MatchesText::new("   ").is_satisfied_by(&problem));
    }
}
