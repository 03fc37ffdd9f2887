//! Specification Pattern rules and the problem filter/sort engine.
//!
//! Problem predicates are small specifications composed with operators,
//! and [`filter_and_sort`] applies a [`ProblemFilter`] to a loaded problemset.
//!
//! # Example
//!
//! ```
//! use cfdesk_common::Problem;
//! use cfdesk_rules::prelude::*;
//!
//! let problems = vec![
//!     Problem::new(Some(4), "A", "Watermelon").with_rating(800),
//!     Problem::new(Some(4), "B", "Before an Exam").with_rating(1200),
//! ];
//!
//! let filter = ProblemFilter {
//!     min_rating: Some(1000),
//!     sort_by: SortBy::RatingDesc,
//!     ..Default::default()
//! };
//!
//! let visible = filter_and_sort(&problems, &filter);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].id, "4-B");
//! ```

pub mod filter;
pub mod operators;
pub mod rules;
pub mod specification;

pub use filter::{filter_and_sort, ProblemFilter, SortBy};

/// Prelude module - import everything you need with `use cfdesk_rules::prelude::*`
pub mod prelude {
    pub use crate::filter::{
        filter_and_sort, ProblemFilter, SortBy, POPULAR_TAGS, RATING_CEILING, RATING_FLOOR,
    };
    pub use crate::operators::Spec;
    pub use crate::rules::*;
    pub use crate::specification::{AlwaysTrue, And, AnyOf, BoxedSpec, Specification};
}
