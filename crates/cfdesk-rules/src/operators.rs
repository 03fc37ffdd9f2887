//! `&` on problem predicates.
//!
//! ```ignore
//! let hard_dp = Spec(RatingAtLeast::new(Some(2000))) & Spec(HasTag::new("dp"));
//! ```

use std::ops::BitAnd;
use std::sync::Arc;

use crate::specification::{And, BoxedSpec, Specification};

/// Operator wrapper around a specification
#[derive(Debug, Clone, Copy)]
pub struct Spec<S>(pub S);

impl<S> Spec<S> {
    /// Erase the concrete type, e.g. to collect into [`crate::specification::AnyOf`]
    pub fn boxed<Ctx>(self) -> BoxedSpec<Ctx>
    where
        S: Specification<Ctx> + 'static,
    {
        Arc::new(self.0)
    }
}

impl<A, B> BitAnd<Spec<B>> for Spec<A> {
    type Output = Spec<And<A, B>>;

    fn bitand(self, rhs: Spec<B>) -> Self::Output {
        Spec(And(self.0, rhs.0))
    }
}

impl<Ctx, S: Specification<Ctx>> Specification<Ctx> for Spec<S> {
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.0.is_satisfied_by(ctx)
    }
}
