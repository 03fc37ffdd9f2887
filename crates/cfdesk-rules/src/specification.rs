//! Predicate trait and the combinators the problem filter is built from.

use std::sync::Arc;

/// A composable yes/no question about a context value.
///
/// Specifications are pure: evaluating one never mutates the context
/// and always yields the same answer for the same input.
pub trait Specification<Ctx>: Send + Sync {
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool;
}

/// Both must hold.
#[derive(Clone)]
pub struct And<A, B>(pub A, pub B);

impl<Ctx, A, B> Specification<Ctx> for And<A, B>
where
    A: Specification<Ctx>,
    B: Specification<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.0.is_satisfied_by(ctx) && self.1.is_satisfied_by(ctx)
    }
}

/// Matches everything.
#[derive(Clone, Copy)]
pub struct AlwaysTrue;

impl<Ctx> Specification<Ctx> for AlwaysTrue {
    fn is_satisfied_by(&self, _ctx: &Ctx) -> bool {
        true
    }
}

/// Type-erased specification, shareable across threads.
pub type BoxedSpec<Ctx> = Arc<dyn Specification<Ctx>>;

impl<Ctx> Specification<Ctx> for BoxedSpec<Ctx> {
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.as_ref().is_satisfied_by(ctx)
    }
}

/// At least one member must hold.
///
/// An empty collection is never satisfied.
pub struct AnyOf<Ctx> {
    specs: Vec<BoxedSpec<Ctx>>,
}

impl<Ctx> AnyOf<Ctx> {
    pub fn new(specs: Vec<BoxedSpec<Ctx>>) -> Self {
        AnyOf { specs }
    }
}

impl<Ctx> Specification<Ctx> for AnyOf<Ctx> {
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.specs.iter().any(|spec| spec.is_satisfied_by(ctx))
    }
}
