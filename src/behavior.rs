//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, the single contract every
//! behavior tree node satisfies. The trait is generic over a context type
//! `Ctx`, which is forwarded unchanged to every node in the subtree during
//! one tick; the tree never interprets or replaces it.

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
///
/// Evaluation is fully synchronous: ticking a composite or decorator
/// recursively ticks its children on the caller's thread and returns only
/// once the whole subtree has produced an outcome. Nodes hold no
/// tick-to-tick state in this core.
///
/// A type only composes into a tree over context `Ctx` if it implements
/// `Behavior<Ctx>`, so a mismatched context or a non-node type is a
/// compile error, never a runtime one.
///
/// The trait deliberately has no `Send`/`Sync` supertrait: a single tick
/// involves no concurrency, and whether a *tree* may be shared across
/// threads depends entirely on its leaves and context.
pub trait Behavior<Ctx> {
    /// Evaluate this node once against the given context.
    ///
    /// Returns [`Status::Success`] or [`Status::Failure`]; there is no
    /// other outcome channel. Richer diagnostics travel through `Ctx`.
    fn tick(&self, ctx: &mut Ctx) -> Status;
}

/// Boxed nodes are nodes, enabling heterogeneous `Vec<Box<dyn Behavior<Ctx>>>`
/// child lists for trees assembled at runtime.
impl<Ctx> Behavior<Ctx> for Box<dyn Behavior<Ctx>> {
    #[inline]
    fn tick(&self, ctx: &mut Ctx) -> Status {
        (**self).tick(ctx)
    }
}

/// Ticking needs only a shared borrow of the node, so references compose
/// wherever owned nodes do.
impl<Ctx, N: Behavior<Ctx>> Behavior<Ctx> for &N {
    #[inline]
    fn tick(&self, ctx: &mut Ctx) -> Status {
        (**self).tick(ctx)
    }
}
