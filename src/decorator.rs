//! Decorator behavior nodes.
//!
//! Decorators wrap exactly one child and transform its outcome or its
//! iteration behavior. All decorators here are generic over the child
//! type, so a decorated subtree stays a single concrete type with no
//! boxing; wrap a `Box<dyn Behavior<Ctx>>` instead when assembling trees
//! at runtime.

use crate::{Behavior, Status};

/// Inverts the result of its child behavior.
///
/// Ticks the child exactly once per call and returns the opposite status.
/// This is the logical NOT of the tree algebra.
#[derive(Debug, Default)]
pub struct Inverter<N> {
    child: N,
}

impl<N> Inverter<N> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: N) -> Self {
        Self { child }
    }
}

impl<Ctx, N: Behavior<Ctx>> Behavior<Ctx> for Inverter<N> {
    fn tick(&self, ctx: &mut Ctx) -> Status {
        let status = self.child.tick(ctx).invert();
        tracing::trace!(node = "inverter", ?status);
        status
    }
}

/// Ticks its child repeatedly for as long as the child succeeds.
///
/// Returns `Success` on the child's first `Failure`: "keep doing this
/// until it stops working." Every iteration reuses the same context
/// borrow.
///
/// # Liveness
///
/// If the child never fails, this call never returns. That is the
/// documented contract, not a bug; there is no iteration cap in this
/// node. A child that must terminate has to carry its own cutoff.
#[derive(Debug, Default)]
pub struct Repeat<N> {
    child: N,
}

impl<N> Repeat<N> {
    /// Creates a new repeater that wraps the given child behavior.
    pub fn new(child: N) -> Self {
        Self { child }
    }
}

impl<Ctx, N: Behavior<Ctx>> Behavior<Ctx> for Repeat<N> {
    fn tick(&self, ctx: &mut Ctx) -> Status {
        let mut iterations = 1u64;
        while self.child.tick(ctx).is_success() {
            iterations += 1;
        }
        tracing::trace!(node = "repeat", iterations);
        Status::Success
    }
}

/// Ticks its child repeatedly for as long as the child fails.
///
/// Returns `Success` on the child's first `Success`; the mirror image of
/// [`Repeat`].
///
/// # Liveness
///
/// If the child never succeeds, this call never returns. Same contract
/// as [`Repeat`]: no iteration cap lives in this node.
#[derive(Debug, Default)]
pub struct Retry<N> {
    child: N,
}

impl<N> Retry<N> {
    /// Creates a new retrier that wraps the given child behavior.
    pub fn new(child: N) -> Self {
        Self { child }
    }
}

impl<Ctx, N: Behavior<Ctx>> Behavior<Ctx> for Retry<N> {
    fn tick(&self, ctx: &mut Ctx) -> Status {
        let mut iterations = 1u64;
        while self.child.tick(ctx).is_failure() {
            iterations += 1;
        }
        tracing::trace!(node = "retry", iterations);
        Status::Success
    }
}

/// Always returns `Success`, regardless of the child's result.
///
/// The child is still ticked exactly once per call; only its outcome is
/// discarded. Useful for optional steps inside a [`crate::Sequence`] and
/// for layering outcome policies over [`crate::Parallel`] children.
#[derive(Debug, Default)]
pub struct AlwaysSucceed<N> {
    child: N,
}

impl<N> AlwaysSucceed<N> {
    /// Creates a new always-succeed wrapper around the given child behavior.
    pub fn new(child: N) -> Self {
        Self { child }
    }
}

impl<Ctx, N: Behavior<Ctx>> Behavior<Ctx> for AlwaysSucceed<N> {
    fn tick(&self, ctx: &mut Ctx) -> Status {
        let _ = self.child.tick(ctx);
        Status::Success
    }
}
