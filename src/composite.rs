//! Composite behavior nodes.
//!
//! Composites own an ordered list of children and aggregate their
//! outcomes under a fixed policy: [`Sequence`] (short-circuit AND),
//! [`Selector`] (short-circuit OR) and [`Parallel`] (evaluate all).
//! Children are stored through [`ChildList`], so the same composites work
//! over static tuples, arrays, and boxed `Vec`s.

use crate::{Behavior, ChildList, Status};

/// Executes child behaviors in order until one fails.
///
/// # Semantics
///
/// A `Sequence` evaluates its children from left to right:
/// - if a child returns `Failure`, the sequence **stops immediately** and
///   returns `Failure`; later children are not ticked
/// - if a child returns `Success`, the sequence continues to the next
/// - if all children return `Success`, the sequence returns `Success`
///
/// This is a short-circuited logical AND (`&&`) over the children.
/// A sequence with no children vacuously returns `Success`.
#[derive(Debug, Default)]
pub struct Sequence<L> {
    children: L,
}

impl<L> Sequence<L> {
    /// Creates a new sequence with the given child list.
    pub fn new(children: L) -> Self {
        Self { children }
    }
}

impl<Ctx, L: ChildList<Ctx>> Behavior<Ctx> for Sequence<L> {
    fn tick(&self, ctx: &mut Ctx) -> Status {
        let status = self.children.tick_and(ctx);
        tracing::trace!(node = "sequence", ?status);
        status
    }
}

/// Executes child behaviors in order until one succeeds.
///
/// # Semantics
///
/// A `Selector` evaluates its children from left to right:
/// - if a child returns `Success`, the selector **stops immediately** and
///   returns `Success`; later children are not ticked
/// - if a child returns `Failure`, the selector tries the next
/// - if all children return `Failure`, the selector returns `Failure`
///
/// This is a short-circuited logical OR (`||`) over the children: "try
/// alternatives until one works." A selector with no children vacuously
/// returns `Failure`.
#[derive(Debug, Default)]
pub struct Selector<L> {
    children: L,
}

impl<L> Selector<L> {
    /// Creates a new selector with the given child list.
    pub fn new(children: L) -> Self {
        Self { children }
    }
}

impl<Ctx, L: ChildList<Ctx>> Behavior<Ctx> for Selector<L> {
    fn tick(&self, ctx: &mut Ctx) -> Status {
        let status = self.children.tick_or(ctx);
        tracing::trace!(node = "selector", ?status);
        status
    }
}

/// Executes every child exactly once per tick and always succeeds.
///
/// # Semantics
///
/// A `Parallel` ticks all of its children in list order, with no
/// short-circuiting, and returns `Success` regardless of the individual
/// outcomes: "fire all, report done." The name denotes evaluate-all
/// semantics, not concurrent execution — children run sequentially on the
/// caller's thread like everywhere else in this core.
///
/// Individual outcomes are discarded by design. A richer policy (e.g.
/// require some child to succeed) is layered by wrapping children in
/// decorators, not built into this node.
#[derive(Debug, Default)]
pub struct Parallel<L> {
    children: L,
}

impl<L> Parallel<L> {
    /// Creates a new parallel node with the given child list.
    pub fn new(children: L) -> Self {
        Self { children }
    }
}

impl<Ctx, L: ChildList<Ctx>> Behavior<Ctx> for Parallel<L> {
    fn tick(&self, ctx: &mut Ctx) -> Status {
        let status = self.children.tick_all(ctx);
        tracing::trace!(node = "parallel", ?status);
        status
    }
}
