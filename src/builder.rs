//! Builder utilities for runtime-assembled trees.
//!
//! The static tuple form is preferred when the tree shape is known at
//! compile time. When it is not (children chosen by configuration or
//! game content), trees are built from `Box<dyn Behavior<Ctx>>` parts,
//! and these helpers cut the `Box::new(Sequence::new(vec![...]))`
//! boilerplate down to `sequence(vec![...])`.

use crate::{AlwaysSucceed, Behavior, Inverter, Parallel, Repeat, Retry, Selector, Sequence};

/// A boxed behavior node, the unit of runtime tree assembly.
pub type BoxedBehavior<Ctx> = Box<dyn Behavior<Ctx>>;

/// Creates a boxed sequence node.
#[inline]
pub fn sequence<Ctx: 'static>(children: Vec<BoxedBehavior<Ctx>>) -> BoxedBehavior<Ctx> {
    Box::new(Sequence::new(children))
}

/// Creates a boxed selector node.
#[inline]
pub fn selector<Ctx: 'static>(children: Vec<BoxedBehavior<Ctx>>) -> BoxedBehavior<Ctx> {
    Box::new(Selector::new(children))
}

/// Creates a boxed parallel node.
#[inline]
pub fn parallel<Ctx: 'static>(children: Vec<BoxedBehavior<Ctx>>) -> BoxedBehavior<Ctx> {
    Box::new(Parallel::new(children))
}

/// Creates a boxed inverter node.
#[inline]
pub fn invert<Ctx: 'static>(child: BoxedBehavior<Ctx>) -> BoxedBehavior<Ctx> {
    Box::new(Inverter::new(child))
}

/// Creates a boxed repeat node (ticks the child until it fails).
#[inline]
pub fn repeat<Ctx: 'static>(child: BoxedBehavior<Ctx>) -> BoxedBehavior<Ctx> {
    Box::new(Repeat::new(child))
}

/// Creates a boxed retry node (ticks the child until it succeeds).
#[inline]
pub fn retry<Ctx: 'static>(child: BoxedBehavior<Ctx>) -> BoxedBehavior<Ctx> {
    Box::new(Retry::new(child))
}

/// Creates a boxed always-succeed node.
#[inline]
pub fn always_succeed<Ctx: 'static>(child: BoxedBehavior<Ctx>) -> BoxedBehavior<Ctx> {
    Box::new(AlwaysSucceed::new(child))
}
