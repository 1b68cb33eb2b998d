//! Synchronous behavior tree execution core.
//!
//! This library provides a minimal, deterministic behavior tree engine
//! for expressing reactive decision logic (game AI, robotics, automation
//! controllers) without hand-written state machines.
//!
//! - **Binary outcomes**: every tick returns [`Status::Success`] or
//!   [`Status::Failure`]; there is no `Running` state
//! - **No cross-tick state**: the tree is fully re-evaluated from the
//!   root on every tick
//! - **Static composition**: children live in heterogeneous tuples, so a
//!   whole tree is one concrete type and contract mismatches are compile
//!   errors; boxed `Vec` children remain available for trees assembled
//!   at runtime
//! - **Single-threaded**: one tick is a depth-first, left-to-right walk
//!   on the caller's thread, pruned by short-circuiting
//!
//! # Architecture
//!
//! - [`Behavior`]: core trait for all nodes
//! - [`Status`]: Success or Failure
//! - Composite nodes: [`Sequence`], [`Selector`], [`Parallel`]
//! - Decorator nodes: [`Inverter`], [`Repeat`], [`Retry`], [`AlwaysSucceed`]
//! - [`ChildList`]: child storage the composites fold over
//!
//! # Example
//!
//! ```rust,ignore
//! use tick_tree::{Behavior, Inverter, Selector, Sequence, Status};
//!
//! // Leaves are caller-supplied types implementing Behavior<Ctx>.
//! let tree = Sequence::new((
//!     Selector::new((TryDoor, BreakWindow)),
//!     Inverter::new(AlarmTripped),
//! ));
//! let status = tree.tick(&mut world);
//! ```
//!
//! Repeat and Retry loop until their child flips outcome; a child that
//! never flips makes the tick never return. That liveness hazard is part
//! of the contract — see the decorator docs before reaching for them.

pub mod behavior;
pub mod builder;
pub mod children;
pub mod composite;
pub mod decorator;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use children::ChildList;
pub use composite::{Parallel, Selector, Sequence};
pub use decorator::{AlwaysSucceed, Inverter, Repeat, Retry};
pub use status::Status;
