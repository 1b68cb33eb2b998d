//! Child-list storage for composite nodes.
//!
//! Composites are generic over *how* their children are stored. The
//! [`ChildList`] trait captures the three ordered folds a composite can
//! ask for, and is implemented for:
//!
//! - heterogeneous tuples up to arity 12 — the preferred, zero-boxing
//!   form: the whole tree is one concrete type and every contract
//!   mismatch is a compile error at the composition site
//! - `()` — the empty list, taking the vacuous defaults
//! - `[N; K]` arrays and `Vec<N>` — homogeneous lists; with
//!   `N = Box<dyn Behavior<Ctx>>` this is the dynamic heterogeneous form
//!   used by [`crate::builder`]
//!
//! Children are always visited strictly in construction order; that order
//! is the only ordering guarantee the tree makes.

use crate::{Behavior, Status};

/// An ordered, fixed list of child nodes that a composite can fold over.
///
/// Each method performs one left-to-right pass for the current tick.
pub trait ChildList<Ctx> {
    /// AND-fold: tick children in order, stopping at the first `Failure`.
    ///
    /// Children after the first failure are not ticked. Returns `Success`
    /// if every child succeeds; the empty list vacuously succeeds.
    fn tick_and(&self, ctx: &mut Ctx) -> Status;

    /// OR-fold: tick children in order, stopping at the first `Success`.
    ///
    /// Children after the first success are not ticked. Returns `Failure`
    /// if every child fails; the empty list vacuously fails.
    fn tick_or(&self, ctx: &mut Ctx) -> Status;

    /// Tick every child exactly once, in order, discarding each outcome.
    ///
    /// Always returns `Success`, including for the empty list.
    fn tick_all(&self, ctx: &mut Ctx) -> Status;
}

impl<Ctx> ChildList<Ctx> for () {
    #[inline]
    fn tick_and(&self, _ctx: &mut Ctx) -> Status {
        Status::Success
    }

    #[inline]
    fn tick_or(&self, _ctx: &mut Ctx) -> Status {
        Status::Failure
    }

    #[inline]
    fn tick_all(&self, _ctx: &mut Ctx) -> Status {
        Status::Success
    }
}

macro_rules! impl_child_list_for_tuple {
    ($($child:ident),+) => {
        #[allow(non_snake_case)]
        impl<Ctx, $($child: Behavior<Ctx>),+> ChildList<Ctx> for ($($child,)+) {
            fn tick_and(&self, ctx: &mut Ctx) -> Status {
                let ($($child,)+) = self;
                $(
                    if $child.tick(ctx).is_failure() {
                        return Status::Failure;
                    }
                )+
                Status::Success
            }

            fn tick_or(&self, ctx: &mut Ctx) -> Status {
                let ($($child,)+) = self;
                $(
                    if $child.tick(ctx).is_success() {
                        return Status::Success;
                    }
                )+
                Status::Failure
            }

            fn tick_all(&self, ctx: &mut Ctx) -> Status {
                let ($($child,)+) = self;
                $(
                    let _ = $child.tick(ctx);
                )+
                Status::Success
            }
        }
    };
}

impl_child_list_for_tuple!(A);
impl_child_list_for_tuple!(A, B);
impl_child_list_for_tuple!(A, B, C);
impl_child_list_for_tuple!(A, B, C, D);
impl_child_list_for_tuple!(A, B, C, D, E);
impl_child_list_for_tuple!(A, B, C, D, E, F);
impl_child_list_for_tuple!(A, B, C, D, E, F, G);
impl_child_list_for_tuple!(A, B, C, D, E, F, G, H);
impl_child_list_for_tuple!(A, B, C, D, E, F, G, H, I);
impl_child_list_for_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_child_list_for_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_child_list_for_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

fn tick_and_slice<Ctx, N: Behavior<Ctx>>(children: &[N], ctx: &mut Ctx) -> Status {
    for child in children {
        if child.tick(ctx).is_failure() {
            return Status::Failure;
        }
    }
    Status::Success
}

fn tick_or_slice<Ctx, N: Behavior<Ctx>>(children: &[N], ctx: &mut Ctx) -> Status {
    for child in children {
        if child.tick(ctx).is_success() {
            return Status::Success;
        }
    }
    Status::Failure
}

fn tick_all_slice<Ctx, N: Behavior<Ctx>>(children: &[N], ctx: &mut Ctx) -> Status {
    for child in children {
        let _ = child.tick(ctx);
    }
    Status::Success
}

impl<Ctx, N: Behavior<Ctx>> ChildList<Ctx> for Vec<N> {
    fn tick_and(&self, ctx: &mut Ctx) -> Status {
        tick_and_slice(self, ctx)
    }

    fn tick_or(&self, ctx: &mut Ctx) -> Status {
        tick_or_slice(self, ctx)
    }

    fn tick_all(&self, ctx: &mut Ctx) -> Status {
        tick_all_slice(self, ctx)
    }
}

impl<Ctx, N: Behavior<Ctx>, const K: usize> ChildList<Ctx> for [N; K] {
    fn tick_and(&self, ctx: &mut Ctx) -> Status {
        tick_and_slice(self, ctx)
    }

    fn tick_or(&self, ctx: &mut Ctx) -> Status {
        tick_or_slice(self, ctx)
    }

    fn tick_all(&self, ctx: &mut Ctx) -> Status {
        tick_all_slice(self, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counters {
        calls: Vec<u32>,
        order: Vec<usize>,
    }

    impl Counters {
        fn with_slots(n: usize) -> Self {
            Self {
                calls: vec![0; n],
                order: vec![],
            }
        }
    }

    /// Scripted leaf: records its call (count and position in the tick's
    /// visit order) and returns a fixed outcome.
    struct Leaf {
        slot: usize,
        outcome: Status,
    }

    impl Behavior<Counters> for Leaf {
        fn tick(&self, ctx: &mut Counters) -> Status {
            ctx.calls[self.slot] += 1;
            ctx.order.push(self.slot);
            self.outcome
        }
    }

    fn leaf(slot: usize, success: bool) -> Leaf {
        Leaf {
            slot,
            outcome: Status::from(success),
        }
    }

    #[test]
    fn and_fold_stops_at_first_failure() {
        let kids = (leaf(0, true), leaf(1, false), leaf(2, true));
        let mut ctx = Counters::with_slots(3);
        assert_eq!(kids.tick_and(&mut ctx), Status::Failure);
        assert_eq!(ctx.calls, vec![1, 1, 0]);
        assert_eq!(ctx.order, vec![0, 1]);
    }

    #[test]
    fn or_fold_stops_at_first_success() {
        let kids = (leaf(0, false), leaf(1, true), leaf(2, true));
        let mut ctx = Counters::with_slots(3);
        assert_eq!(kids.tick_or(&mut ctx), Status::Success);
        assert_eq!(ctx.calls, vec![1, 1, 0]);
        assert_eq!(ctx.order, vec![0, 1]);
    }

    #[test]
    fn all_fold_visits_every_child_once_in_order() {
        let kids = (leaf(0, false), leaf(1, false), leaf(2, false));
        let mut ctx = Counters::with_slots(3);
        assert_eq!(kids.tick_all(&mut ctx), Status::Success);
        assert_eq!(ctx.calls, vec![1, 1, 1]);
        assert_eq!(ctx.order, vec![0, 1, 2]);
    }

    #[test]
    fn empty_list_vacuous_defaults() {
        let mut ctx = Counters::with_slots(0);
        assert_eq!(ChildList::<Counters>::tick_and(&(), &mut ctx), Status::Success);
        assert_eq!(ChildList::<Counters>::tick_or(&(), &mut ctx), Status::Failure);
        assert_eq!(ChildList::<Counters>::tick_all(&(), &mut ctx), Status::Success);
    }

    #[test]
    fn empty_vec_matches_empty_tuple() {
        let kids: Vec<Leaf> = vec![];
        let mut ctx = Counters::with_slots(0);
        assert_eq!(kids.tick_and(&mut ctx), Status::Success);
        assert_eq!(kids.tick_or(&mut ctx), Status::Failure);
        assert_eq!(kids.tick_all(&mut ctx), Status::Success);
    }

    #[test]
    fn array_children_fold_in_order() {
        let kids = [leaf(0, false), leaf(1, false)];
        let mut ctx = Counters::with_slots(2);
        assert_eq!(kids.tick_or(&mut ctx), Status::Failure);
        assert_eq!(ctx.calls, vec![1, 1]);
        assert_eq!(ctx.order, vec![0, 1]);
    }
}
