use crate::ring::*;

use std::cmp::Ordering;

///
/// Trait for rings with a total order that is compatible with the ring
/// operations, i.e. `a <= b` implies `a + c <= b + c`, and `0 <= a, b`
/// implies `0 <= ab`.
///
pub trait OrderedRing: RingBase {

    fn cmp(&self, lhs: &Self::Element, rhs: &Self::Element) -> Ordering;

    fn abs_cmp(&self, lhs: &Self::Element, rhs: &Self::Element) -> Ordering {
        match (self.is_neg(lhs), self.is_neg(rhs)) {
            (true, true) => self.cmp(rhs, lhs),
            (true, false) => self.cmp(&self.negate(self.clone_el(lhs)), rhs),
            (false, true) => self.cmp(lhs, &self.negate(self.clone_el(rhs))),
            (false, false) => self.cmp(lhs, rhs)
        }
    }

    fn is_leq(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        self.cmp(lhs, rhs) != Ordering::Greater
    }

    fn is_geq(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        self.cmp(lhs, rhs) != Ordering::Less
    }

    fn is_lt(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        self.cmp(lhs, rhs) == Ordering::Less
    }

    fn is_gt(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        self.cmp(lhs, rhs) == Ordering::Greater
    }

    fn is_neg(&self, value: &Self::Element) -> bool {
        self.cmp(value, &self.zero()) == Ordering::Less
    }

    fn is_pos(&self, value: &Self::Element) -> bool {
        self.cmp(value, &self.zero()) == Ordering::Greater
    }

    fn abs(&self, value: Self::Element) -> Self::Element {
        if self.is_neg(&value) {
            self.negate(value)
        } else {
            value
        }
    }
}

///
/// [`RingStore`] for [`OrderedRing`]s
///
pub trait OrderedRingStore: RingStore
    where Self::Type: OrderedRing
{
    delegate!{ fn cmp(&self, lhs: &El<Self>, rhs: &El<Self>) -> Ordering }
    delegate!{ fn abs_cmp(&self, lhs: &El<Self>, rhs: &El<Self>) -> Ordering }
    delegate!{ fn is_leq(&self, lhs: &El<Self>, rhs: &El<Self>) -> bool }
    delegate!{ fn is_geq(&self, lhs: &El<Self>, rhs: &El<Self>) -> bool }
    delegate!{ fn is_lt(&self, lhs: &El<Self>, rhs: &El<Self>) -> bool }
    delegate!{ fn is_gt(&self, lhs: &El<Self>, rhs: &El<Self>) -> bool }
    delegate!{ fn is_neg(&self, value: &El<Self>) -> bool }
    delegate!{ fn is_pos(&self, value: &El<Self>) -> bool }
    delegate!{ fn abs(&self, value: El<Self>) -> El<Self> }
}

impl<R> OrderedRingStore for R
    where R: RingStore, R::Type: OrderedRing
{}
