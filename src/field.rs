use crate::ring::*;
use crate::divisibility::*;
use crate::pid::*;

///
/// Trait for rings that are fields, i.e. commutative rings in which
/// every nonzero element is a unit.
///
/// As opposed to [`crate::divisibility::DivisibilityRing`], this is
/// a structural property of the ring, and not just a property of the
/// implementation. In particular, an implementor promises that division
/// by any nonzero element always succeeds.
///
pub trait Field: EuclideanRing + Domain {

    fn div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        assert!(!self.is_zero(rhs));
        self.checked_left_div(lhs, rhs).unwrap()
    }
}

///
/// [`RingStore`] for [`Field`]s
///
pub trait FieldStore: RingStore
    where Self::Type: Field
{
    delegate!{ fn div(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> }
}

impl<R> FieldStore for R
    where R: RingStore, R::Type: Field
{}
