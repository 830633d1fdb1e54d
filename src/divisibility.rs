use crate::ring::*;

///
/// Trait for rings in which divisibility can be decided effectively.
///
pub trait DivisibilityRing: RingBase {

    ///
    /// Checks whether there is an element `x` such that `rhs * x = lhs`, and
    /// returns it if it exists. Note that this does not have to be unique if
    /// `rhs` is a zero divisor.
    ///
    fn checked_left_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element>;

    fn is_unit(&self, value: &Self::Element) -> bool {
        self.checked_left_div(&self.one(), value).is_some()
    }

    fn invert(&self, value: &Self::Element) -> Option<Self::Element> {
        self.checked_left_div(&self.one(), value)
    }
}

///
/// Marker trait for commutative rings without zero divisors.
///
pub trait Domain: RingBase {}

///
/// [`RingStore`] for [`DivisibilityRing`]s
///
pub trait DivisibilityRingStore: RingStore
    where Self::Type: DivisibilityRing
{
    delegate!{ fn checked_left_div(&self, lhs: &El<Self>, rhs: &El<Self>) -> Option<El<Self>> }
    delegate!{ fn is_unit(&self, value: &El<Self>) -> bool }
    delegate!{ fn invert(&self, value: &El<Self>) -> Option<El<Self>> }

    fn checked_div(&self, lhs: &El<Self>, rhs: &El<Self>) -> Option<El<Self>> {
        assert!(self.is_commutative());
        self.checked_left_div(lhs, rhs)
    }

    fn divides(&self, lhs: &El<Self>, rhs: &El<Self>) -> bool {
        self.checked_left_div(lhs, rhs).is_some()
    }
}

impl<R> DivisibilityRingStore for R
    where R: RingStore,
        R::Type: DivisibilityRing
{}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {
    use super::*;

    pub fn test_divisibility_axioms<R: DivisibilityRingStore, I: Iterator<Item = El<R>>>(ring: R, edge_case_elements: I)
        where R::Type: DivisibilityRing
    {
        let elements = edge_case_elements.collect::<Vec<_>>();

        for a in &elements {
            for b in &elements {
                let product = ring.mul_ref(a, b);
                let quotient = ring.checked_div(&product, b);
                if !ring.is_zero(b) {
                    assert!(quotient.is_some(), "Divisibility failed: there should be x with {} * x = {}", ring.format(b), ring.format(&product));
                }
                if let Some(quo) = quotient {
                    assert_el_eq!(&ring, &product, &ring.mul_ref_snd(quo, b));
                }
            }
        }

        for a in &elements {
            if let Some(inv) = ring.invert(a) {
                assert!(ring.is_unit(a));
                assert_el_eq!(&ring, &ring.one(), &ring.mul_ref_snd(inv, a));
            }
        }

        assert!(ring.is_unit(&ring.one()));
        assert!(ring.is_unit(&ring.neg_one()));
        assert!(!ring.is_unit(&ring.zero()));
    }
}
