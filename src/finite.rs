use crate::ring::*;
use crate::integer::{IntegerRing, IntegerRingStore};

///
/// Trait for rings with finitely many elements.
///
pub trait FiniteRing: RingBase {

    type ElementsIter<'a>: Iterator<Item = Self::Element>
        where Self: 'a;

    ///
    /// Returns an iterator over all elements of this ring. Each element
    /// occurs exactly once, but the order is unspecified.
    ///
    fn elements<'a>(&'a self) -> Self::ElementsIter<'a>;

    ///
    /// Returns a uniformly random element, with the randomness derived
    /// from the given `u64`-source.
    ///
    fn random_element<G: FnMut() -> u64>(&self, rng: G) -> Self::Element;

    ///
    /// Returns the number of elements of this ring, if it fits within the
    /// given integer ring.
    ///
    fn size<I>(&self, ZZ: &I) -> Option<El<I>>
        where I: IntegerRingStore, I::Type: IntegerRing;
}

///
/// [`RingStore`] for [`FiniteRing`]s
///
pub trait FiniteRingStore: RingStore
    where Self::Type: FiniteRing
{
    fn elements<'a>(&'a self) -> <Self::Type as FiniteRing>::ElementsIter<'a> {
        self.get_ring().elements()
    }

    fn random_element<G: FnMut() -> u64>(&self, rng: G) -> El<Self> {
        self.get_ring().random_element(rng)
    }

    fn size<I>(&self, ZZ: &I) -> Option<El<I>>
        where I: IntegerRingStore, I::Type: IntegerRing
    {
        self.get_ring().size(ZZ)
    }
}

impl<R> FiniteRingStore for R
    where R: RingStore,
        R::Type: FiniteRing
{}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {
    use super::*;
    use crate::primitive_int::StaticRing;

    pub fn test_finite_ring_axioms<R: FiniteRingStore>(ring: R)
        where R::Type: FiniteRing
    {
        let all_elements = ring.elements().collect::<Vec<_>>();

        if let Some(size) = ring.size(&StaticRing::<i128>::RING) {
            assert_eq!(size, all_elements.len() as i128);
        }

        // no element may occur twice
        for (i, a) in all_elements.iter().enumerate() {
            for b in &all_elements[(i + 1)..] {
                assert!(!ring.eq_el(a, b), "Duplicate element {} in element enumeration", ring.format(a));
            }
        }

        // zero and one must occur
        assert!(all_elements.iter().any(|a| ring.is_zero(a)));
        assert!(all_elements.iter().any(|a| ring.is_one(a)) || all_elements.len() == 1);
    }
}
