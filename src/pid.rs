use crate::ring::*;
use crate::divisibility::*;

///
/// Trait for rings that are principal ideal rings, i.e. every ideal is
/// generated by a single element.
///
pub trait PrincipalIdealRing: DivisibilityRing {

    ///
    /// Computes a Bezout identity.
    ///
    /// More concretely, this returns (s, t, g) such that g is a generator
    /// of the ideal `(lhs, rhs)` and `g = s * lhs + t * rhs`.
    ///
    fn extended_ideal_gen(&self, lhs: &Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element, Self::Element);

    ///
    /// Computes a single generator of the ideal `(lhs, rhs)`, i.e. a
    /// greatest common divisor of `lhs` and `rhs`.
    ///
    fn ideal_gen(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        self.extended_ideal_gen(lhs, rhs).2
    }
}

///
/// [`RingStore`] for [`PrincipalIdealRing`]s
///
pub trait PrincipalIdealRingStore: RingStore
    where Self::Type: PrincipalIdealRing
{
    delegate!{ fn extended_ideal_gen(&self, lhs: &El<Self>, rhs: &El<Self>) -> (El<Self>, El<Self>, El<Self>) }
    delegate!{ fn ideal_gen(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> }
}

impl<R> PrincipalIdealRingStore for R
    where R: RingStore,
        R::Type: PrincipalIdealRing
{}

///
/// Trait for rings that support euclidean division.
///
/// In other words, there is a degree function d(.)
/// returning nonnegative integers such that for every `x, y`
/// with `y != 0` there are `q, r` with `x = qy + r` and
/// `d(r) < d(y)`. Note that `q, r` do not have to be unique,
/// and implementations are free to use any choice.
///
/// # Example
/// ```
/// # use polyfactor::assert_el_eq;
/// # use polyfactor::ring::*;
/// # use polyfactor::pid::*;
/// # use polyfactor::primitive_int::*;
/// let ring = StaticRing::<i64>::RING;
/// let (q, r) = ring.euclidean_div_rem(14, &6);
/// assert_el_eq!(&ring, &14, &ring.add(ring.mul(q, 6), r));
/// assert!(ring.euclidean_deg(&r) < ring.euclidean_deg(&6));
/// ```
///
pub trait EuclideanRing: PrincipalIdealRing {

    fn euclidean_div_rem(&self, lhs: Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element);

    ///
    /// The degree function of the euclidean division. May return `None` if
    /// the degree of an element does not fit into a `usize`.
    ///
    fn euclidean_deg(&self, val: &Self::Element) -> Option<usize>;

    fn euclidean_div(&self, lhs: Self::Element, rhs: &Self::Element) -> Self::Element {
        self.euclidean_div_rem(lhs, rhs).0
    }

    fn euclidean_rem(&self, lhs: Self::Element, rhs: &Self::Element) -> Self::Element {
        self.euclidean_div_rem(lhs, rhs).1
    }
}

///
/// [`RingStore`] for [`EuclideanRing`]s
///
pub trait EuclideanRingStore: RingStore + DivisibilityRingStore
    where Self::Type: EuclideanRing
{
    delegate!{ fn euclidean_div_rem(&self, lhs: El<Self>, rhs: &El<Self>) -> (El<Self>, El<Self>) }
    delegate!{ fn euclidean_div(&self, lhs: El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn euclidean_rem(&self, lhs: El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn euclidean_deg(&self, val: &El<Self>) -> Option<usize> }
}

impl<R> EuclideanRingStore for R
    where R: RingStore, R::Type: EuclideanRing
{}

///
/// Trait for euclidean rings in which it can be decided whether an element
/// is prime, i.e. generates a maximal ideal. For the integers these are the
/// prime numbers, for polynomial rings over a field the irreducible
/// polynomials.
///
pub trait PrimalityRing: EuclideanRing {

    fn is_prime(&self, value: &Self::Element) -> bool;
}

///
/// [`RingStore`] for [`PrimalityRing`]s
///
pub trait PrimalityRingStore: RingStore
    where Self::Type: PrimalityRing
{
    delegate!{ fn is_prime(&self, value: &El<Self>) -> bool }
}

impl<R> PrimalityRingStore for R
    where R: RingStore, R::Type: PrimalityRing
{}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {
    use super::*;
    use crate::ring::El;

    pub fn test_euclidean_ring_axioms<R: EuclideanRingStore, I: Iterator<Item = El<R>>>(ring: R, edge_case_elements: I)
        where R::Type: EuclideanRing
    {
        assert!(ring.is_commutative());
        assert!(ring.is_noetherian());
        let elements = edge_case_elements.collect::<Vec<_>>();
        for a in &elements {
            for b in &elements {
                if ring.is_zero(b) {
                    continue;
                }
                let (q, r) = ring.euclidean_div_rem(ring.clone_el(a), b);
                assert!(ring.euclidean_deg(b).is_none() || ring.euclidean_deg(&r).unwrap_or(usize::MAX) < ring.euclidean_deg(b).unwrap());
                assert_el_eq!(&ring, a, &ring.add(ring.mul(q, ring.clone_el(b)), r));
            }
        }
    }

    pub fn test_principal_ideal_ring_axioms<R: PrincipalIdealRingStore, I: Iterator<Item = El<R>>>(ring: R, edge_case_elements: I)
        where R::Type: PrincipalIdealRing
    {
        assert!(ring.is_commutative());
        assert!(ring.is_noetherian());
        let elements = edge_case_elements.collect::<Vec<_>>();
        for a in &elements {
            for b in &elements {
                let (s, t, g) = ring.extended_ideal_gen(a, b);
                assert!(ring.is_zero(&g) || ring.divides(a, &g), "Wrong ideal generator: {} does not divide {}", ring.format(&g), ring.format(a));
                assert!(ring.is_zero(&g) || ring.divides(b, &g), "Wrong ideal generator: {} does not divide {}", ring.format(&g), ring.format(b));
                assert_el_eq!(&ring, &g, &ring.add(ring.mul_ref_snd(s, a), ring.mul_ref_snd(t, b)));
            }
        }
    }
}
