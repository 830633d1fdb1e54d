use crate::divisibility::*;
use crate::error::AlgebraError;
use crate::finite::FiniteRing;
use crate::ideal::Ideal;
use crate::integer::{IntegerRing, IntegerRingStore};
use crate::ordered::{OrderedRing, OrderedRingStore};
use crate::pid::*;
use crate::ring::*;
use crate::rings::field_impl::AsFieldBase;

use std::cell::RefCell;
use std::rc::Rc;

///
/// Trait for euclidean rings that can enumerate a complete residue system
/// modulo any nonzero element, i.e. a set of representatives containing
/// exactly one element of every residue class. This is what makes quotients
/// of the ring by nonzero ideals finite and enumerable, see
/// [`QuotientRing`].
///
pub trait ResidueSystemRing: EuclideanRing {

    ///
    /// Returns a complete residue system modulo the given nonzero element.
    ///
    fn residue_system(&self, modulus: &Self::Element) -> Vec<Self::Element>;

    ///
    /// Returns the number of residue classes modulo the given nonzero
    /// element, if it fits within the given integer ring.
    ///
    fn residue_count<I>(&self, modulus: &Self::Element, ZZ: &I) -> Option<El<I>>
        where I: IntegerRingStore, I::Type: IntegerRing;

    ///
    /// Returns a representative of a uniformly random residue class modulo
    /// the given nonzero element, with the randomness derived from the given
    /// `u64`-source.
    ///
    fn random_residue<G: FnMut() -> u64>(&self, modulus: &Self::Element, rng: G) -> Self::Element;
}

///
/// The quotient ring `R/(m)` of a euclidean ring `R` modulo the ideal
/// generated by a nonzero element `m`.
///
/// Elements are stored as representatives in `R`, and reduced modulo `m`
/// after every arithmetic operation. Note that representatives are not
/// necessarily canonical (e.g. over the integers, the euclidean remainder
/// can be negative), so equality is decided by checking whether the
/// difference of two representatives is divisible by `m`.
///
/// # Example
/// ```
/// # use polyfactor::assert_el_eq;
/// # use polyfactor::ring::*;
/// # use polyfactor::rings::quotient::*;
/// # use polyfactor::primitive_int::*;
/// let Z17 = QuotientRing::new(StaticRing::<i64>::RING, 17);
/// assert_el_eq!(&Z17, &Z17.from_int(4), &Z17.mul(Z17.from_int(7), Z17.from_int(3)));
/// ```
///
pub struct QuotientRingBase<R: RingStore> {
    base_ring: R,
    modulus: El<R>
}

///
/// The quotient ring `R/(m)`, see [`QuotientRingBase`].
///
pub type QuotientRing<R> = RingValue<QuotientRingBase<R>>;

impl<R> QuotientRing<R>
    where R: RingStore, R::Type: ResidueSystemRing
{
    pub fn new(base_ring: R, modulus: El<R>) -> Self {
        assert!(!base_ring.is_zero(&modulus));
        RingValue::from(QuotientRingBase { base_ring, modulus })
    }
}

impl<R> QuotientRing<R>
    where R: RingStore, R::Type: ResidueSystemRing + PrimalityRing
{
    ///
    /// If the modulus is prime, wraps this ring into a [`crate::field::Field`]
    /// implementation. Otherwise, returns the unchanged ring as the error value.
    ///
    pub fn as_field(self) -> Result<RingValue<AsFieldBase<Self>>, Self> {
        if self.get_ring().base_ring.is_prime(&self.get_ring().modulus) {
            Ok(RingValue::from(AsFieldBase::promise_is_field(self)))
        } else {
            Err(self)
        }
    }
}

impl<R: RingStore> QuotientRingBase<R> {

    pub fn modulus(&self) -> &El<R> {
        &self.modulus
    }
}

impl<R> QuotientRingBase<R>
    where R: RingStore, R::Type: ResidueSystemRing
{
    fn reduce(&self, value: El<R>) -> El<R> {
        self.base_ring.euclidean_rem(value, &self.modulus)
    }

    fn reduce_in_place(&self, value: &mut El<R>) {
        let current = std::mem::replace(value, self.base_ring.zero());
        *value = self.reduce(current);
    }
}

impl<R> QuotientRingBase<R>
    where R: RingStore, R::Type: ResidueSystemRing + OrderedRing
{
    ///
    /// Returns the smallest nonnegative representative of the given residue
    /// class.
    ///
    pub fn smallest_positive_lift(&self, el: El<R>) -> El<R> {
        let mut result = self.reduce(el);
        if self.base_ring.is_neg(&result) {
            self.base_ring.add_assign(&mut result, self.base_ring.abs(self.base_ring.clone_el(&self.modulus)));
        }
        return result;
    }

    ///
    /// Returns the representative of smallest absolute value of the given
    /// residue class, i.e. the lift within `(-|m|/2, |m|/2]`.
    ///
    pub fn smallest_lift(&self, el: El<R>) -> El<R> {
        let modulus_abs = self.base_ring.abs(self.base_ring.clone_el(&self.modulus));
        let mut result = self.smallest_positive_lift(el);
        if self.base_ring.is_gt(&self.base_ring.mul_int_ref(&result, 2), &modulus_abs) {
            self.base_ring.sub_assign(&mut result, modulus_abs);
        }
        return result;
    }
}

impl<R> Clone for QuotientRingBase<R>
    where R: RingStore + Clone
{
    fn clone(&self) -> Self {
        QuotientRingBase {
            base_ring: self.base_ring.clone(),
            modulus: self.base_ring.clone_el(&self.modulus)
        }
    }
}

impl<R> PartialEq for QuotientRingBase<R>
    where R: RingStore, R::Type: ResidueSystemRing
{
    fn eq(&self, other: &Self) -> bool {
        self.base_ring.get_ring() == other.base_ring.get_ring()
            && self.base_ring.divides(&self.modulus, &other.modulus)
            && self.base_ring.divides(&other.modulus, &self.modulus)
    }
}

impl<R> RingBase for QuotientRingBase<R>
    where R: RingStore, R::Type: ResidueSystemRing
{
    type Element = El<R>;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        self.base_ring.clone_el(val)
    }

    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        self.base_ring.add_assign_ref(lhs, rhs);
        self.reduce_in_place(lhs);
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.base_ring.add_assign(lhs, rhs);
        self.reduce_in_place(lhs);
    }

    fn sub_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        self.base_ring.sub_assign_ref(lhs, rhs);
        self.reduce_in_place(lhs);
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        self.base_ring.negate_inplace(lhs);
        self.reduce_in_place(lhs);
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.base_ring.mul_assign(lhs, rhs);
        self.reduce_in_place(lhs);
    }

    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        self.base_ring.mul_assign_ref(lhs, rhs);
        self.reduce_in_place(lhs);
    }

    fn from_int(&self, value: i32) -> Self::Element {
        self.reduce(self.base_ring.from_int(value))
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        let diff = self.base_ring.sub_ref(lhs, rhs);
        self.base_ring.divides(&diff, &self.modulus)
    }

    fn is_zero(&self, value: &Self::Element) -> bool {
        self.base_ring.divides(value, &self.modulus)
    }

    fn is_commutative(&self) -> bool {
        self.base_ring.is_commutative()
    }

    fn is_noetherian(&self) -> bool {
        self.base_ring.is_noetherian()
    }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        write!(out, "[")?;
        self.base_ring.get_ring().dbg(value, out)?;
        write!(out, "]")
    }

    fn characteristic<I>(&self, ZZ: &I) -> Option<El<I>>
        where I: IntegerRingStore, I::Type: IntegerRing
    {
        let base_char = self.base_ring.get_ring().characteristic(ZZ)?;
        if !ZZ.is_zero(&base_char) {
            // the characteristic of the base ring still annihilates the quotient
            Some(base_char)
        } else {
            self.base_ring.get_ring().residue_count(&self.modulus, ZZ)
        }
    }
}

impl<R> RingExtension for QuotientRingBase<R>
    where R: RingStore, R::Type: ResidueSystemRing
{
    type BaseRing = R;

    fn base_ring<'a>(&'a self) -> &'a Self::BaseRing {
        &self.base_ring
    }

    fn from(&self, x: El<Self::BaseRing>) -> Self::Element {
        self.reduce(x)
    }
}

impl<R> DivisibilityRing for QuotientRingBase<R>
    where R: RingStore, R::Type: ResidueSystemRing
{
    fn checked_left_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element> {
        // with d = gcd(rhs, m) and s * rhs = d mod m, the image of
        // x -> rhs * x is exactly the set of multiples of d
        let (s, _, d) = self.base_ring.extended_ideal_gen(rhs, &self.modulus);
        let quo = self.base_ring.checked_div(lhs, &d)?;
        Some(self.reduce(self.base_ring.mul(s, quo)))
    }
}

impl<R> FiniteRing for QuotientRingBase<R>
    where R: RingStore, R::Type: ResidueSystemRing
{
    type ElementsIter<'a> = std::vec::IntoIter<El<R>>
        where Self: 'a;

    fn elements<'a>(&'a self) -> Self::ElementsIter<'a> {
        self.base_ring.get_ring().residue_system(&self.modulus).into_iter()
    }

    fn random_element<G: FnMut() -> u64>(&self, rng: G) -> Self::Element {
        self.base_ring.get_ring().random_residue(&self.modulus, rng)
    }

    fn size<I>(&self, ZZ: &I) -> Option<El<I>>
        where I: IntegerRingStore, I::Type: IntegerRing
    {
        self.base_ring.get_ring().residue_count(&self.modulus, ZZ)
    }
}

impl<R> HashableElRing for QuotientRingBase<R>
    where R: RingStore, R::Type: ResidueSystemRing + OrderedRing + HashableElRing
{
    fn hash<H: std::hash::Hasher>(&self, el: &Self::Element, h: &mut H) {
        // hash the canonical representative, since euclidean remainders
        // of equal residue classes may differ in sign
        let lift = self.smallest_positive_lift(self.base_ring.clone_el(el));
        self.base_ring.get_ring().hash(&lift, h)
    }
}

///
/// A memoizing factory for quotients of a fixed base ring.
///
/// Quotient rings created through the same cache from equal ideals are
/// shared, so that elements of "the same" quotient always see a single ring
/// object. This cache is not synchronized and must stay within one thread.
///
/// # Example
/// ```
/// # use polyfactor::ring::*;
/// # use polyfactor::ideal::Ideal;
/// # use polyfactor::rings::quotient::*;
/// # use polyfactor::primitive_int::*;
/// let ZZ = StaticRing::<i64>::RING;
/// let cache = QuotientCache::new(ZZ);
/// let fst = cache.quotient(&Ideal::new(ZZ, vec![10, 15]).unwrap()).unwrap();
/// let snd = cache.quotient(&Ideal::new(ZZ, vec![5]).unwrap()).unwrap();
/// assert!(std::rc::Rc::ptr_eq(&fst, &snd));
/// ```
///
pub struct QuotientCache<R>
    where R: RingStore + Clone, R::Type: ResidueSystemRing
{
    base_ring: R,
    cache: RefCell<Vec<Rc<QuotientRing<R>>>>
}

impl<R> QuotientCache<R>
    where R: RingStore + Clone, R::Type: ResidueSystemRing
{
    pub fn new(base_ring: R) -> Self {
        QuotientCache {
            base_ring,
            cache: RefCell::new(Vec::new())
        }
    }

    pub fn base_ring(&self) -> &R {
        &self.base_ring
    }

    ///
    /// Returns the quotient of the base ring by the given ideal, reusing an
    /// already-constructed quotient if one exists for an equal ideal.
    ///
    pub fn quotient(&self, ideal: &Ideal<R>) -> Result<Rc<QuotientRing<R>>, AlgebraError> {
        if ideal.ring().get_ring() != self.base_ring.get_ring() {
            return Err(AlgebraError::DomainMismatch);
        } else if ideal.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        let mut cache = self.cache.borrow_mut();
        for entry in cache.iter() {
            let modulus = entry.get_ring().modulus();
            if self.base_ring.divides(modulus, ideal.generator()) && self.base_ring.divides(ideal.generator(), modulus) {
                return Ok(Rc::clone(entry));
            }
        }
        let created = Rc::new(QuotientRing::new(self.base_ring.clone(), self.base_ring.clone_el(ideal.generator())));
        cache.push(Rc::clone(&created));
        return Ok(created);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive_int::StaticRing;

    #[test]
    fn test_ring_axioms() {
        let ring = QuotientRing::new(StaticRing::<i64>::RING, 6);
        crate::ring::generic_tests::test_ring_axioms(&ring, (-3..7).map(|x| ring.from_int(x)));
    }

    #[test]
    fn test_divisibility_axioms() {
        let ring = QuotientRing::new(StaticRing::<i64>::RING, 9);
        crate::divisibility::generic_tests::test_divisibility_axioms(&ring, (0..9).map(|x| ring.from_int(x)));
    }

    #[test]
    fn test_finite_ring_axioms() {
        crate::finite::generic_tests::test_finite_ring_axioms(&QuotientRing::new(StaticRing::<i64>::RING, 6));
        crate::finite::generic_tests::test_finite_ring_axioms(&QuotientRing::new(StaticRing::<i64>::RING, 7));
        crate::finite::generic_tests::test_finite_ring_axioms(&QuotientRing::new(StaticRing::<i64>::RING, 1));
    }

    #[test]
    fn test_eq_el_noncanonical_representatives() {
        let ring = QuotientRing::new(StaticRing::<i64>::RING, 7);
        // -1 and 6 represent the same residue class
        assert!(ring.eq_el(&-1, &6));
        assert!(ring.is_zero(&-7));
        assert!(!ring.eq_el(&-1, &1));
    }

    #[test]
    fn test_checked_left_div() {
        let ring = QuotientRing::new(StaticRing::<i64>::RING, 8);
        let quo = ring.checked_left_div(&6, &2);
        assert!(quo.is_some());
        assert_el_eq!(&ring, &6, &ring.mul(quo.unwrap(), 2));
        // 2 * x is always even mod 8
        assert!(ring.checked_left_div(&5, &2).is_none());
        assert!(ring.invert(&3).is_some());
        assert!(ring.invert(&4).is_none());
    }

    #[test]
    fn test_characteristic() {
        let ring = QuotientRing::new(StaticRing::<i64>::RING, 12);
        assert_eq!(Some(12), ring.characteristic(&StaticRing::<i64>::RING));
    }

    #[test]
    fn test_smallest_lift() {
        let ring = QuotientRing::new(StaticRing::<i64>::RING, 7);
        assert_eq!(5, ring.get_ring().smallest_positive_lift(-2));
        assert_eq!(-2, ring.get_ring().smallest_lift(5));
        assert_eq!(3, ring.get_ring().smallest_lift(3));
        assert_eq!(0, ring.get_ring().smallest_positive_lift(14));
    }

    #[test]
    fn test_as_field() {
        assert!(QuotientRing::new(StaticRing::<i64>::RING, 7).as_field().is_ok());
        assert!(QuotientRing::new(StaticRing::<i64>::RING, 6).as_field().is_err());
    }

    #[test]
    fn test_quotient_cache_deduplicates() {
        let ZZ = StaticRing::<i64>::RING;
        let cache = QuotientCache::new(ZZ);
        let fst = cache.quotient(&Ideal::new(ZZ, vec![4, 6]).unwrap()).unwrap();
        let snd = cache.quotient(&Ideal::new(ZZ, vec![-2]).unwrap()).unwrap();
        let other = cache.quotient(&Ideal::new(ZZ, vec![3]).unwrap()).unwrap();
        assert!(Rc::ptr_eq(&fst, &snd));
        assert!(!Rc::ptr_eq(&fst, &other));
        assert_el_eq!(&*fst, &fst.from_int(1), &fst.from_int(3));
    }

    #[test]
    fn test_quotient_cache_rejects_zero_ideal() {
        let ZZ = StaticRing::<i64>::RING;
        let cache = QuotientCache::new(ZZ);
        let zero_ideal = Ideal::new(ZZ, vec![0]).unwrap();
        assert_eq!(Err(AlgebraError::DivisionByZero), cache.quotient(&zero_ideal).map(|_| ()));
    }
}
