use crate::divisibility::*;
use crate::field::Field;
use crate::finite::{FiniteRing, FiniteRingStore};
use crate::integer::{IntegerRing, IntegerRingStore};
use crate::pid::*;
use crate::ring::*;

///
/// A wrapper around a ring that marks it as a field, i.e. provides an
/// implementation of [`Field`] and the implied traits.
///
/// The wrapped ring must mathematically be a field, which the constructor
/// [`AsFieldBase::promise_is_field()`] cannot check. It is up to the caller
/// to guarantee this, e.g. by checking that the modulus of a quotient ring
/// is prime (see [`crate::rings::quotient::QuotientRing::as_field()`]).
///
pub struct AsFieldBase<R: RingStore> {
    base: R
}

///
/// A ring wrapped as a field, see [`AsFieldBase`].
///
pub type AsField<R> = RingValue<AsFieldBase<R>>;

impl<R> AsFieldBase<R>
    where R: RingStore, R::Type: DivisibilityRing
{
    ///
    /// Wraps the given ring. The caller must guarantee that it is a field,
    /// i.e. commutative and with every nonzero element invertible.
    ///
    pub fn promise_is_field(base: R) -> Self {
        assert!(base.is_commutative());
        AsFieldBase { base }
    }
}

impl<R> Clone for AsFieldBase<R>
    where R: RingStore + Clone
{
    fn clone(&self) -> Self {
        AsFieldBase { base: self.base.clone() }
    }
}

impl<R> PartialEq for AsFieldBase<R>
    where R: RingStore
{
    fn eq(&self, other: &Self) -> bool {
        self.base.get_ring() == other.base.get_ring()
    }
}

impl<R> RingBase for AsFieldBase<R>
    where R: RingStore, R::Type: DivisibilityRing
{
    type Element = El<R>;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        self.base.clone_el(val)
    }

    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        self.base.add_assign_ref(lhs, rhs);
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.base.add_assign(lhs, rhs);
    }

    fn sub_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        self.base.sub_assign_ref(lhs, rhs);
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        self.base.negate_inplace(lhs);
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.base.mul_assign(lhs, rhs);
    }

    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        self.base.mul_assign_ref(lhs, rhs);
    }

    fn zero(&self) -> Self::Element {
        self.base.zero()
    }

    fn one(&self) -> Self::Element {
        self.base.one()
    }

    fn from_int(&self, value: i32) -> Self::Element {
        self.base.from_int(value)
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        self.base.eq_el(lhs, rhs)
    }

    fn is_zero(&self, value: &Self::Element) -> bool {
        self.base.is_zero(value)
    }

    fn is_one(&self, value: &Self::Element) -> bool {
        self.base.is_one(value)
    }

    fn is_commutative(&self) -> bool {
        true
    }

    fn is_noetherian(&self) -> bool {
        true
    }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        self.base.get_ring().dbg(value, out)
    }

    fn characteristic<I>(&self, ZZ: &I) -> Option<El<I>>
        where I: IntegerRingStore, I::Type: IntegerRing
    {
        self.base.get_ring().characteristic(ZZ)
    }
}

impl<R> RingExtension for AsFieldBase<R>
    where R: RingStore, R::Type: DivisibilityRing
{
    type BaseRing = R;

    fn base_ring<'a>(&'a self) -> &'a Self::BaseRing {
        &self.base
    }

    fn from(&self, x: El<Self::BaseRing>) -> Self::Element {
        x
    }
}

impl<R> DivisibilityRing for AsFieldBase<R>
    where R: RingStore, R::Type: DivisibilityRing
{
    fn checked_left_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element> {
        self.base.checked_left_div(lhs, rhs)
    }
}

impl<R> Domain for AsFieldBase<R>
    where R: RingStore, R::Type: DivisibilityRing
{}

impl<R> PrincipalIdealRing for AsFieldBase<R>
    where R: RingStore, R::Type: DivisibilityRing
{
    fn extended_ideal_gen(&self, lhs: &Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element, Self::Element) {
        // in a field, any nonzero element generates the unit ideal
        if !self.is_zero(lhs) {
            (self.one(), self.zero(), self.clone_el(lhs))
        } else if !self.is_zero(rhs) {
            (self.zero(), self.one(), self.clone_el(rhs))
        } else {
            (self.zero(), self.zero(), self.zero())
        }
    }
}

impl<R> EuclideanRing for AsFieldBase<R>
    where R: RingStore, R::Type: DivisibilityRing
{
    fn euclidean_div_rem(&self, lhs: Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element) {
        (self.div(&lhs, rhs), self.zero())
    }

    fn euclidean_deg(&self, val: &Self::Element) -> Option<usize> {
        if self.is_zero(val) {
            Some(0)
        } else {
            Some(1)
        }
    }
}

impl<R> Field for AsFieldBase<R>
    where R: RingStore, R::Type: DivisibilityRing
{}

impl<R> FiniteRing for AsFieldBase<R>
    where R: RingStore, R::Type: DivisibilityRing + FiniteRing
{
    type ElementsIter<'a> = std::vec::IntoIter<El<R>>
        where Self: 'a;

    fn elements<'a>(&'a self) -> Self::ElementsIter<'a> {
        self.base.elements().collect::<Vec<_>>().into_iter()
    }

    fn random_element<G: FnMut() -> u64>(&self, rng: G) -> Self::Element {
        self.base.random_element(rng)
    }

    fn size<I>(&self, ZZ: &I) -> Option<El<I>>
        where I: IntegerRingStore, I::Type: IntegerRing
    {
        self.base.size(ZZ)
    }
}

impl<R> HashableElRing for AsFieldBase<R>
    where R: RingStore, R::Type: DivisibilityRing + HashableElRing
{
    fn hash<H: std::hash::Hasher>(&self, el: &Self::Element, h: &mut H) {
        self.base.get_ring().hash(el, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldStore;
    use crate::primitive_int::StaticRing;
    use crate::rings::zn::Zn;

    fn fp7() -> AsField<Zn> {
        Zn::new(StaticRing::<i128>::RING, 7).as_field().ok().unwrap()
    }

    #[test]
    fn test_ring_axioms() {
        let field = fp7();
        let elements = field.elements().collect::<Vec<_>>();
        crate::ring::generic_tests::test_ring_axioms(&field, elements.into_iter());
    }

    #[test]
    fn test_euclidean_ring_axioms() {
        let field = fp7();
        let elements = field.elements().collect::<Vec<_>>();
        crate::pid::generic_tests::test_euclidean_ring_axioms(&field, elements.into_iter());
    }

    #[test]
    fn test_principal_ideal_ring_axioms() {
        let field = fp7();
        let elements = field.elements().collect::<Vec<_>>();
        crate::pid::generic_tests::test_principal_ideal_ring_axioms(&field, elements.into_iter());
    }

    #[test]
    fn test_finite_ring_axioms() {
        crate::finite::generic_tests::test_finite_ring_axioms(&fp7());
    }

    #[test]
    fn test_div() {
        let field = fp7();
        for a in field.elements() {
            if field.is_zero(&a) {
                continue;
            }
            for b in field.elements() {
                let quo = field.div(&b, &a);
                assert_el_eq!(&field, &b, &field.mul_ref_snd(quo, &a));
            }
        }
    }
}
