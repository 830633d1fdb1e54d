use std::marker::PhantomData;
use std::ops::{AddAssign, SubAssign, MulAssign, Neg, Div, Rem};
use std::fmt::Display;

use crate::ring::*;
use crate::divisibility::{DivisibilityRing, Domain};
use crate::pid::*;
use crate::ordered::{OrderedRing, OrderedRingStore};
use crate::integer::*;
use crate::algorithms;
use crate::rings::quotient::ResidueSystemRing;

///
/// Trait for the fixed-size signed machine integer types.
///
pub trait PrimitiveInt: AddAssign + SubAssign + MulAssign + Neg<Output = Self> + Eq + From<i8> + TryFrom<i32> + TryFrom<i128> + Into<i128> + Copy + Div<Self, Output = Self> + Rem<Self, Output = Self> + Display {

    fn bits() -> usize;
}

impl PrimitiveInt for i8 {
    fn bits() -> usize { Self::BITS as usize }
}

impl PrimitiveInt for i16 {
    fn bits() -> usize { Self::BITS as usize }
}

impl PrimitiveInt for i32 {
    fn bits() -> usize { Self::BITS as usize }
}

impl PrimitiveInt for i64 {
    fn bits() -> usize { Self::BITS as usize }
}

impl PrimitiveInt for i128 {
    fn bits() -> usize { Self::BITS as usize }
}

///
/// The ring of integers, with elements represented by a fixed-size machine
/// integer type. Operations that leave the representable range panic.
///
pub struct StaticRingBase<T> {
    element: PhantomData<T>
}

impl<T> PartialEq for StaticRingBase<T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T: PrimitiveInt> RingValue<StaticRingBase<T>> {
    pub const RING: StaticRing<T> = RingValue::from(StaticRingBase { element: PhantomData });
}

impl<T> Copy for StaticRingBase<T> {}

impl<T> Clone for StaticRingBase<T> {

    fn clone(&self) -> Self {
        *self
    }
}

impl<T: PrimitiveInt> RingBase for StaticRingBase<T> {

    type Element = T;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        *val
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs += rhs;
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        *lhs = -*lhs;
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs *= rhs;
    }

    fn from_int(&self, value: i32) -> Self::Element { T::try_from(value).map_err(|_| ()).unwrap() }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        *lhs == *rhs
    }

    fn is_commutative(&self) -> bool { true }
    fn is_noetherian(&self) -> bool { true }

    fn characteristic<I>(&self, ZZ: &I) -> Option<El<I>>
        where I: IntegerRingStore, I::Type: IntegerRing
    {
        Some(ZZ.zero())
    }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        write!(out, "{}", *value)
    }
}

impl<T: PrimitiveInt> DivisibilityRing for StaticRingBase<T> {

    fn checked_left_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element> {
        if self.is_zero(lhs) && self.is_zero(rhs) {
            return Some(self.zero());
        } else if self.is_zero(rhs) {
            return None;
        }
        let (div, rem) = self.euclidean_div_rem(*lhs, rhs);
        if self.is_zero(&rem) {
            return Some(div);
        } else {
            return None;
        }
    }
}

impl<T: PrimitiveInt> Domain for StaticRingBase<T> {}

impl<T: PrimitiveInt> PrincipalIdealRing for StaticRingBase<T> {

    fn extended_ideal_gen(&self, lhs: &Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element, Self::Element) {
        algorithms::eea::signed_eea(*lhs, *rhs, StaticRing::<T>::RING)
    }
}

impl<T: PrimitiveInt> EuclideanRing for StaticRingBase<T> {

    fn euclidean_div_rem(&self, lhs: Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element) {
        (lhs / *rhs, lhs % *rhs)
    }

    fn euclidean_deg(&self, val: &Self::Element) -> Option<usize> {
        Into::<i128>::into(*val).checked_abs().and_then(|x| usize::try_from(x).ok())
    }
}

impl<T: PrimitiveInt> PrimalityRing for StaticRingBase<T> {

    fn is_prime(&self, value: &Self::Element) -> bool {
        algorithms::miller_rabin::is_prime(StaticRing::<T>::RING, &RingRef::new(self).abs(*value))
    }
}

impl<T: PrimitiveInt> OrderedRing for StaticRingBase<T> {

    fn cmp(&self, lhs: &Self::Element, rhs: &Self::Element) -> std::cmp::Ordering {
        Into::<i128>::into(*lhs).cmp(&Into::<i128>::into(*rhs))
    }
}

impl<T: PrimitiveInt> HashableElRing for StaticRingBase<T> {

    fn hash<H: std::hash::Hasher>(&self, el: &Self::Element, h: &mut H) {
        h.write_i128(Into::<i128>::into(*el))
    }
}

impl<T: PrimitiveInt> IntegerRing for StaticRingBase<T> {

    fn abs_is_bit_set(&self, value: &Self::Element, i: usize) -> bool {
        match Into::<i128>::into(*value) {
            i128::MIN => i == i128::BITS as usize - 1,
            x => (x.abs() >> i) & 1 == 1
        }
    }

    fn abs_highest_set_bit(&self, value: &Self::Element) -> Option<usize> {
        match Into::<i128>::into(*value) {
            0 => None,
            i128::MIN => Some(i128::BITS as usize - 1),
            x => Some(i128::BITS as usize - x.abs().leading_zeros() as usize - 1)
        }
    }

    fn abs_lowest_set_bit(&self, value: &Self::Element) -> Option<usize> {
        match Into::<i128>::into(*value) {
            0 => None,
            i128::MIN => Some(0),
            x => Some(x.abs().trailing_zeros() as usize)
        }
    }

    fn euclidean_div_pow_2(&self, value: &mut Self::Element, power: usize) {
        *value = self.from_i128(self.to_i128(value) / (1 << power));
    }

    fn mul_pow_2(&self, value: &mut Self::Element, power: usize) {
        *value = self.from_i128(self.to_i128(value) << power);
    }

    fn to_i128(&self, value: &Self::Element) -> i128 {
        (*value).into()
    }

    fn from_i128(&self, value: i128) -> Self::Element {
        T::try_from(value).map_err(|_| ()).unwrap()
    }

    fn representable_bits(&self) -> Option<usize> {
        Some(T::bits() - 1)
    }

    fn get_uniformly_random_bits<G: FnMut() -> u64>(&self, log2_bound_exclusive: usize, mut rng: G) -> Self::Element {
        assert!(log2_bound_exclusive <= T::bits() - 1);
        self.from_i128(
            ((((rng() as u128) << u64::BITS as u32) | (rng() as u128)) & ((1 << log2_bound_exclusive) - 1)) as i128
        )
    }
}

impl<T: PrimitiveInt> ResidueSystemRing for StaticRingBase<T> {

    fn residue_system(&self, modulus: &Self::Element) -> Vec<Self::Element> {
        let n = self.to_i128(modulus).checked_abs().unwrap();
        assert!(n > 0);
        (0..n).map(|x| self.from_i128(x)).collect()
    }

    fn residue_count<I>(&self, modulus: &Self::Element, ZZ: &I) -> Option<El<I>>
        where I: IntegerRingStore, I::Type: IntegerRing
    {
        Some(ZZ.get_ring().from_i128(self.to_i128(modulus).checked_abs().unwrap()))
    }

    fn random_residue<G: FnMut() -> u64>(&self, modulus: &Self::Element, rng: G) -> Self::Element {
        let bound = RingRef::new(self).abs(*modulus);
        RingRef::new(self).get_uniformly_random(&bound, rng)
    }
}

pub type StaticRing<T> = RingValue<StaticRingBase<T>>;
