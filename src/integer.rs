use crate::ring::*;
use crate::divisibility::*;
use crate::ordered::*;
use crate::pid::*;

///
/// Trait for rings that represent the integers ZZ, possibly with a
/// restricted range of representable values.
///
/// Elements can be inspected on bit level via the `abs_*` functions, which
/// all refer to the binary representation of the absolute value of an
/// element. Conversion between different integer rings goes through `i128`,
/// see [`int_cast()`].
///
pub trait IntegerRing: EuclideanRing + OrderedRing + HashableElRing + Domain {

    fn abs_is_bit_set(&self, value: &Self::Element, i: usize) -> bool;
    fn abs_highest_set_bit(&self, value: &Self::Element) -> Option<usize>;
    fn abs_lowest_set_bit(&self, value: &Self::Element) -> Option<usize>;

    ///
    /// Computes the euclidean division by `2^power`, i.e. rounding the
    /// quotient towards zero.
    ///
    fn euclidean_div_pow_2(&self, value: &mut Self::Element, power: usize);
    fn mul_pow_2(&self, value: &mut Self::Element, power: usize);

    fn to_i128(&self, value: &Self::Element) -> i128;
    fn from_i128(&self, value: i128) -> Self::Element;

    ///
    /// If the ring only represents a finite range of the integers, returns
    /// the largest `b` such that all integers of absolute value less than
    /// `2^b` are representable. `None` means the range is unbounded.
    ///
    fn representable_bits(&self) -> Option<usize>;

    ///
    /// Returns a uniformly random element from `{ 0, ..., 2^log2_bound_exclusive - 1 }`,
    /// where the randomness is derived from the given `u64`-source.
    ///
    fn get_uniformly_random_bits<G: FnMut() -> u64>(&self, log2_bound_exclusive: usize, rng: G) -> Self::Element;
}

///
/// Maps an element between two (possibly different) implementations of the
/// integers. Panics if the value is not representable in the target ring.
///
pub fn int_cast<T, F>(value: El<F>, to: &T, from: &F) -> El<T>
    where T: IntegerRingStore, T::Type: IntegerRing,
        F: IntegerRingStore, F::Type: IntegerRing
{
    to.get_ring().from_i128(from.get_ring().to_i128(&value))
}

///
/// [`RingStore`] for [`IntegerRing`]s
///
pub trait IntegerRingStore: RingStore
    where Self::Type: IntegerRing
{
    delegate!{ fn abs_is_bit_set(&self, value: &El<Self>, i: usize) -> bool }
    delegate!{ fn abs_highest_set_bit(&self, value: &El<Self>) -> Option<usize> }
    delegate!{ fn abs_lowest_set_bit(&self, value: &El<Self>) -> Option<usize> }
    delegate!{ fn euclidean_div_pow_2(&self, value: &mut El<Self>, power: usize) -> () }
    delegate!{ fn mul_pow_2(&self, value: &mut El<Self>, power: usize) -> () }

    fn is_even(&self, value: &El<Self>) -> bool {
        !self.get_ring().abs_is_bit_set(value, 0)
    }

    fn is_odd(&self, value: &El<Self>) -> bool {
        !self.is_even(value)
    }

    fn half_exact(&self, mut value: El<Self>) -> El<Self> {
        assert!(self.is_even(&value));
        self.euclidean_div_pow_2(&mut value, 1);
        return value;
    }

    fn abs_log2_floor(&self, value: &El<Self>) -> Option<usize> {
        self.abs_highest_set_bit(value)
    }

    fn abs_log2_ceil(&self, value: &El<Self>) -> Option<usize> {
        let highest_bit = self.abs_highest_set_bit(value)?;
        if self.abs_lowest_set_bit(value) == Some(highest_bit) {
            Some(highest_bit)
        } else {
            Some(highest_bit + 1)
        }
    }

    fn power_of_two(&self, power: usize) -> El<Self> {
        let mut result = self.one();
        self.mul_pow_2(&mut result, power);
        return result;
    }

    ///
    /// Returns a uniformly random element from `{ 0, ..., bound_exclusive - 1 }`,
    /// via rejection sampling on top of [`IntegerRing::get_uniformly_random_bits()`].
    ///
    fn get_uniformly_random<G: FnMut() -> u64>(&self, bound_exclusive: &El<Self>, mut rng: G) -> El<Self> {
        assert!(self.is_pos(bound_exclusive));
        let log2_bound = self.abs_log2_ceil(bound_exclusive).unwrap();
        let mut result = self.get_ring().get_uniformly_random_bits(log2_bound, &mut rng);
        while self.is_geq(&result, bound_exclusive) {
            result = self.get_ring().get_uniformly_random_bits(log2_bound, &mut rng);
        }
        return result;
    }
}

impl<R> IntegerRingStore for R
    where R: RingStore,
        R::Type: IntegerRing
{}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {
    use super::*;

    pub fn test_integer_axioms<R: IntegerRingStore, I: Iterator<Item = El<R>>>(ring: R, edge_case_elements: I)
        where R::Type: IntegerRing
    {
        let elements = edge_case_elements.collect::<Vec<_>>();

        // bitshifts must be consistent with multiplication and euclidean division
        for a in &elements {
            for i in 0..4 {
                let mut shifted = ring.clone_el(a);
                ring.mul_pow_2(&mut shifted, i);
                assert_el_eq!(&ring, &shifted, &ring.mul_ref_snd(ring.power_of_two(i), a));
                ring.euclidean_div_pow_2(&mut shifted, i);
                assert_el_eq!(&ring, a, &shifted);
            }
        }

        // `2^log2_floor <= |a| < 2^(log2_floor + 1)` and `|a| <= 2^log2_ceil`
        for a in &elements {
            if ring.is_zero(a) {
                assert_eq!(None, ring.abs_log2_floor(a));
                assert_eq!(None, ring.abs_log2_ceil(a));
                continue;
            }
            let abs_a = ring.abs(ring.clone_el(a));
            let log2_floor = ring.abs_log2_floor(a).unwrap();
            let log2_ceil = ring.abs_log2_ceil(a).unwrap();
            assert!(ring.is_geq(&abs_a, &ring.power_of_two(log2_floor)));
            assert!(ring.is_lt(&abs_a, &ring.power_of_two(log2_floor + 1)));
            assert!(ring.is_leq(&abs_a, &ring.power_of_two(log2_ceil)));
        }

        // parity must match divisibility by 2
        for a in &elements {
            assert_eq!(ring.is_even(a), ring.divides(a, &ring.from_int(2)));
            if ring.is_even(a) {
                assert_el_eq!(&ring, a, &ring.mul_int_ref(&ring.half_exact(ring.clone_el(a)), 2));
            }
        }

        // conversion through i128 is the identity
        for a in &elements {
            assert_el_eq!(&ring, a, &ring.get_ring().from_i128(ring.get_ring().to_i128(a)));
        }
    }
}
