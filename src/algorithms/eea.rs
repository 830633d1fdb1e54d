use crate::pid::*;
use crate::ordered::{OrderedRingStore, OrderedRing};
use crate::ring::*;

use std::mem::swap;
use std::cmp::Ordering;

///
/// Runs the extended euclidean algorithm on `fst` and `snd`, producing
/// Bezout coefficients `s, t` and a greatest common divisor `d` with
/// `d == s * fst + t * snd`.
///
/// `d` is unique only up to multiplication by units, and the Bezout
/// coefficients are not unique at all; no particular representative is
/// promised. Over the integers, [`signed_eea()`] pins down the sign of `d`.
///
pub fn eea<R>(fst: El<R>, snd: El<R>, ring: R) -> (El<R>, El<R>, El<R>)
    where R: EuclideanRingStore,
        R::Type: EuclideanRing
{
    // each row (r, s, t) satisfies r == s * fst + t * snd; a euclidean step
    // subtracts quo times the second row from the first and swaps them
    let mut row1 = (fst, ring.one(), ring.zero());
    let mut row2 = (snd, ring.zero(), ring.one());

    while !ring.is_zero(&row2.0) {
        let (quo, rem) = ring.euclidean_div_rem(row1.0, &row2.0);
        row1.0 = rem;
        row1.1 = ring.sub(row1.1, ring.mul_ref(&quo, &row2.1));
        row1.2 = ring.sub(row1.2, ring.mul_ref(&quo, &row2.2));
        swap(&mut row1, &mut row2);
    }
    let (d, s, t) = row1;
    return (s, t, d);
}

///
/// [`eea()`] over an ordered euclidean ring, with the ambiguity in the
/// result resolved: the returned gcd carries the sign of `fst`, and for
/// `fst == 0` it is `snd` made nonnegative.
///
/// In particular:
/// ```
/// # use polyfactor::algorithms::eea::signed_gcd;
/// # use polyfactor::primitive_int::*;
/// assert_eq!(2, signed_gcd(6, 8, &StaticRing::<i64>::RING));
/// assert_eq!(0, signed_gcd(0, 0, &StaticRing::<i64>::RING));
/// assert_eq!(5, signed_gcd(0, -5, &StaticRing::<i64>::RING));
/// assert_eq!(-5, signed_gcd(-5, 0, &StaticRing::<i64>::RING));
/// assert_eq!(-1, signed_gcd(-1, 1, &StaticRing::<i64>::RING));
/// assert_eq!(1, signed_gcd(1, -1, &StaticRing::<i64>::RING));
/// ```
///
pub fn signed_eea<R>(fst: El<R>, snd: El<R>, ring: R) -> (El<R>, El<R>, El<R>)
    where R: EuclideanRingStore + OrderedRingStore,
        R::Type: EuclideanRing + OrderedRing
{
    if ring.is_zero(&fst) {
        return match ring.cmp(&snd, &ring.zero()) {
            Ordering::Equal => (ring.zero(), ring.zero(), ring.zero()),
            Ordering::Less => (ring.zero(), ring.negate(ring.one()), ring.negate(snd)),
            Ordering::Greater => (ring.zero(), ring.one(), snd)
        };
    }
    let fst_sign = ring.cmp(&fst, &ring.zero());

    let (s, t, d) = eea(fst, snd, &ring);

    // eea makes no promise about the sign of d, so align it with fst here
    if ring.cmp(&d, &ring.zero()) == fst_sign {
        return (s, t, d);
    } else {
        return (ring.negate(s), ring.negate(t), ring.negate(d));
    }
}

///
/// Finds a greatest common divisor of `a` and `b`, i.e. a common divisor
/// that every other common divisor divides. As with [`eea()`], the result
/// is only unique up to multiplication by units; over the integers,
/// [`signed_gcd()`] resolves the ambiguity.
///
pub fn gcd<R>(a: El<R>, b: El<R>, ring: R) -> El<R>
    where R: EuclideanRingStore,
        R::Type: EuclideanRing
{
    let (_, _, d) = eea(a, b, ring);
    return d;
}

///
/// Finds a greatest common divisor of arbitrarily many elements, by folding
/// [`gcd()`] pairwise. The gcd of the empty sequence is zero.
///
pub fn gcd_many<R, I>(elements: I, ring: R) -> El<R>
    where R: EuclideanRingStore + Copy,
        R::Type: EuclideanRing,
        I: Iterator<Item = El<R>>
{
    elements.fold(ring.zero(), |a, b| gcd(a, b, ring))
}

///
/// [`gcd()`] with the sign convention of [`signed_eea()`]: the result
/// carries the sign of `a` (for `a != 0`), the sign of `b` plays no role,
/// and `signed_gcd(0, b)` is the absolute value of `b`.
///
pub fn signed_gcd<R>(a: El<R>, b: El<R>, ring: R) -> El<R>
    where R: EuclideanRingStore + OrderedRingStore,
        R::Type: EuclideanRing + OrderedRing
{
    let (_, _, d) = signed_eea(a, b, ring);
    return d;
}

#[cfg(test)]
use crate::primitive_int::*;

#[test]
fn test_gcd() {
    assert_eq!(3, signed_gcd(15, 6, &StaticRing::<i64>::RING));
    assert_eq!(3, signed_gcd(6, 15, &StaticRing::<i64>::RING));

    assert_eq!(7, signed_gcd(0, 7, &StaticRing::<i64>::RING));
    assert_eq!(7, signed_gcd(7, 0, &StaticRing::<i64>::RING));
    assert_eq!(0, signed_gcd(0, 0, &StaticRing::<i64>::RING));

    assert_eq!(1, signed_gcd(9, 1, &StaticRing::<i64>::RING));
    assert_eq!(1, signed_gcd(1, 9, &StaticRing::<i64>::RING));

    assert_eq!(1, signed_gcd(13, 300, &StaticRing::<i64>::RING));
    assert_eq!(1, signed_gcd(300, 13, &StaticRing::<i64>::RING));

    assert_eq!(-3, signed_gcd(-15, 6, &StaticRing::<i64>::RING));
    assert_eq!(3, signed_gcd(6, -15, &StaticRing::<i64>::RING));
    assert_eq!(-3, signed_gcd(-6, -15, &StaticRing::<i64>::RING));
}

#[test]
fn test_gcd_many() {
    let ring = StaticRing::<i64>::RING;
    assert_eq!(6, gcd_many([12, 18, 30].into_iter(), &ring).abs());
    assert_eq!(0, gcd_many(std::iter::empty(), &ring));
    assert_eq!(7, gcd_many([7].into_iter(), &ring).abs());
}

#[test]
fn test_eea_sign() {
    assert_eq!((2, -1, 1), signed_eea(3, 5, &StaticRing::<i64>::RING));
    assert_eq!((-1, 2, 1), signed_eea(5, 3, &StaticRing::<i64>::RING));
    assert_eq!((2, 1, -1), signed_eea(-3, 5, &StaticRing::<i64>::RING));
    assert_eq!((-1, -2, 1), signed_eea(5, -3, &StaticRing::<i64>::RING));
    assert_eq!((2, 1, 1), signed_eea(3, -5, &StaticRing::<i64>::RING));
    assert_eq!((-1, -2, -1), signed_eea(-5, 3, &StaticRing::<i64>::RING));
    assert_eq!((2, -1, -1), signed_eea(-3, -5, &StaticRing::<i64>::RING));
    assert_eq!((-1, 2, -1), signed_eea(-5, -3, &StaticRing::<i64>::RING));
    assert_eq!((0, 0, 0), signed_eea(0, 0, &StaticRing::<i64>::RING));
    assert_eq!((1, 0, 4), signed_eea(4, 0, &StaticRing::<i64>::RING));
    assert_eq!((0, 1, 4), signed_eea(0, 4, &StaticRing::<i64>::RING));
    assert_eq!((1, 0, -4), signed_eea(-4, 0, &StaticRing::<i64>::RING));
    assert_eq!((0, -1, 4), signed_eea(0, -4, &StaticRing::<i64>::RING));
}

#[test]
fn test_signed_eea() {
    assert_eq!((-1, 1, 2), signed_eea(6, 8, &StaticRing::<i64>::RING));
    assert_eq!((2, -1, 5), signed_eea(15, 25, &StaticRing::<i64>::RING));
    assert_eq!((4, -7, 2), signed_eea(32, 18, &StaticRing::<i64>::RING));
}

#[test]
fn test_eea_bezout_property() {
    let ring = StaticRing::<i64>::RING;
    for a in [0, 1, -1, 6, -6, 15, 32, 100, 97] {
        for b in [0, 1, -1, 8, -15, 18, 25, 13] {
            let (s, t, d) = signed_eea(a, b, &ring);
            assert_eq!(d, s * a + t * b);
            if d != 0 {
                assert_eq!(0, a % d);
                assert_eq!(0, b % d);
            }
        }
    }
}
