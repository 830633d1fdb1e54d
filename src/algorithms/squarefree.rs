use crate::algorithms;
use crate::divisibility::*;
use crate::field::Field;
use crate::finite::{FiniteRing, FiniteRingStore};
use crate::pid::*;
use crate::primitive_int::StaticRing;
use crate::ring::*;
use crate::rings::poly::*;

use std::collections::BTreeMap;

use tracing::instrument;

///
/// Computes the squarefree decomposition of a nonconstant polynomial over a
/// finite field, i.e. the monic squarefree pairwise coprime polynomials
/// `g_m` such that `f = lc(f) * prod_m g_m^m`. The result maps each
/// multiplicity `m` to `g_m`; multiplicities with `g_m = 1` are omitted.
///
/// This uses Yun's algorithm, adapted to positive characteristic: whenever
/// the derivative of the remaining polynomial vanishes, that polynomial is a
/// `p`-th power, and its `p`-th root is computed coefficient-wise via the
/// inverse of the Frobenius before descending with all multiplicities
/// scaled by `p`.
///
#[instrument(skip_all, level = "debug")]
pub fn squarefree_decomposition<P>(poly_ring: P, f: &El<P>) -> BTreeMap<usize, El<P>>
    where P: PolyRingStore + Copy,
        P::Type: PolyRing + EuclideanRing,
        <BaseRing<P> as RingStore>::Type: Field + FiniteRing
{
    assert!(poly_ring.degree(f).unwrap_or(0) >= 1);
    let mut result = BTreeMap::new();
    yun_decomposition(poly_ring, make_monic(poly_ring, poly_ring.clone_el(f)), 1, &mut result);
    return result;
}

fn yun_decomposition<P>(poly_ring: P, f: El<P>, multiplicity: usize, result: &mut BTreeMap<usize, El<P>>)
    where P: PolyRingStore + Copy,
        P::Type: PolyRing + EuclideanRing,
        <BaseRing<P> as RingStore>::Type: Field + FiniteRing
{
    let derivative = derive_poly(poly_ring, &f);
    if poly_ring.is_zero(&derivative) {
        let p = characteristic(poly_ring);
        yun_decomposition(poly_ring, characteristic_root(poly_ring, &f), multiplicity * p, result);
        return;
    }

    let mut c = make_monic(poly_ring, algorithms::eea::gcd(poly_ring.clone_el(&f), derivative, poly_ring));
    let mut w = poly_ring.checked_div(&f, &c).unwrap();
    let mut i = 1;
    while poly_ring.degree(&w) != Some(0) {
        let y = make_monic(poly_ring, algorithms::eea::gcd(poly_ring.clone_el(&w), poly_ring.clone_el(&c), poly_ring));
        let z = poly_ring.checked_div(&w, &y).unwrap();
        if poly_ring.degree(&z).unwrap() > 0 {
            result.insert(i * multiplicity, z);
        }
        c = poly_ring.checked_div(&c, &y).unwrap();
        w = y;
        i += 1;
    }
    // what remains of c are exactly the factors whose multiplicity is
    // divisible by the characteristic, at their full multiplicity
    if poly_ring.degree(&c).unwrap() > 0 {
        let p = characteristic(poly_ring);
        yun_decomposition(poly_ring, characteristic_root(poly_ring, &c), multiplicity * p, result);
    }
}

///
/// Computes the `p`-th root of a polynomial whose derivative vanishes, `p`
/// being the characteristic of the coefficient field. Such a polynomial has
/// nonzero coefficients only at degrees divisible by `p`, and since the
/// field is finite (hence perfect), each coefficient has the unique `p`-th
/// root `c^(q/p)`.
///
fn characteristic_root<P>(poly_ring: P, f: &El<P>) -> El<P>
    where P: PolyRingStore + Copy,
        P::Type: PolyRing,
        <BaseRing<P> as RingStore>::Type: Field + FiniteRing
{
    let base_ring = poly_ring.base_ring();
    let ZZ = StaticRing::<i128>::RING;
    let p = characteristic(poly_ring);
    let exp = ZZ.checked_div(&base_ring.size(&ZZ).unwrap(), &(p as i128)).unwrap();
    poly_ring.from_terms(poly_ring.terms(f).map(|(c, i)| {
        debug_assert!(i % p == 0);
        let root = algorithms::sqr_mul::generic_abs_square_and_multiply(
            base_ring.clone_el(c),
            &exp,
            ZZ,
            |mut a| { base_ring.square(&mut a); a },
            |a, b| base_ring.mul_ref_fst(a, b),
            base_ring.one()
        );
        (root, i / p)
    }))
}

fn characteristic<P>(poly_ring: P) -> usize
    where P: PolyRingStore,
        P::Type: PolyRing,
        <BaseRing<P> as RingStore>::Type: Field + FiniteRing
{
    let p = poly_ring.base_ring().characteristic(&StaticRing::<i128>::RING).unwrap();
    usize::try_from(p).unwrap()
}

pub(super) fn make_monic<P>(poly_ring: P, mut f: El<P>) -> El<P>
    where P: PolyRingStore,
        P::Type: PolyRing,
        <BaseRing<P> as RingStore>::Type: Field
{
    if let Some(lc) = poly_ring.lc(&f) {
        let lc_inv = poly_ring.base_ring().invert(lc).unwrap();
        poly_ring.get_ring().mul_assign_base(&mut f, &lc_inv);
    }
    return f;
}
