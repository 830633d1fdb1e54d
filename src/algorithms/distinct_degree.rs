use crate::algorithms;
use crate::algorithms::poly_pow::pow_mod_f;
use crate::algorithms::squarefree::make_monic;
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
/// Computes the distinct-degree factorization of a squarefree polynomial
/// over a finite field, i.e. splits `f` into the products `f_d` of all its
/// monic irreducible factors of degree `d`. The result maps each degree `d`
/// with `f_d != 1` to `f_d`, and the product of all `f_d` is `f / lc(f)`.
///
/// Since `X^(q^d) - X` is the product of all monic irreducible polynomials
/// of degree dividing `d`, the factor `f_d` can be extracted as
/// `gcd(f, X^(q^d) - X)` once all factors of smaller degree have been
/// removed. The power `X^(q^d)` is computed modulo `f` by iterating the
/// Frobenius.
///
#[instrument(skip_all, level = "debug")]
pub fn distinct_degree_factorization<P>(poly_ring: P, f: &El<P>) -> BTreeMap<usize, El<P>>
    where P: PolyRingStore + Copy,
        P::Type: PolyRing + EuclideanRing,
        <BaseRing<P> as RingStore>::Type: Field + FiniteRing
{
    assert!(poly_ring.degree(f).unwrap_or(0) >= 1);
    let ZZ = StaticRing::<i128>::RING;
    let q = poly_ring.base_ring().size(&ZZ).unwrap();

    let mut remaining = make_monic(poly_ring, poly_ring.clone_el(f));
    let mut result = BTreeMap::new();
    let mut x_power = poly_ring.indeterminate();
    let mut d = 0;
    while poly_ring.degree(&remaining).unwrap() > 0 {
        d += 1;
        if 2 * d > poly_ring.degree(&remaining).unwrap() {
            // no remaining factor has degree <= deg/2, so the rest is irreducible
            let deg = poly_ring.degree(&remaining).unwrap();
            result.insert(deg, remaining);
            return result;
        }
        x_power = pow_mod_f(poly_ring, x_power, &remaining, &q, ZZ);
        let diff = poly_ring.sub_ref_snd(poly_ring.clone_el(&x_power), &poly_ring.indeterminate());
        let factor = make_monic(poly_ring, algorithms::eea::gcd(poly_ring.clone_el(&remaining), diff, poly_ring));
        if poly_ring.degree(&factor).unwrap() > 0 {
            remaining = poly_ring.checked_div(&remaining, &factor).unwrap();
            x_power = poly_ring.euclidean_rem(x_power, &remaining);
            result.insert(d, factor);
        }
    }
    return result;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive_int::StaticRing;
    use crate::rings::poly::dense_poly::DensePolyRing;
    use crate::rings::zn::{Fp, Zn};

    fn fp(p: i128) -> Fp {
        Zn::new(StaticRing::<i128>::RING, p).as_field().ok().unwrap()
    }

    #[test]
    fn test_distinct_degree_factorization_f2() {
        let poly_ring = DensePolyRing::new(fp(2), "X");
        let one = || poly_ring.base_ring().one();
        // x^5 + x^4 + 1 = (x^2 + x + 1)(x^3 + x + 1) over F2
        let f = poly_ring.from_terms([(one(), 0), (one(), 4), (one(), 5)].into_iter());
        let result = distinct_degree_factorization(&poly_ring, &f);
        assert_eq!(2, result.len());
        let deg2 = poly_ring.from_terms([(one(), 0), (one(), 1), (one(), 2)].into_iter());
        let deg3 = poly_ring.from_terms([(one(), 0), (one(), 1), (one(), 3)].into_iter());
        assert_el_eq!(&poly_ring, &deg2, result.get(&2).unwrap());
        assert_el_eq!(&poly_ring, &deg3, result.get(&3).unwrap());
    }

    #[test]
    fn test_distinct_degree_factorization_linear_factors() {
        let poly_ring = DensePolyRing::new(fp(5), "X");
        // x^5 - x is the product of all linear polynomials over F5
        let f = poly_ring.from_terms([(4, 1), (1, 5)].into_iter());
        let result = distinct_degree_factorization(&poly_ring, &f);
        assert_eq!(1, result.len());
        assert_el_eq!(&poly_ring, &f, result.get(&1).unwrap());
    }

    #[test]
    fn test_distinct_degree_factorization_irreducible() {
        let poly_ring = DensePolyRing::new(fp(7), "X");
        let f = poly_ring.from_terms([(1, 0), (1, 2)].into_iter());
        let result = distinct_degree_factorization(&poly_ring, &f);
        assert_eq!(1, result.len());
        assert_el_eq!(&poly_ring, &f, result.get(&2).unwrap());
    }

    #[test]
    fn test_distinct_degree_factorization_mixed() {
        let poly_ring = DensePolyRing::new(fp(3), "X");
        let linear = poly_ring.from_terms([(1, 0), (1, 1)].into_iter());
        let quadratic = poly_ring.from_terms([(1, 0), (1, 2)].into_iter());
        let f = poly_ring.mul_ref(&linear, &quadratic);
        let result = distinct_degree_factorization(&poly_ring, &f);
        assert_eq!(2, result.len());
        assert_el_eq!(&poly_ring, &linear, result.get(&1).unwrap());
        assert_el_eq!(&poly_ring, &quadratic, result.get(&2).unwrap());
    }
}
