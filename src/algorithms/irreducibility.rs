use crate::algorithms;
use crate::algorithms::poly_pow::pow_mod_f;
use crate::divisibility::*;
use crate::field::Field;
use crate::finite::{FiniteRing, FiniteRingStore};
use crate::pid::*;
use crate::primitive_int::StaticRing;
use crate::ring::*;
use crate::rings::poly::*;

///
/// The Rabin irreducibility test: decides whether the given nonconstant
/// polynomial is irreducible over its finite coefficient field.
///
/// Writing `q` for the size of the coefficient field and `n = deg(f)`, the
/// polynomial `f` is irreducible if and only if `X^(q^n) = X mod f` and
/// `gcd(f, X^(q^(n/r)) - X)` is constant for every prime divisor `r` of `n`.
/// This holds since `X^(q^d) - X` is the product of all monic irreducible
/// polynomials whose degree divides `d`.
///
pub fn is_irreducible<P>(poly_ring: P, f: &El<P>) -> bool
    where P: PolyRingStore + Copy,
        P::Type: PolyRing + EuclideanRing,
        <BaseRing<P> as RingStore>::Type: Field + FiniteRing
{
    let base_ring = poly_ring.base_ring();
    let ZZ = StaticRing::<i128>::RING;
    let q = base_ring.size(&ZZ).unwrap();
    let n = poly_ring.degree(f).unwrap();
    assert!(n >= 1);
    if n == 1 {
        return true;
    }

    let lc_inv = base_ring.invert(poly_ring.lc(f).unwrap()).unwrap();
    let mut f = poly_ring.clone_el(f);
    poly_ring.get_ring().mul_assign_base(&mut f, &lc_inv);

    let x = poly_ring.indeterminate();
    // frobenius_powers[i] = X^(q^(i + 1)) mod f
    let mut frobenius_powers = Vec::with_capacity(n);
    let mut current = poly_ring.clone_el(&x);
    for _ in 0..n {
        current = pow_mod_f(poly_ring, current, &f, &q, ZZ);
        frobenius_powers.push(poly_ring.clone_el(&current));
    }

    if !poly_ring.eq_el(&frobenius_powers[n - 1], &x) {
        return false;
    }
    for r in prime_divisors(n) {
        let diff = poly_ring.sub_ref_snd(poly_ring.clone_el(&frobenius_powers[n / r - 1]), &x);
        let g = algorithms::eea::gcd(poly_ring.clone_el(&f), diff, poly_ring);
        if poly_ring.degree(&g).unwrap_or(0) > 0 {
            return false;
        }
    }
    return true;
}

fn prime_divisors(mut n: usize) -> Vec<usize> {
    let mut result = Vec::new();
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            result.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 1;
    }
    if n > 1 {
        result.push(n);
    }
    return result;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::poly::dense_poly::DensePolyRing;
    use crate::rings::zn::{Fp, Zn};

    fn fp(p: i128) -> Fp {
        Zn::new(StaticRing::<i128>::RING, p).as_field().ok().unwrap()
    }

    #[test]
    fn test_is_irreducible_f2() {
        let poly_ring = DensePolyRing::new(fp(2), "X");
        let one = || poly_ring.base_ring().one();
        let x2_x_1 = poly_ring.from_terms([(one(), 0), (one(), 1), (one(), 2)].into_iter());
        let x2_1 = poly_ring.from_terms([(one(), 0), (one(), 2)].into_iter());
        let x4_x_1 = poly_ring.from_terms([(one(), 0), (one(), 1), (one(), 4)].into_iter());
        let x4_x2_1 = poly_ring.from_terms([(one(), 0), (one(), 2), (one(), 4)].into_iter());
        assert!(is_irreducible(&poly_ring, &x2_x_1));
        assert!(!is_irreducible(&poly_ring, &x2_1));
        assert!(is_irreducible(&poly_ring, &x4_x_1));
        // (x^2 + x + 1)^2
        assert!(!is_irreducible(&poly_ring, &x4_x2_1));
    }

    #[test]
    fn test_is_irreducible_f7() {
        let poly_ring = DensePolyRing::new(fp(7), "X");
        // x^2 + 1 is irreducible mod 7 since -1 is not a square mod 7
        let f = poly_ring.from_terms([(1, 0), (1, 2)].into_iter());
        assert!(is_irreducible(&poly_ring, &f));
        // x^2 + 3x + 2 = (x + 1)(x + 2)
        let g = poly_ring.from_terms([(2, 0), (3, 1), (1, 2)].into_iter());
        assert!(!is_irreducible(&poly_ring, &g));
        // irreducibility is invariant under scaling by units
        let scaled = poly_ring.from_terms([(3, 0), (3, 2)].into_iter());
        assert!(is_irreducible(&poly_ring, &scaled));
    }

    #[test]
    fn test_is_irreducible_linear() {
        let poly_ring = DensePolyRing::new(fp(5), "X");
        let f = poly_ring.from_terms([(4, 0), (2, 1)].into_iter());
        assert!(is_irreducible(&poly_ring, &f));
    }
}
