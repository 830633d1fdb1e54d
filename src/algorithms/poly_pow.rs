use crate::algorithms;
use crate::integer::{IntegerRing, IntegerRingStore};
use crate::ordered::OrderedRingStore;
use crate::pid::*;
use crate::ring::*;
use crate::rings::poly::*;

///
/// Computes `g^pow mod f`, i.e. the power of `g` in the ring `R[X]/(f)`.
///
/// Reducing modulo `f` after every multiplication keeps all intermediate
/// degrees below `deg(f)`, which is essential since `pow` is typically of
/// the order of the size of the coefficient field.
///
pub fn pow_mod_f<P, I>(poly_ring: P, g: El<P>, f: &El<P>, pow: &El<I>, ZZ: I) -> El<P>
    where P: PolyRingStore,
        P::Type: PolyRing + EuclideanRing,
        I: IntegerRingStore,
        I::Type: IntegerRing
{
    assert!(!ZZ.is_neg(pow));
    return algorithms::sqr_mul::generic_abs_square_and_multiply(
        g,
        pow,
        ZZ,
        |a| poly_ring.euclidean_rem(poly_ring.pow(a, 2), f),
        |a, b| poly_ring.euclidean_rem(poly_ring.mul_ref_fst(a, b), f),
        poly_ring.one()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive_int::StaticRing;
    use crate::rings::poly::dense_poly::DensePolyRing;
    use crate::rings::zn::Zn;

    #[test]
    fn test_pow_mod_f() {
        let F17 = Zn::new(StaticRing::<i128>::RING, 17).as_field().ok().unwrap();
        let poly_ring = DensePolyRing::new(F17, "X");
        // f = X^2 + 1, so X^2 = -1 and X^16 = 1 mod f
        let f = poly_ring.from_terms([(1, 0), (1, 2)].into_iter());
        let x = poly_ring.indeterminate();
        assert_el_eq!(&poly_ring, &poly_ring.neg_one(), &pow_mod_f(&poly_ring, poly_ring.clone_el(&x), &f, &2, StaticRing::<i64>::RING));
        assert_el_eq!(&poly_ring, &poly_ring.one(), &pow_mod_f(&poly_ring, poly_ring.clone_el(&x), &f, &16, StaticRing::<i64>::RING));
        assert_el_eq!(&poly_ring, &x, &pow_mod_f(&poly_ring, poly_ring.clone_el(&x), &f, &17, StaticRing::<i64>::RING));
    }
}
