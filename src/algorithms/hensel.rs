use crate::algorithms;
use crate::divisibility::*;
use crate::error::AlgebraError;
use crate::primitive_int::StaticRing;
use crate::ring::*;
use crate::rings::poly::dense_poly::DensePolyRing;
use crate::rings::poly::*;
use crate::rings::zn::Zn;

use tracing::instrument;

type ZZType = StaticRing<i128>;
const ZZ: ZZType = StaticRing::<i128>::RING;

///
/// Performs one quadratic Hensel step in `poly_ring = (Z/q^2 Z)[X]`: given
/// `f = g * h mod q` with `h` monic and `s * g + t * h = 1 mod q`, computes
/// `(g', h', s', t')` satisfying the same relations modulo `q^2`, with
/// `g' = g, h' = h mod q`. This is the lifting step of Zassenhaus, in the
/// formulation of von zur Gathen and Gerhard, "Modern Computer Algebra".
///
fn hensel_step(
    poly_ring: &DensePolyRing<Zn>,
    f: &El<DensePolyRing<Zn>>,
    g: &El<DensePolyRing<Zn>>,
    h: &El<DensePolyRing<Zn>>,
    s: &El<DensePolyRing<Zn>>,
    t: &El<DensePolyRing<Zn>>
) -> (El<DensePolyRing<Zn>>, El<DensePolyRing<Zn>>, El<DensePolyRing<Zn>>, El<DensePolyRing<Zn>>) {
    debug_assert!(poly_ring.base_ring().is_one(poly_ring.lc(h).unwrap()));

    let e = poly_ring.sub_ref_fst(f, poly_ring.mul_ref(g, h));
    let (quo, rem) = poly_ring.div_rem_monic(poly_ring.mul_ref(s, &e), h);
    let new_g = poly_ring.add_ref_fst(g, poly_ring.add(poly_ring.mul_ref(t, &e), poly_ring.mul_ref_snd(quo, g)));
    let new_h = poly_ring.add_ref_fst(h, rem);

    let b = poly_ring.sub(
        poly_ring.add(poly_ring.mul_ref(s, &new_g), poly_ring.mul_ref(t, &new_h)),
        poly_ring.one()
    );
    let (c, d) = poly_ring.div_rem_monic(poly_ring.mul_ref(s, &b), &new_h);
    let new_s = poly_ring.sub_ref_fst(s, d);
    let new_t = poly_ring.sub_ref_fst(t, poly_ring.add(poly_ring.mul_ref_snd(b, t), poly_ring.mul_ref_snd(c, &new_g)));

    debug_assert!(poly_ring.eq_el(f, &poly_ring.mul_ref(&new_g, &new_h)));
    debug_assert!(poly_ring.eq_el(
        &poly_ring.one(),
        &poly_ring.add(poly_ring.mul_ref(&new_s, &new_g), poly_ring.mul_ref(&new_t, &new_h))
    ));
    return (new_g, new_h, new_s, new_t);
}

fn reduce_poly(target: &DensePolyRing<Zn>, ZZX: &DensePolyRing<ZZType>, f: &El<DensePolyRing<ZZType>>) -> El<DensePolyRing<Zn>> {
    target.from_terms(ZZX.terms(f).map(|(c, i)| (*c, i)))
}

fn lift_poly(ZZX: &DensePolyRing<ZZType>, source: &DensePolyRing<Zn>, f: &El<DensePolyRing<Zn>>) -> El<DensePolyRing<ZZType>> {
    ZZX.from_terms(source.terms(f).map(|(c, i)| (source.base_ring().get_ring().smallest_positive_lift(*c), i)))
}

///
/// Given monic integer polynomials `f, g, h` with `f = g * h mod p` and
/// `g, h` coprime modulo the prime `p`, lifts the factorization to
/// `f = g' * h' mod p^(2^m)` with `g' = g, h' = h mod p`. The lifted factors
/// are monic with coefficients in `[0, p^(2^m))`, and are unique with these
/// properties.
///
/// Fails with [`AlgebraError::PrecisionExhausted`] if `p^(2^m)` does not fit
/// the internal integer type.
///
#[instrument(skip_all, level = "debug")]
pub fn hensel_lift_bifactor(
    ZZX: &DensePolyRing<ZZType>,
    f: &El<DensePolyRing<ZZType>>,
    g: &El<DensePolyRing<ZZType>>,
    h: &El<DensePolyRing<ZZType>>,
    p: i128,
    m: usize
) -> Result<(El<DensePolyRing<ZZType>>, El<DensePolyRing<ZZType>>), AlgebraError> {
    assert!(ZZX.base_ring().is_one(ZZX.lc(f).unwrap()));
    assert!(ZZX.base_ring().is_one(ZZX.lc(g).unwrap()));
    assert!(ZZX.base_ring().is_one(ZZX.lc(h).unwrap()));

    // Bezout coefficients for g, h modulo p
    let Zp = Zn::new(ZZ, p);
    let Fp = Zp.clone().as_field().ok().ok_or(AlgebraError::NotPrime(p))?;
    let FpX = DensePolyRing::new(Fp, "X");
    let g_p = FpX.from_terms(ZZX.terms(g).map(|(c, i)| (*c, i)));
    let h_p = FpX.from_terms(ZZX.terms(h).map(|(c, i)| (*c, i)));
    let (mut s_p, mut t_p, d) = algorithms::eea::eea(g_p, h_p, &FpX);
    assert!(FpX.degree(&d) == Some(0), "factors are not coprime modulo p");
    let d_inv = FpX.base_ring().invert(FpX.lc(&d).unwrap()).unwrap();
    FpX.get_ring().mul_assign_base(&mut s_p, &d_inv);
    FpX.get_ring().mul_assign_base(&mut t_p, &d_inv);

    let mut current_g = ZZX.clone_el(g);
    let mut current_h = ZZX.clone_el(h);
    let mut current_s = ZZX.from_terms(FpX.terms(&s_p).map(|(c, i)| (Zp.get_ring().smallest_positive_lift(*c), i)));
    let mut current_t = ZZX.from_terms(FpX.terms(&t_p).map(|(c, i)| (Zp.get_ring().smallest_positive_lift(*c), i)));

    let mut q = p;
    for _ in 0..m {
        q = q.checked_mul(q).ok_or(AlgebraError::PrecisionExhausted)?;
        let ZqX = DensePolyRing::new(Zn::new(ZZ, q), "X");
        // always reduce the true f into the new modulus, so that errors
        // cannot accumulate across doubling steps
        let (new_g, new_h, new_s, new_t) = hensel_step(
            &ZqX,
            &reduce_poly(&ZqX, ZZX, f),
            &reduce_poly(&ZqX, ZZX, &current_g),
            &reduce_poly(&ZqX, ZZX, &current_h),
            &reduce_poly(&ZqX, ZZX, &current_s),
            &reduce_poly(&ZqX, ZZX, &current_t)
        );
        current_g = lift_poly(ZZX, &ZqX, &new_g);
        current_h = lift_poly(ZZX, &ZqX, &new_h);
        current_s = lift_poly(ZZX, &ZqX, &new_s);
        current_t = lift_poly(ZZX, &ZqX, &new_t);
    }
    return Ok((current_g, current_h));
}

///
/// Given a monic integer polynomial `f` and monic integer polynomials
/// `factors` that are pairwise coprime modulo the prime `p` and satisfy
/// `f = prod(factors) mod p`, lifts all of them at once, i.e. returns monic
/// polynomials congruent to the given ones modulo `p` whose product is `f`
/// modulo `p^(2^m)`. All coefficients of the result lie in `[0, p^(2^m))`.
///
#[instrument(skip_all, level = "debug")]
pub fn hensel_lift_factorization(
    ZZX: &DensePolyRing<ZZType>,
    f: &El<DensePolyRing<ZZType>>,
    factors: &[El<DensePolyRing<ZZType>>],
    p: i128,
    m: usize
) -> Result<Vec<El<DensePolyRing<ZZType>>>, AlgebraError> {
    assert!(factors.len() >= 1);
    if factors.len() == 1 {
        let mut q = p;
        for _ in 0..m {
            q = q.checked_mul(q).ok_or(AlgebraError::PrecisionExhausted)?;
        }
        let ZqX = DensePolyRing::new(Zn::new(ZZ, q), "X");
        return Ok(vec![lift_poly(ZZX, &ZqX, &reduce_poly(&ZqX, ZZX, f))]);
    }

    // lift the pair (factors[0], rest) and recurse on the lifted rest
    let Zp = Zn::new(ZZ, p);
    let ZpX = DensePolyRing::new(Zp, "X");
    let rest = ZZX.prod(factors[1..].iter().map(|factor| ZZX.clone_el(factor)));
    let rest = lift_poly(ZZX, &ZpX, &reduce_poly(&ZpX, ZZX, &rest));

    let (lifted_fst, lifted_rest) = hensel_lift_bifactor(ZZX, f, &factors[0], &rest, p, m)?;
    let mut result = hensel_lift_factorization(ZZX, &lifted_rest, &factors[1..], p, m)?;
    result.insert(0, lifted_fst);
    return Ok(result);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hensel_lift_bifactor() {
        let ZZX = DensePolyRing::new(ZZ, "X");
        // x^2 + 1 = (x + 2)(x + 3) mod 5
        let f = ZZX.from_terms([(1, 0), (1, 2)].into_iter());
        let g = ZZX.from_terms([(2, 0), (1, 1)].into_iter());
        let h = ZZX.from_terms([(3, 0), (1, 1)].into_iter());
        let (lifted_g, lifted_h) = hensel_lift_bifactor(&ZZX, &f, &g, &h, 5, 2).unwrap();
        // the roots of x^2 + 1 mod 625 are 182 and 443
        assert_el_eq!(&ZZX, &ZZX.from_terms([(182, 0), (1, 1)].into_iter()), &lifted_g);
        assert_el_eq!(&ZZX, &ZZX.from_terms([(443, 0), (1, 1)].into_iter()), &lifted_h);
    }

    #[test]
    fn test_hensel_lift_factorization() {
        let ZZX = DensePolyRing::new(ZZ, "X");
        // f = (x - 1)(x + 2)(x + 3) = x^3 + 4x^2 + x - 6
        let f = ZZX.from_terms([(-6, 0), (1, 1), (4, 2), (1, 3)].into_iter());
        let factors = [
            ZZX.from_terms([(4, 0), (1, 1)].into_iter()),
            ZZX.from_terms([(2, 0), (1, 1)].into_iter()),
            ZZX.from_terms([(3, 0), (1, 1)].into_iter())
        ];
        let lifted = hensel_lift_factorization(&ZZX, &f, &factors, 5, 2).unwrap();
        assert_eq!(3, lifted.len());
        // the true roots 1, -2, -3 are their own lifts modulo 625
        assert_el_eq!(&ZZX, &ZZX.from_terms([(624, 0), (1, 1)].into_iter()), &lifted[0]);
        assert_el_eq!(&ZZX, &factors[1], &lifted[1]);
        assert_el_eq!(&ZZX, &factors[2], &lifted[2]);

        // product recovers f modulo 625
        let Z625X = DensePolyRing::new(Zn::new(ZZ, 625), "X");
        let product = Z625X.prod(lifted.iter().map(|factor| reduce_poly(&Z625X, &ZZX, factor)));
        assert_el_eq!(&Z625X, &reduce_poly(&Z625X, &ZZX, &f), &product);
    }

    #[test]
    fn test_hensel_lift_single_factor() {
        let ZZX = DensePolyRing::new(ZZ, "X");
        let f = ZZX.from_terms([(-1, 0), (1, 1)].into_iter());
        let lifted = hensel_lift_factorization(&ZZX, &f, &[ZZX.clone_el(&f)], 3, 2).unwrap();
        assert_eq!(1, lifted.len());
        // -1 is represented by its positive lift 80 modulo 81
        assert_el_eq!(&ZZX, &ZZX.from_terms([(80, 0), (1, 1)].into_iter()), &lifted[0]);
    }
}
