use crate::divisibility::*;
use crate::error::AlgebraError;
use crate::integer::*;
use crate::pid::*;
use crate::ring::*;
use crate::rings::poly::*;

use tracing::instrument;

use std::mem::swap;

///
/// Computes the content of a polynomial, i.e. the gcd of its coefficients.
/// The content of the zero polynomial is zero.
///
pub fn poly_content<P>(poly_ring: P, f: &El<P>) -> El<BaseRing<P>>
    where P: PolyRingStore,
        P::Type: PolyRing,
        <BaseRing<P> as RingStore>::Type: PrincipalIdealRing
{
    let base_ring = poly_ring.base_ring();
    poly_ring.terms(f).map(|(c, _)| c).fold(base_ring.zero(), |x, y| base_ring.ideal_gen(&x, y))
}

///
/// Computes the primitive part of a polynomial, i.e. the polynomial divided
/// by its content. The result is unique up to multiplication by units of the
/// base ring.
///
pub fn poly_primitive_part<P>(poly_ring: P, f: El<P>) -> El<P>
    where P: PolyRingStore,
        P::Type: PolyRing,
        <BaseRing<P> as RingStore>::Type: PrincipalIdealRing
{
    if poly_ring.is_zero(&f) {
        return f;
    }
    let base_ring = poly_ring.base_ring();
    let content = poly_content(&poly_ring, &f);
    poly_ring.from_terms(poly_ring.terms(&f).map(|(c, d)| (base_ring.checked_div(c, &content).unwrap(), d)))
}

///
/// Computes a gcd of two polynomials with integer coefficients, where
/// coefficient division is not always possible.
///
/// Each elimination step scales the dividend by the leading coefficient of
/// the divisor, as in [`crate::algorithms::poly_div::poly_pseudo_div_rem()`],
/// and immediately extracts the primitive part again. Conceptually, this
/// computes the gcd over `QQ` and scales it back to a primitive polynomial.
///
/// Even so, the coefficients of the remainder sequence can grow
/// exponentially in the degree of the inputs. If an intermediate product
/// would leave the representable range of the coefficient ring, this fails
/// with [`AlgebraError::PrecisionExhausted`] instead of wrapping around.
///
/// The result is primitive, and unique up to multiplication by units of the
/// base ring.
///
#[instrument(skip_all, level = "trace")]
pub fn gcd_dfu<P>(poly_ring: P, fst: &El<P>, snd: &El<P>) -> Result<El<P>, AlgebraError>
    where P: PolyRingStore + Copy,
        P::Type: PolyRing,
        <BaseRing<P> as RingStore>::Type: IntegerRing
{
    if poly_ring.is_zero(fst) {
        return Ok(poly_ring.clone_el(snd));
    } else if poly_ring.is_zero(snd) {
        return Ok(poly_ring.clone_el(fst));
    }

    let mut a = poly_primitive_part(poly_ring, poly_ring.clone_el(fst));
    let mut b = poly_primitive_part(poly_ring, poly_ring.clone_el(snd));

    while !poly_ring.is_zero(&b) {
        a = primitive_pseudo_rem(poly_ring, a, &b)?;
        swap(&mut a, &mut b);
    }
    return Ok(a);
}

///
/// One pseudo-division remainder, with the primitive part taken after every
/// single elimination step to slow down coefficient growth as much as
/// possible. The result is primitive (or zero).
///
fn primitive_pseudo_rem<P>(poly_ring: P, mut lhs: El<P>, rhs: &El<P>) -> Result<El<P>, AlgebraError>
    where P: PolyRingStore + Copy,
        P::Type: PolyRing,
        <BaseRing<P> as RingStore>::Type: IntegerRing
{
    let base_ring = poly_ring.base_ring();
    let rhs_deg = poly_ring.degree(rhs).unwrap();
    while let Some(lhs_deg) = poly_ring.degree(&lhs) {
        if lhs_deg < rhs_deg {
            break;
        }
        ensure_products_representable(base_ring, poly_ring.lc(rhs).unwrap(), coefficient_log2_bound(poly_ring, &lhs))?;
        ensure_products_representable(base_ring, poly_ring.coefficient_at(&lhs, lhs_deg), coefficient_log2_bound(poly_ring, rhs))?;

        // lc(rhs) * lhs - lc(lhs) * X^(deg lhs - deg rhs) * rhs cancels the
        // leading terms exactly
        let lhs_lc = base_ring.clone_el(poly_ring.coefficient_at(&lhs, lhs_deg));
        poly_ring.get_ring().mul_assign_base(&mut lhs, poly_ring.lc(rhs).unwrap());
        let term = poly_ring.from_terms([(lhs_lc, lhs_deg - rhs_deg)].into_iter());
        lhs = poly_ring.sub(lhs, poly_ring.mul_ref(&term, rhs));
        debug_assert!(poly_ring.degree(&lhs).map(|d| d < lhs_deg).unwrap_or(true));

        lhs = poly_primitive_part(poly_ring, lhs);
    }
    return Ok(lhs);
}

fn coefficient_log2_bound<P>(poly_ring: P, f: &El<P>) -> usize
    where P: PolyRingStore + Copy,
        P::Type: PolyRing,
        <BaseRing<P> as RingStore>::Type: IntegerRing
{
    poly_ring.terms(f).filter_map(|(c, _)| poly_ring.base_ring().abs_log2_floor(c)).max().unwrap_or(0)
}

///
/// Fails with [`AlgebraError::PrecisionExhausted`] unless every product of
/// `factor` with an element of magnitude below `2^(other_log2 + 1)`, and
/// every difference of two such products, is representable in the ring.
///
fn ensure_products_representable<R>(ring: R, factor: &El<R>, other_log2: usize) -> Result<(), AlgebraError>
    where R: RingStore + Copy,
        R::Type: IntegerRing
{
    match ring.get_ring().representable_bits() {
        Some(bits) if ring.abs_log2_floor(factor).unwrap_or(0) + other_log2 + 3 > bits =>
            Err(AlgebraError::PrecisionExhausted),
        _ => Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordered::OrderedRingStore;
    use crate::primitive_int::StaticRing;
    use crate::rings::poly::dense_poly::DensePolyRing;

    #[test]
    fn test_poly_content() {
        let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "X");
        let f = ZZX.from_terms([(6, 0), (9, 1), (12, 3)].into_iter());
        assert_eq!(3, ZZX.base_ring().abs(poly_content(&ZZX, &f)));
        assert_eq!(0, poly_content(&ZZX, &ZZX.zero()));
    }

    #[test]
    fn test_poly_primitive_part() {
        let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "X");
        let f = ZZX.from_terms([(6, 0), (9, 1), (12, 3)].into_iter());
        let expected = ZZX.from_terms([(2, 0), (3, 1), (4, 3)].into_iter());
        let actual = poly_primitive_part(&ZZX, f);
        assert!(ZZX.eq_el(&expected, &actual) || ZZX.eq_el(&expected, &ZZX.negate(actual)));
    }

    #[test]
    fn test_gcd_dfu() {
        let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "X");
        let expected_gcd = ZZX.from_terms([(7, 0), (1, 3)].into_iter());
        let f = ZZX.from_terms([(3, 0), (-1, 2), (4, 3), (1, 5)].into_iter());
        let g = ZZX.from_terms([(7, 0), (14, 1), (35, 2), (-14, 4)].into_iter());

        let fst = ZZX.mul_ref(&f, &expected_gcd);
        let snd = ZZX.mul_ref(&g, &expected_gcd);
        let actual_gcd = gcd_dfu(&ZZX, &fst, &snd).unwrap();
        // the gcd is primitive, so unique up to sign
        assert!(ZZX.eq_el(&expected_gcd, &actual_gcd) || ZZX.eq_el(&expected_gcd, &ZZX.negate(actual_gcd)));
    }

    #[test]
    fn test_gcd_dfu_coprime() {
        let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "X");
        let f = ZZX.from_terms([(1, 0), (1, 1)].into_iter());
        let g = ZZX.from_terms([(1, 0), (1, 2)].into_iter());
        let d = gcd_dfu(&ZZX, &f, &g).unwrap();
        assert_eq!(Some(0), ZZX.degree(&d));
        assert!(ZZX.base_ring().is_unit(ZZX.coefficient_at(&d, 0)));
    }

    #[test]
    fn test_gcd_dfu_reports_exhausted_precision() {
        let ZZX = DensePolyRing::new(StaticRing::<i128>::RING, "X");
        // the primitive remainder sequence of f and f' gains roughly a
        // factor deg(f) in every coefficient per step, far beyond i128
        let f = ZZX.from_terms([(1, 0), (1, 1), (1, 50)].into_iter());
        let g = derive_poly(&ZZX, &f);
        assert_eq!(Some(AlgebraError::PrecisionExhausted), gcd_dfu(&ZZX, &f, &g).err());
    }
}
