use crate::divisibility::*;
use crate::ring::*;
use crate::rings::poly::*;

use tracing::instrument;

///
/// Computes the polynomial division of `lhs` by `rhs`, i.e. `lhs = q * rhs + r` with
/// `deg(r) < deg(rhs)`.
///
/// This requires a function `left_div_lc` that computes the division of an element of the
/// base ring by the leading coefficient of `rhs`. If the base ring is a field, this can
/// just be standard division. In other cases, this depends on the exact situation you are
/// in - e.g. `rhs` might be monic, or in a specific context, it might be guaranteed that the
/// division always works. If this is not the case, look also at [`poly_pseudo_div_rem()`],
/// which implicitly performs the polynomial division over the field of fractions.
///
#[instrument(skip_all, level = "trace")]
pub fn poly_div_rem<P, F, E>(poly_ring: P, mut lhs: El<P>, rhs: &El<P>, mut left_div_lc: F) -> Result<(El<P>, El<P>), E>
    where P: RingStore,
        P::Type: PolyRing,
        F: FnMut(&El<BaseRing<P>>) -> Result<El<BaseRing<P>>, E>
{
    assert!(poly_ring.degree(rhs).is_some());

    let rhs_deg = poly_ring.degree(rhs).unwrap();
    if poly_ring.degree(&lhs).is_none() {
        return Ok((poly_ring.zero(), lhs));
    }
    let lhs_deg = poly_ring.degree(&lhs).unwrap();
    if lhs_deg < rhs_deg {
        return Ok((poly_ring.zero(), lhs));
    }
    let result = poly_ring.try_from_terms(
        (0..(lhs_deg + 1 - rhs_deg)).rev().map(|i| {
            let quo = left_div_lc(poly_ring.coefficient_at(&lhs, i + rhs_deg))?;
            let neg_quo = poly_ring.base_ring().negate(quo);
            if !poly_ring.base_ring().is_zero(&neg_quo) {
                poly_ring.get_ring().add_assign_from_terms(
                    &mut lhs,
                    poly_ring.terms(rhs).map(|(c, j)|
                        (poly_ring.base_ring().mul_ref(&neg_quo, c), i + j)
                    )
                );
            }
            Ok((poly_ring.base_ring().negate(neg_quo), i))
        })
    )?;
    return Ok((result, lhs));
}

///
/// Computes the remainder of the polynomial division of `lhs` by `rhs`, i.e. `r` in the
/// expression `lhs = q * rhs + r` with `deg(r) < deg(rhs)`.
///
/// As opposed to [`poly_div_rem()`], this function only computes the remainder, but may
/// be slightly faster because of this.
///
#[instrument(skip_all, level = "trace")]
pub fn poly_rem<P, F, E>(poly_ring: P, mut lhs: El<P>, rhs: &El<P>, mut left_div_lc: F) -> Result<El<P>, E>
    where P: RingStore,
        P::Type: PolyRing,
        F: FnMut(&El<BaseRing<P>>) -> Result<El<BaseRing<P>>, E>
{
    assert!(poly_ring.degree(rhs).is_some());

    let rhs_deg = poly_ring.degree(rhs).unwrap();
    if poly_ring.degree(&lhs).is_none() {
        return Ok(lhs);
    }
    let lhs_deg = poly_ring.degree(&lhs).unwrap();
    if lhs_deg < rhs_deg {
        return Ok(lhs);
    }
    for i in (0..(lhs_deg + 1 - rhs_deg)).rev() {
        let quo = left_div_lc(poly_ring.coefficient_at(&lhs, i + rhs_deg))?;
        let neg_quo = poly_ring.base_ring().negate(quo);
        if !poly_ring.base_ring().is_zero(&neg_quo) {
            poly_ring.get_ring().add_assign_from_terms(
                &mut lhs,
                poly_ring.terms(rhs).map(|(c, j)|
                    (poly_ring.base_ring().mul_ref(&neg_quo, c), i + j)
                )
            );
        }
    }
    return Ok(lhs);
}

///
/// Computes the pseudo-division of `lhs` by `rhs` over a domain, i.e.
/// `lc(rhs)^k * lhs = q * rhs + r` with `deg(r) < deg(rhs)`, and returns
/// `(q, r, k)`.
///
/// Conceptually, this is the polynomial division over the field of fractions
/// of the base ring, with all denominators cleared.
///
#[instrument(skip_all, level = "trace")]
pub fn poly_pseudo_div_rem<P>(poly_ring: P, mut lhs: El<P>, rhs: &El<P>) -> (El<P>, El<P>, usize)
    where P: RingStore + Copy,
        P::Type: PolyRing,
        <BaseRing<P> as RingStore>::Type: Domain
{
    assert!(!poly_ring.is_zero(rhs));

    let base_ring = poly_ring.base_ring();
    let rhs_deg = poly_ring.degree(rhs).unwrap();
    let lc = base_ring.clone_el(poly_ring.lc(rhs).unwrap());

    let mut quo = poly_ring.zero();
    let mut scale_pow = 0;
    while let Some(lhs_deg) = poly_ring.degree(&lhs) {
        if lhs_deg < rhs_deg {
            break;
        }
        // after scaling by lc, the leading terms cancel exactly
        let lhs_lc = base_ring.clone_el(poly_ring.coefficient_at(&lhs, lhs_deg));
        poly_ring.get_ring().mul_assign_base(&mut lhs, &lc);
        poly_ring.get_ring().mul_assign_base(&mut quo, &lc);
        scale_pow += 1;

        let term = poly_ring.from_terms([(lhs_lc, lhs_deg - rhs_deg)].into_iter());
        lhs = poly_ring.sub(lhs, poly_ring.mul_ref(&term, rhs));
        poly_ring.add_assign(&mut quo, term);
        debug_assert!(poly_ring.degree(&lhs).map(|d| d < lhs_deg).unwrap_or(true));
    }
    return (quo, lhs, scale_pow);
}
