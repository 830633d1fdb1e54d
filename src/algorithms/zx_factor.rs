use crate::algorithms;
use crate::algorithms::equal_degree::equal_degree_factorization;
use crate::algorithms::distinct_degree::distinct_degree_factorization;
use crate::algorithms::erathostenes::enumerate_primes;
use crate::algorithms::hensel::hensel_lift_factorization;
use crate::algorithms::poly_gcd::{gcd_dfu, poly_primitive_part};
use crate::divisibility::*;
use crate::error::AlgebraError;
use crate::ordered::OrderedRingStore;
use crate::primitive_int::StaticRing;
use crate::ring::*;
use crate::rings::poly::dense_poly::DensePolyRing;
use crate::rings::poly::*;
use crate::rings::zn::Zn;

use tracing::instrument;

type ZZType = StaticRing<i128>;
const ZZ: ZZType = StaticRing::<i128>::RING;

///
/// The largest prime considered when looking for a prime modulo which the
/// squarefree part of the input stays squarefree. Each prime fails for at
/// most `deg(f)^2` of the primes below this bound, so in practice the search
/// succeeds within the first few candidates.
///
const PRIME_SEARCH_BOUND: i128 = 1000;

///
/// Factors a nonzero integer polynomial into irreducible polynomials over
/// `ZZ`, using the Zassenhaus method: factor modulo a suitable prime, lift
/// the factorization via Hensel's lemma until the modulus exceeds a bound on
/// the coefficients of any potential factor, and recombine the lifted
/// factors into true divisors.
///
/// The returned factors are primitive with positive leading coefficient,
/// each paired with its multiplicity. The content and the sign of the input
/// are not part of the result, so the input is the product of the returned
/// powers only up to a constant.
///
/// Fails with [`AlgebraError::PrecisionExhausted`] if the required lifting
/// modulus exceeds the internal integer type, and with
/// [`AlgebraError::DidNotConverge`] if no prime below a fixed bound keeps
/// the squarefree part of the input squarefree.
///
#[instrument(skip_all, level = "debug")]
pub fn zx_factorization(
    ZZX: &DensePolyRing<ZZType>,
    f: &El<DensePolyRing<ZZType>>,
    rng: &mut oorandom::Rand64
) -> Result<Vec<(El<DensePolyRing<ZZType>>, usize)>, AlgebraError> {
    assert!(!ZZX.is_zero(f));
    if ZZX.degree(f).unwrap() == 0 {
        return Ok(Vec::new());
    }

    let mut remaining = normalize_sign(ZZX, poly_primitive_part(ZZX, ZZX.clone_el(f)));

    // if f stays squarefree modulo some prime not dividing lc(f), it is
    // already squarefree over ZZ and the integer polynomial gcd, whose
    // remainder sequence can outgrow i128, is not needed at all
    let squarefree_part = if enumerate_primes(&ZZ, &PRIME_SEARCH_BOUND).into_iter().skip(1)
        .any(|p| stays_squarefree_modulo(ZZX, &remaining, p))
    {
        ZZX.clone_el(&remaining)
    } else {
        // the squarefree part f / gcd(f, f'); the quotient of primitive
        // polynomials is again primitive by Gauss' lemma, so division is exact
        let derivative = derive_poly(ZZX, &remaining);
        let gcd = gcd_dfu(ZZX, &remaining, &derivative)?;
        normalize_sign(ZZX, ZZX.checked_div(&remaining, &gcd).unwrap())
    };

    let mut result = Vec::new();
    for factor in factor_squarefree_primitive(ZZX, &squarefree_part, rng)? {
        let mut multiplicity = 0;
        while let Some(quo) = ZZX.checked_div(&remaining, &factor) {
            remaining = quo;
            multiplicity += 1;
        }
        debug_assert!(multiplicity >= 1);
        result.push((factor, multiplicity));
    }
    debug_assert!(ZZX.degree(&remaining).unwrap() == 0);
    return Ok(result);
}

fn normalize_sign(ZZX: &DensePolyRing<ZZType>, f: El<DensePolyRing<ZZType>>) -> El<DensePolyRing<ZZType>> {
    if ZZX.base_ring().is_neg(ZZX.lc(&f).unwrap()) {
        ZZX.negate(f)
    } else {
        f
    }
}

///
/// Factors a squarefree primitive polynomial with positive leading
/// coefficient into its irreducible factors, normalized the same way.
///
/// A non-monic input `f` of degree `d` with leading coefficient `c` is
/// reduced to the monic case via the standard substitution
/// `F(X) = c^(d - 1) * f(X / c)`: the factors of `f` are recovered from
/// those of `F` by substituting back and taking primitive parts.
///
fn factor_squarefree_primitive(
    ZZX: &DensePolyRing<ZZType>,
    f: &El<DensePolyRing<ZZType>>,
    rng: &mut oorandom::Rand64
) -> Result<Vec<El<DensePolyRing<ZZType>>>, AlgebraError> {
    let d = ZZX.degree(f).unwrap();
    if d == 1 {
        return Ok(vec![ZZX.clone_el(f)]);
    }
    let lc = *ZZX.lc(f).unwrap();
    if lc == 1 {
        return factor_squarefree_monic(ZZX, f, rng);
    }

    let monic_version = ZZX.try_from_terms(ZZX.terms(f).map(|(c, i)| {
        // the leading term contributes c^d / c^d = 1
        if i == d {
            return Ok((1, d));
        }
        let scale = lc.checked_pow(u32::try_from(d - 1 - i).map_err(|_| AlgebraError::PrecisionExhausted)?)
            .ok_or(AlgebraError::PrecisionExhausted)?;
        c.checked_mul(scale).ok_or(AlgebraError::PrecisionExhausted).map(|coeff| (coeff, i))
    }))?;

    let mut result = Vec::new();
    for factor in factor_squarefree_monic(ZZX, &monic_version, rng)? {
        let substituted = ZZX.try_from_terms(ZZX.terms(&factor).map(|(c, i)| {
            let scale = lc.checked_pow(u32::try_from(i).map_err(|_| AlgebraError::PrecisionExhausted)?)
                .ok_or(AlgebraError::PrecisionExhausted)?;
            c.checked_mul(scale).ok_or(AlgebraError::PrecisionExhausted).map(|coeff| (coeff, i))
        }))?;
        result.push(normalize_sign(ZZX, poly_primitive_part(ZZX, substituted)));
    }
    return Ok(result);
}

fn factor_squarefree_monic(
    ZZX: &DensePolyRing<ZZType>,
    f: &El<DensePolyRing<ZZType>>,
    rng: &mut oorandom::Rand64
) -> Result<Vec<El<DensePolyRing<ZZType>>>, AlgebraError> {
    let d = ZZX.degree(f).unwrap();
    debug_assert!(ZZX.base_ring().is_one(ZZX.lc(f).unwrap()));

    // the lifting modulus q must satisfy q >= 2^(d + 1) * |f|_2, so that the
    // coefficients of any factor of f lie strictly within (-q/2, q/2)
    let norm_sqr = ZZX.terms(f)
        .try_fold(0i128, |sum, (c, _)| c.checked_mul(*c).and_then(|sqr| sum.checked_add(sqr)))
        .ok_or(AlgebraError::PrecisionExhausted)?;
    if 2 * d + 2 >= 127 {
        return Err(AlgebraError::PrecisionExhausted);
    }
    let bound_sqr = (1i128 << (2 * d + 2)).checked_mul(norm_sqr).ok_or(AlgebraError::PrecisionExhausted)?;

    // a prime such that f stays squarefree modulo p, together with the
    // lifting target q = p^(2^m). p = 2 is excluded since the equal-degree
    // splitting is least effective there. Since quadratic lifting can only
    // reach powers p^(2^m), a small prime may overshoot the bound so far
    // that arithmetic modulo q leaves i128; such primes are passed over in
    // favor of larger ones, whose power ladder is spaced more finely
    let mut saw_usable_prime = false;
    let mut chosen = None;
    for p in enumerate_primes(&ZZ, &PRIME_SEARCH_BOUND).into_iter().skip(1) {
        if !stays_squarefree_modulo(ZZX, f, p) {
            continue;
        }
        saw_usable_prime = true;
        if let Some((q, m)) = lifting_target(p, bound_sqr) {
            chosen = Some((p, q, m));
            break;
        }
    }
    let (p, q, m) = match chosen {
        Some(choice) => choice,
        None if saw_usable_prime => return Err(AlgebraError::PrecisionExhausted),
        None => return Err(AlgebraError::DidNotConverge)
    };

    // factor modulo p; f is squarefree mod p, so the squarefree
    // decomposition stage can be skipped
    let Zp = Zn::new(ZZ, p);
    let Fp = Zp.clone().as_field().ok().unwrap();
    let FpX = DensePolyRing::new(Fp, "X");
    let f_p = FpX.from_terms(ZZX.terms(f).map(|(c, i)| (*c, i)));
    let mut modular_factors = Vec::new();
    for (factor_deg, part) in distinct_degree_factorization(&FpX, &f_p) {
        for factor in equal_degree_factorization(&FpX, &part, factor_deg, rng)? {
            modular_factors.push(ZZX.from_terms(
                FpX.terms(&factor).map(|(c, i)| (Zp.get_ring().smallest_positive_lift(*c), i))
            ));
        }
    }

    let lifted = hensel_lift_factorization(ZZX, f, &modular_factors, p, m)?;
    return Ok(recombine_factors(ZZX, f, lifted, q));
}

///
/// Checks whether `f` remains squarefree after reduction modulo `n`. A `true`
/// result requires `n` to be prime and to not divide `lc(f)`, and then
/// implies that `f` itself is squarefree over `ZZ`; moduli that do not give
/// a field are rejected outright.
///
fn stays_squarefree_modulo(ZZX: &DensePolyRing<ZZType>, f: &El<DensePolyRing<ZZType>>, n: i128) -> bool {
    let Fp = match Zn::new(ZZ, n).as_field() {
        Ok(field) => field,
        Err(_) => return false
    };
    if *ZZX.lc(f).unwrap() % n == 0 {
        return false;
    }
    let FpX = DensePolyRing::new(Fp, "X");
    let f_p = FpX.from_terms(ZZX.terms(f).map(|(c, i)| (*c, i)));
    let derivative = derive_poly(&FpX, &f_p);
    let gcd = algorithms::eea::gcd(FpX.clone_el(&f_p), derivative, &FpX);
    FpX.degree(&gcd) == Some(0)
}

///
/// Finds the smallest `m` such that `q = p^(2^m)` satisfies
/// `q^2 >= bound_sqr`, and returns `(q, m)`. Returns `None` if residue
/// arithmetic modulo that `q` could overflow, i.e. if `q^2` does not fit
/// into `i128`.
///
fn lifting_target(p: i128, bound_sqr: i128) -> Option<(i128, usize)> {
    let mut q = p;
    let mut m = 0;
    loop {
        let q_sqr = q.checked_mul(q)?;
        if q_sqr >= bound_sqr {
            return Some((q, m));
        }
        q = q_sqr;
        m += 1;
    }
}

///
/// Searches through the subsets of the lifted modular factors, in order of
/// increasing size, for products that are centered lifts of true divisors
/// of `f`. Every irreducible factor of `f` reduces to a product of some of
/// the modular factors, and since the lifting modulus dominates the
/// coefficient bound, the centered lift of that product recovers it exactly.
///
fn recombine_factors(
    ZZX: &DensePolyRing<ZZType>,
    f: &El<DensePolyRing<ZZType>>,
    mut pool: Vec<El<DensePolyRing<ZZType>>>,
    q: i128
) -> Vec<El<DensePolyRing<ZZType>>> {
    let ZqX = DensePolyRing::new(Zn::new(ZZ, q), "X");
    let mut remaining = ZZX.clone_el(f);
    let mut result = Vec::new();
    let mut size = 1;
    while 2 * size <= pool.len() {
        let mut indices: Vec<usize> = (0..size).collect();
        let mut found = false;
        loop {
            let product = ZqX.prod(indices.iter()
                .map(|i| ZqX.from_terms(ZZX.terms(&pool[*i]).map(|(c, j)| (*c, j)))));
            let candidate = ZZX.from_terms(ZqX.terms(&product)
                .map(|(c, j)| (ZqX.base_ring().get_ring().smallest_lift(*c), j)));
            if let Some(quo) = ZZX.checked_div(&remaining, &candidate) {
                remaining = quo;
                result.push(candidate);
                for index in indices.iter().rev() {
                    pool.remove(*index);
                }
                found = true;
                break;
            }
            if !next_combination(&mut indices, pool.len()) {
                break;
            }
        }
        // after removing used factors, subsets of the same size must be
        // reconsidered before moving on
        if !found {
            size += 1;
        }
    }
    if ZZX.degree(&remaining).unwrap() > 0 {
        result.push(remaining);
    }
    return result;
}

fn next_combination(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    let mut i = k;
    while i > 0 {
        i -= 1;
        if indices[i] < n - k + i {
            indices[i] += 1;
            for j in (i + 1)..k {
                indices[j] = indices[j - 1] + 1;
            }
            return true;
        }
    }
    return false;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains_factor(ZZX: &DensePolyRing<ZZType>, factors: &[(El<DensePolyRing<ZZType>>, usize)], expected: &El<DensePolyRing<ZZType>>, multiplicity: usize) -> bool {
        factors.iter().any(|(factor, m)| ZZX.eq_el(factor, expected) && *m == multiplicity)
    }

    #[test]
    fn test_zx_factorization() {
        let ZZX = DensePolyRing::new(ZZ, "X");
        let mut rng = oorandom::Rand64::new(1);
        // x^3 - 9x^2 - 133x - 51 = (x - 17)(x^2 + 8x + 3)
        let f = ZZX.from_terms([(-51, 0), (-133, 1), (-9, 2), (1, 3)].into_iter());
        let factors = zx_factorization(&ZZX, &f, &mut rng).unwrap();
        assert_eq!(2, factors.len());
        assert!(contains_factor(&ZZX, &factors, &ZZX.from_terms([(-17, 0), (1, 1)].into_iter()), 1));
        assert!(contains_factor(&ZZX, &factors, &ZZX.from_terms([(3, 0), (8, 1), (1, 2)].into_iter()), 1));
    }

    #[test]
    fn test_zx_factorization_irreducible_factors_stay_put() {
        let ZZX = DensePolyRing::new(ZZ, "X");
        let mut rng = oorandom::Rand64::new(1);
        // x^2 + 8x + 3 has discriminant 52, not a square, so it is irreducible
        let f = ZZX.from_terms([(3, 0), (8, 1), (1, 2)].into_iter());
        let factors = zx_factorization(&ZZX, &f, &mut rng).unwrap();
        assert_eq!(1, factors.len());
        assert!(contains_factor(&ZZX, &factors, &f, 1));
    }

    #[test]
    fn test_zx_factorization_multiplicities() {
        let ZZX = DensePolyRing::new(ZZ, "X");
        let mut rng = oorandom::Rand64::new(1);
        let x_plus_1 = ZZX.from_terms([(1, 0), (1, 1)].into_iter());
        let x_minus_2 = ZZX.from_terms([(-2, 0), (1, 1)].into_iter());
        let f = ZZX.mul(
            ZZX.pow(ZZX.clone_el(&x_plus_1), 2),
            ZZX.pow(ZZX.clone_el(&x_minus_2), 3)
        );
        let factors = zx_factorization(&ZZX, &f, &mut rng).unwrap();
        assert_eq!(2, factors.len());
        assert!(contains_factor(&ZZX, &factors, &x_plus_1, 2));
        assert!(contains_factor(&ZZX, &factors, &x_minus_2, 3));
    }

    #[test]
    fn test_zx_factorization_non_monic() {
        let ZZX = DensePolyRing::new(ZZ, "X");
        let mut rng = oorandom::Rand64::new(1);
        // 6x^2 + 7x + 2 = (2x + 1)(3x + 2)
        let f = ZZX.from_terms([(2, 0), (7, 1), (6, 2)].into_iter());
        let factors = zx_factorization(&ZZX, &f, &mut rng).unwrap();
        assert_eq!(2, factors.len());
        assert!(contains_factor(&ZZX, &factors, &ZZX.from_terms([(1, 0), (2, 1)].into_iter()), 1));
        assert!(contains_factor(&ZZX, &factors, &ZZX.from_terms([(2, 0), (3, 1)].into_iter()), 1));
    }

    #[test]
    fn test_zx_factorization_content_and_sign_dropped() {
        let ZZX = DensePolyRing::new(ZZ, "X");
        let mut rng = oorandom::Rand64::new(1);
        // -3 (x + 1)(x - 1) = -3x^2 + 3
        let f = ZZX.from_terms([(3, 0), (-3, 2)].into_iter());
        let factors = zx_factorization(&ZZX, &f, &mut rng).unwrap();
        assert_eq!(2, factors.len());
        assert!(contains_factor(&ZZX, &factors, &ZZX.from_terms([(1, 0), (1, 1)].into_iter()), 1));
        assert!(contains_factor(&ZZX, &factors, &ZZX.from_terms([(-1, 0), (1, 1)].into_iter()), 1));
    }

    #[test]
    fn test_zx_factorization_constant() {
        let ZZX = DensePolyRing::new(ZZ, "X");
        let mut rng = oorandom::Rand64::new(1);
        let factors = zx_factorization(&ZZX, &ZZX.from_terms([(5, 0)].into_iter()), &mut rng).unwrap();
        assert!(factors.is_empty());
    }

    #[test]
    fn test_zx_factorization_cyclotomic_like() {
        let ZZX = DensePolyRing::new(ZZ, "X");
        let mut rng = oorandom::Rand64::new(1);
        // x^4 - 1 = (x - 1)(x + 1)(x^2 + 1)
        let f = ZZX.from_terms([(-1, 0), (1, 4)].into_iter());
        let factors = zx_factorization(&ZZX, &f, &mut rng).unwrap();
        assert_eq!(3, factors.len());
        assert!(contains_factor(&ZZX, &factors, &ZZX.from_terms([(-1, 0), (1, 1)].into_iter()), 1));
        assert!(contains_factor(&ZZX, &factors, &ZZX.from_terms([(1, 0), (1, 1)].into_iter()), 1));
        assert!(contains_factor(&ZZX, &factors, &ZZX.from_terms([(1, 0), (1, 2)].into_iter()), 1));
    }

    #[test]
    fn test_zx_factorization_high_degree_sparse() {
        let ZZX = DensePolyRing::new(ZZ, "X");
        let mut rng = oorandom::Rand64::new(1);
        // x^50 + x + 1 is squarefree and divisible by x^2 + x + 1, since
        // both vanish at the primitive third roots of unity
        let f = ZZX.from_terms([(1, 0), (1, 1), (1, 50)].into_iter());
        let factors = zx_factorization(&ZZX, &f, &mut rng).unwrap();
        assert!(factors.len() >= 2);
        assert!(contains_factor(&ZZX, &factors, &ZZX.from_terms([(1, 0), (1, 1), (1, 2)].into_iter()), 1));
        let product = ZZX.prod(factors.iter().map(|(factor, m)| ZZX.pow(ZZX.clone_el(factor), *m)));
        assert_el_eq!(&ZZX, &f, &product);
    }

    #[test]
    fn test_stays_squarefree_modulo() {
        let ZZX = DensePolyRing::new(ZZ, "X");
        let f = ZZX.from_terms([(3, 0), (8, 1), (1, 2)].into_iter());
        // composite moduli do not give a field and must be skipped, not panic
        assert!(!stays_squarefree_modulo(&ZZX, &f, 25));
        assert!(!stays_squarefree_modulo(&ZZX, &f, 27));
        assert!(stays_squarefree_modulo(&ZZX, &f, 3));
        // x^2 mod 3 is not squarefree, and 3 | lc(3x^2 + x)
        assert!(!stays_squarefree_modulo(&ZZX, &ZZX.from_terms([(1, 2)].into_iter()), 3));
        assert!(!stays_squarefree_modulo(&ZZX, &ZZX.from_terms([(1, 1), (3, 2)].into_iter()), 3));
    }

    #[test]
    fn test_lifting_target() {
        // 5^8 is the smallest power 5^(2^m) whose square reaches 10^9
        assert_eq!(Some((390625, 3)), lifting_target(5, 1_000_000_000));
        assert_eq!(Some((5, 0)), lifting_target(5, 20));
        // for tiny primes and huge bounds, the ladder overshoots i128
        assert_eq!(None, lifting_target(3, i128::MAX));
    }

    #[test]
    fn test_next_combination() {
        let mut indices = vec![0, 1];
        let mut seen = vec![indices.clone()];
        while next_combination(&mut indices, 4) {
            seen.push(indices.clone());
        }
        assert_eq!(vec![
            vec![0, 1], vec![0, 2], vec![0, 3],
            vec![1, 2], vec![1, 3], vec![2, 3]
        ], seen);
    }
}
