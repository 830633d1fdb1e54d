use crate::algorithms;
use crate::algorithms::poly_pow::pow_mod_f;
use crate::algorithms::squarefree::make_monic;
use crate::divisibility::*;
use crate::error::AlgebraError;
use crate::field::Field;
use crate::finite::{FiniteRing, FiniteRingStore};
use crate::integer::IntegerRingStore;
use crate::pid::*;
use crate::primitive_int::StaticRing;
use crate::ring::*;
use crate::rings::poly::*;

use tracing::instrument;

///
/// How often [`cantor_zassenhaus()`] tries a random splitting polynomial
/// before giving up. Each attempt succeeds with probability at least 1/2
/// on valid input, so reaching this bound indicates a violated
/// precondition rather than bad luck.
///
const MAX_SPLITTING_ATTEMPTS: usize = 100;

///
/// Computes a basis of the kernel of the Frobenius-minus-identity operator
/// `g -> g^q - g` on the ring `Fq[X]/(f)`, for a monic squarefree `f`.
///
/// This kernel is the Berlekamp subalgebra of `f`; its dimension equals the
/// number of irreducible factors of `f`.
///
pub fn frobenius_kernel_basis<P>(poly_ring: P, f: &El<P>) -> Vec<El<P>>
    where P: PolyRingStore + Copy,
        P::Type: PolyRing + EuclideanRing,
        <BaseRing<P> as RingStore>::Type: Field + FiniteRing
{
    let base_ring = poly_ring.base_ring();
    let ZZ = StaticRing::<i128>::RING;
    let q = base_ring.size(&ZZ).unwrap();
    let n = poly_ring.degree(f).unwrap();
    assert!(n >= 1);

    // the matrix of g -> g^q - g w.r.t. the basis 1, X, ..., X^(n - 1),
    // stored in row-major order
    let x_power_q = pow_mod_f(poly_ring, poly_ring.indeterminate(), f, &q, ZZ);
    let mut matrix = (0..n).map(|_| (0..n).map(|_| base_ring.zero()).collect::<Vec<_>>()).collect::<Vec<_>>();
    let mut current = poly_ring.one();
    for j in 0..n {
        if j > 0 {
            current = poly_ring.euclidean_rem(poly_ring.mul_ref(&current, &x_power_q), f);
        }
        for i in 0..n {
            matrix[i][j] = base_ring.clone_el(poly_ring.coefficient_at(&current, i));
        }
        base_ring.sub_assign(&mut matrix[j][j], base_ring.one());
    }

    null_space_basis(poly_ring, matrix, n)
}

fn null_space_basis<P>(poly_ring: P, mut matrix: Vec<Vec<El<BaseRing<P>>>>, n: usize) -> Vec<El<P>>
    where P: PolyRingStore,
        P::Type: PolyRing,
        <BaseRing<P> as RingStore>::Type: Field
{
    let base_ring = poly_ring.base_ring();

    // Gauss-Jordan elimination; pivot_rows[c] is the row whose pivot sits in column c
    let mut pivot_rows: Vec<Option<usize>> = (0..n).map(|_| None).collect();
    let mut row = 0;
    for col in 0..n {
        let mut pivot = None;
        for r in row..n {
            if !base_ring.is_zero(&matrix[r][col]) {
                pivot = Some(r);
                break;
            }
        }
        let pivot = match pivot {
            Some(r) => r,
            None => continue
        };
        matrix.swap(row, pivot);
        let pivot_inv = base_ring.invert(&matrix[row][col]).unwrap();
        for c in col..n {
            matrix[row][c] = base_ring.mul_ref_snd(std::mem::replace(&mut matrix[row][c], base_ring.zero()), &pivot_inv);
        }
        for r in 0..n {
            if r != row && !base_ring.is_zero(&matrix[r][col]) {
                let factor = base_ring.clone_el(&matrix[r][col]);
                for c in col..n {
                    let sub = base_ring.mul_ref(&factor, &matrix[row][c]);
                    base_ring.sub_assign(&mut matrix[r][c], sub);
                }
            }
        }
        pivot_rows[col] = Some(row);
        row += 1;
    }

    // every pivot-free column yields one basis vector of the null space
    let mut result = Vec::new();
    for col in 0..n {
        if pivot_rows[col].is_some() {
            continue;
        }
        result.push(poly_ring.from_terms((0..n).filter_map(|c| {
            if c == col {
                Some((base_ring.one(), c))
            } else if let Some(r) = pivot_rows[c] {
                if base_ring.is_zero(&matrix[r][col]) {
                    None
                } else {
                    Some((base_ring.negate(base_ring.clone_el(&matrix[r][col])), c))
                }
            } else {
                None
            }
        })));
    }
    return result;
}

///
/// Finds a proper monic factor of a monic squarefree polynomial `f` with at
/// least two irreducible factors, using Berlekamp's null-space method: for
/// every `g` in the Berlekamp subalgebra and every `c` in the coefficient
/// field, `gcd(f, g - c)` is a product of some of the irreducible factors
/// of `f`, and some choice of `(g, c)` yields a proper one.
///
pub fn berlekamp_splitting<P>(poly_ring: P, f: &El<P>, kernel_basis: &[El<P>]) -> Result<El<P>, AlgebraError>
    where P: PolyRingStore + Copy,
        P::Type: PolyRing + EuclideanRing,
        <BaseRing<P> as RingStore>::Type: Field + FiniteRing
{
    let deg_f = poly_ring.degree(f).unwrap();
    for g in kernel_basis {
        if poly_ring.degree(g).unwrap_or(0) == 0 {
            continue;
        }
        for c in poly_ring.base_ring().elements() {
            let shifted = poly_ring.sub_ref_fst(g, poly_ring.from(c));
            let factor = make_monic(poly_ring, algorithms::eea::gcd(poly_ring.clone_el(f), shifted, poly_ring));
            let deg = poly_ring.degree(&factor).unwrap();
            if deg > 0 && deg < deg_f {
                return Ok(factor);
            }
        }
    }
    Err(AlgebraError::DidNotConverge)
}

///
/// Completely factors a monic squarefree polynomial over a finite field
/// into its monic irreducible factors, using Berlekamp's algorithm.
///
#[instrument(skip_all, level = "debug")]
pub fn berlekamp_factorization<P>(poly_ring: P, f: &El<P>) -> Result<Vec<El<P>>, AlgebraError>
    where P: PolyRingStore + Copy,
        P::Type: PolyRing + EuclideanRing,
        <BaseRing<P> as RingStore>::Type: Field + FiniteRing
{
    assert!(poly_ring.degree(f).unwrap_or(0) >= 1);
    let mut stack = Vec::new();
    stack.push(make_monic(poly_ring, poly_ring.clone_el(f)));
    let mut result = Vec::new();
    while let Some(current) = stack.pop() {
        let kernel_basis = frobenius_kernel_basis(poly_ring, &current);
        if kernel_basis.len() == 1 {
            result.push(current);
            continue;
        }
        let factor = berlekamp_splitting(poly_ring, &current, &kernel_basis)?;
        let rest = poly_ring.checked_div(&current, &factor).unwrap();
        stack.push(factor);
        stack.push(rest);
    }
    return Ok(result);
}

///
/// Uses the Cantor-Zassenhaus method to find a proper monic factor of a
/// monic squarefree polynomial `f` whose irreducible factors all have
/// degree `d` (and which has at least two of them).
///
/// For odd `q`, a random `T` of degree `2d` yields the splitting candidate
/// `gcd(f, T^((q^d - 1)/2) - 1)`: evaluated at a root of an irreducible
/// factor, `T^((q^d - 1)/2)` is `1` exactly if `T` evaluates to a square in
/// `F_(q^d)`, which happens roughly independently per factor with
/// probability about 1/2. In characteristic 2, the same role is played by
/// the trace map `T + T^2 + T^4 + ... + T^(2^(log2(q^d) - 1))`.
///
pub fn cantor_zassenhaus<P>(poly_ring: P, f: &El<P>, d: usize, rng: &mut oorandom::Rand64) -> Result<El<P>, AlgebraError>
    where P: PolyRingStore + Copy,
        P::Type: PolyRing + EuclideanRing,
        <BaseRing<P> as RingStore>::Type: Field + FiniteRing
{
    let base_ring = poly_ring.base_ring();
    let ZZ = StaticRing::<i128>::RING;
    let q = base_ring.size(&ZZ).unwrap();
    let p = base_ring.characteristic(&ZZ).unwrap();
    let deg_f = poly_ring.degree(f).unwrap();
    assert!(deg_f % d == 0);
    assert!(deg_f > d);

    let field_size = q.checked_pow(u32::try_from(d).map_err(|_| AlgebraError::PrecisionExhausted)?)
        .ok_or(AlgebraError::PrecisionExhausted)?;

    for _ in 0..MAX_SPLITTING_ATTEMPTS {
        let T = poly_ring.from_terms(
            (0..(2 * d)).map(|i| (base_ring.random_element(|| rng.rand_u64()), i))
                .chain(Some((base_ring.one(), 2 * d)))
        );
        let G = if p == 2 {
            let e = ZZ.abs_log2_floor(&field_size).unwrap();
            let mut current = poly_ring.euclidean_rem(T, f);
            let mut trace = poly_ring.clone_el(&current);
            for _ in 1..e {
                current = poly_ring.euclidean_rem(poly_ring.pow(current, 2), f);
                poly_ring.add_assign_ref(&mut trace, &current);
            }
            trace
        } else {
            let exp = ZZ.half_exact(ZZ.sub(field_size, ZZ.one()));
            poly_ring.sub(pow_mod_f(poly_ring, T, f, &exp, ZZ), poly_ring.one())
        };
        let factor = make_monic(poly_ring, algorithms::eea::gcd(poly_ring.clone_el(f), G, poly_ring));
        let deg = poly_ring.degree(&factor).unwrap();
        if deg > 0 && deg < deg_f {
            return Ok(factor);
        }
    }
    Err(AlgebraError::DidNotConverge)
}

///
/// Completely factors a monic squarefree polynomial whose irreducible
/// factors all have degree `d` (e.g. one of the parts produced by
/// [`crate::algorithms::distinct_degree::distinct_degree_factorization()`])
/// into those factors, by repeated Cantor-Zassenhaus splitting.
///
#[instrument(skip_all, level = "debug")]
pub fn equal_degree_factorization<P>(poly_ring: P, f: &El<P>, d: usize, rng: &mut oorandom::Rand64) -> Result<Vec<El<P>>, AlgebraError>
    where P: PolyRingStore + Copy,
        P::Type: PolyRing + EuclideanRing,
        <BaseRing<P> as RingStore>::Type: Field + FiniteRing
{
    assert!(d >= 1);
    assert!(poly_ring.degree(f).unwrap_or(0) % d == 0);

    let mut stack = Vec::new();
    stack.push(make_monic(poly_ring, poly_ring.clone_el(f)));
    let mut result = Vec::new();
    while let Some(current) = stack.pop() {
        let deg = poly_ring.degree(&current).unwrap();
        if deg == 0 {
            continue;
        } else if deg == d {
            result.push(current);
            continue;
        }
        let factor = cantor_zassenhaus(poly_ring, &current, d, rng)?;
        let rest = poly_ring.checked_div(&current, &factor).unwrap();
        stack.push(factor);
        stack.push(rest);
    }
    return Ok(result);
}

///
/// Completely factors a nonzero polynomial over a finite field, composing
/// squarefree decomposition, distinct-degree factorization and
/// Cantor-Zassenhaus equal-degree factorization. Returns the monic
/// irreducible factors with their multiplicities; if the leading
/// coefficient of `f` is not one, it is included as a constant factor of
/// multiplicity 1.
///
#[instrument(skip_all, level = "debug")]
pub fn multistage_factorization<P>(poly_ring: P, f: &El<P>, rng: &mut oorandom::Rand64) -> Result<Vec<(El<P>, usize)>, AlgebraError>
    where P: PolyRingStore + Copy,
        P::Type: PolyRing + EuclideanRing,
        <BaseRing<P> as RingStore>::Type: Field + FiniteRing
{
    assert!(!poly_ring.is_zero(f));
    let base_ring = poly_ring.base_ring();
    let lc = base_ring.clone_el(poly_ring.lc(f).unwrap());

    let mut result = Vec::new();
    if poly_ring.degree(f).unwrap() > 0 {
        for (m, part) in algorithms::squarefree::squarefree_decomposition(poly_ring, f) {
            for (d, h) in algorithms::distinct_degree::distinct_degree_factorization(poly_ring, &part) {
                for factor in equal_degree_factorization(poly_ring, &h, d, rng)? {
                    result.push((factor, m));
                }
            }
        }
    }
    if !base_ring.is_one(&lc) {
        result.push((poly_ring.from(lc), 1));
    }
    return Ok(result);
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
    fn test_frobenius_kernel_dimension() {
        let poly_ring = DensePolyRing::new(fp(3), "X");
        // (x + 1)(x + 2)
        let f = poly_ring.from_terms([(2, 0), (1, 2)].into_iter());
        assert_eq!(2, frobenius_kernel_basis(&poly_ring, &f).len());
        // x^2 + 1 is irreducible mod 3
        let g = poly_ring.from_terms([(1, 0), (1, 2)].into_iter());
        assert_eq!(1, frobenius_kernel_basis(&poly_ring, &g).len());
    }

    #[test]
    fn test_berlekamp_factorization() {
        let poly_ring = DensePolyRing::new(fp(5), "X");
        let factors = [
            poly_ring.from_terms([(1, 0), (1, 1)].into_iter()),
            poly_ring.from_terms([(3, 0), (1, 1)].into_iter()),
            poly_ring.from_terms([(2, 0), (1, 2)].into_iter())
        ];
        let f = poly_ring.prod(factors.iter().map(|g| poly_ring.clone_el(g)));
        let mut actual = berlekamp_factorization(&poly_ring, &f).unwrap();
        assert_eq!(3, actual.len());
        for expected in &factors {
            let index = actual.iter().position(|g| poly_ring.eq_el(g, expected));
            actual.remove(index.unwrap());
        }
    }

    #[test]
    fn test_equal_degree_factorization_linear() {
        let poly_ring = DensePolyRing::new(fp(7), "X");
        let mut rng = oorandom::Rand64::new(1);
        let factors = [
            poly_ring.from_terms([(1, 0), (1, 1)].into_iter()),
            poly_ring.from_terms([(2, 0), (1, 1)].into_iter()),
            poly_ring.from_terms([(3, 0), (1, 1)].into_iter())
        ];
        let f = poly_ring.prod(factors.iter().map(|g| poly_ring.clone_el(g)));
        let mut actual = equal_degree_factorization(&poly_ring, &f, 1, &mut rng).unwrap();
        assert_eq!(3, actual.len());
        for expected in &factors {
            let index = actual.iter().position(|g| poly_ring.eq_el(g, expected));
            actual.remove(index.unwrap());
        }
    }

    #[test]
    fn test_equal_degree_factorization_char_2() {
        let poly_ring = DensePolyRing::new(fp(2), "X");
        let one = || poly_ring.base_ring().one();
        let mut rng = oorandom::Rand64::new(1);
        // the two irreducible cubics over F2
        let fst = poly_ring.from_terms([(one(), 0), (one(), 1), (one(), 3)].into_iter());
        let snd = poly_ring.from_terms([(one(), 0), (one(), 2), (one(), 3)].into_iter());
        let f = poly_ring.mul_ref(&fst, &snd);
        let actual = equal_degree_factorization(&poly_ring, &f, 3, &mut rng).unwrap();
        assert_eq!(2, actual.len());
        assert!(actual.iter().any(|g| poly_ring.eq_el(g, &fst)));
        assert!(actual.iter().any(|g| poly_ring.eq_el(g, &snd)));
    }

    #[test]
    fn test_equal_degree_factorization_single_factor() {
        let poly_ring = DensePolyRing::new(fp(7), "X");
        let mut rng = oorandom::Rand64::new(1);
        let f = poly_ring.from_terms([(1, 0), (1, 2)].into_iter());
        let actual = equal_degree_factorization(&poly_ring, &f, 2, &mut rng).unwrap();
        assert_eq!(1, actual.len());
        assert_el_eq!(&poly_ring, &f, &actual[0]);
    }

    #[test]
    fn test_multistage_factorization() {
        let poly_ring = DensePolyRing::new(fp(3), "X");
        let mut rng = oorandom::Rand64::new(1);
        let x = poly_ring.indeterminate();
        let x_plus_1 = poly_ring.from_terms([(1, 0), (1, 1)].into_iter());
        let x2_plus_1 = poly_ring.from_terms([(1, 0), (1, 2)].into_iter());
        // f = 2 * x * (x + 1)^2 * (x^2 + 1)
        let f = poly_ring.prod([
            poly_ring.from_terms([(2, 0)].into_iter()),
            poly_ring.clone_el(&x),
            poly_ring.pow(poly_ring.clone_el(&x_plus_1), 2),
            poly_ring.clone_el(&x2_plus_1)
        ].into_iter());

        let factorization = multistage_factorization(&poly_ring, &f, &mut rng).unwrap();
        assert_eq!(4, factorization.len());

        // every factor of positive degree must be irreducible
        for (factor, _) in &factorization {
            if poly_ring.degree(factor).unwrap() > 0 {
                assert!(algorithms::irreducibility::is_irreducible(&poly_ring, factor));
            }
        }
        // and the product with multiplicities recovers f
        let product = poly_ring.prod(factorization.iter()
            .map(|(factor, m)| poly_ring.pow(poly_ring.clone_el(factor), *m)));
        assert_el_eq!(&poly_ring, &f, &product);
    }

    #[test]
    fn test_multistage_factorization_non_prime_field() {
        let F4 = crate::rings::finite_field::galois_field(2, &[1, 1, 1]).unwrap();
        let poly_ring = DensePolyRing::new(&F4, "X");
        let mut rng = oorandom::Rand64::new(1);
        let a = crate::rings::finite_field::generator(&F4);
        // f = (x + a)(x + 1)^2
        let x_plus_a = poly_ring.from_terms([(F4.clone_el(&a), 0), (F4.one(), 1)].into_iter());
        let x_plus_1 = poly_ring.from_terms([(F4.one(), 0), (F4.one(), 1)].into_iter());
        let f = poly_ring.mul_ref_fst(&x_plus_a, poly_ring.pow(poly_ring.clone_el(&x_plus_1), 2));

        let factorization = multistage_factorization(&poly_ring, &f, &mut rng).unwrap();
        assert_eq!(2, factorization.len());
        assert!(factorization.iter().any(|(factor, m)| poly_ring.eq_el(factor, &x_plus_a) && *m == 1));
        assert!(factorization.iter().any(|(factor, m)| poly_ring.eq_el(factor, &x_plus_1) && *m == 2));
    }

    #[test]
    fn test_multistage_factorization_constant() {
        let poly_ring = DensePolyRing::new(fp(5), "X");
        let mut rng = oorandom::Rand64::new(1);
        let factorization = multistage_factorization(&poly_ring, &poly_ring.from_terms([(3, 0)].into_iter()), &mut rng).unwrap();
        assert_eq!(1, factorization.len());
        let product = poly_ring.prod(factorization.iter()
            .map(|(factor, m)| poly_ring.pow(poly_ring.clone_el(factor), *m)));
        assert_el_eq!(&poly_ring, &poly_ring.from_terms([(3, 0)].into_iter()), &product);
    }
}
