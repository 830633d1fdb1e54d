use crate::error::AlgebraError;
use crate::primitive_int::StaticRing;
use crate::ring::*;
use crate::rings::field_impl::{AsField, AsFieldBase};
use crate::rings::poly::*;
use crate::rings::poly::dense_poly::DensePolyRing;
use crate::rings::quotient::QuotientRing;
use crate::rings::zn::Fp;

///
/// The finite field `Fp[x]/(m(x))` for a prime `p` and a polynomial `m`
/// that is irreducible over `Fp`.
///
pub type GaloisFieldBase = AsFieldBase<QuotientRing<DensePolyRing<Fp>>>;

///
/// The finite field `Fp[x]/(m(x))`, see [`GaloisFieldBase`].
///
pub type GaloisField = AsField<QuotientRing<DensePolyRing<Fp>>>;

///
/// Constructs the finite field `Fp[x]/(m(x))` from a prime `p` and the
/// coefficients of `m`, given in order of ascending degree.
///
/// Fails with [`AlgebraError::NotPrime`] if `p` is not prime, and with
/// [`AlgebraError::NotIrreducible`] if `m` does not generate a maximal
/// ideal of `Fp[x]`.
///
/// # Example
/// ```
/// # use polyfactor::finite::FiniteRingStore;
/// # use polyfactor::primitive_int::*;
/// # use polyfactor::rings::finite_field::*;
/// let F9 = galois_field(3, &[1, 0, 1]).unwrap();
/// assert_eq!(Some(9), F9.size(&StaticRing::<i64>::RING));
/// ```
///
pub fn galois_field(p: i128, modulus_coeffs: &[i128]) -> Result<GaloisField, AlgebraError> {
    let field = prime_field(p)?;
    let poly_ring = DensePolyRing::new(field, "x");
    let modulus = poly_ring.from_terms(modulus_coeffs.iter().enumerate()
        .map(|(i, c)| (poly_ring.base_ring().base_ring().from(*c), i)));
    let modulus_display = format!("{}", poly_ring.format(&modulus));
    if poly_ring.degree(&modulus).unwrap_or(0) == 0 {
        return Err(AlgebraError::NotIrreducible(modulus_display));
    }
    QuotientRing::new(poly_ring, modulus).as_field().map_err(|_| AlgebraError::NotIrreducible(modulus_display))
}

///
/// Constructs the prime field `Z/pZ`, failing with [`AlgebraError::NotPrime`]
/// if `p` is not prime.
///
pub fn prime_field(p: i128) -> Result<Fp, AlgebraError> {
    crate::rings::zn::Zn::new(StaticRing::<i128>::RING, p).as_field().map_err(|_| AlgebraError::NotPrime(p))
}

///
/// Returns the residue class of `x`, which generates the constructed field
/// over its prime field.
///
pub fn generator(field: &GaloisField) -> El<GaloisField> {
    let quotient = field.base_ring();
    quotient.from(quotient.base_ring().indeterminate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::divisibility::DivisibilityRingStore;
    use crate::field::FieldStore;
    use crate::finite::FiniteRingStore;

    #[test]
    fn test_galois_field_f4() {
        let F4 = galois_field(2, &[1, 1, 1]).unwrap();
        assert_eq!(Some(4), F4.size(&StaticRing::<i64>::RING));
        assert_eq!(Some(2), F4.characteristic(&StaticRing::<i64>::RING));
        crate::finite::generic_tests::test_finite_ring_axioms(&F4);

        // the class of x generates the multiplicative group of F4
        let a = generator(&F4);
        assert!(!F4.is_one(&a));
        assert!(!F4.is_one(&F4.pow(F4.clone_el(&a), 2)));
        assert!(F4.is_one(&F4.pow(a, 3)));
    }

    #[test]
    fn test_galois_field_f9() {
        let F9 = galois_field(3, &[1, 0, 1]).unwrap();
        assert_eq!(Some(9), F9.size(&StaticRing::<i64>::RING));
        crate::ring::generic_tests::test_ring_axioms(&F9, F9.elements());

        for a in F9.elements() {
            if !F9.is_zero(&a) {
                let inv = F9.invert(&a).unwrap();
                assert!(F9.is_one(&F9.mul(inv, a)));
            }
        }
    }

    #[test]
    fn test_galois_field_rejects_bad_input() {
        assert_eq!(Some(AlgebraError::NotPrime(4)), galois_field(4, &[1, 1, 1]).err());
        // x^2 + 1 = (x + 1)^2 over F2
        assert!(matches!(galois_field(2, &[1, 0, 1]).err(), Some(AlgebraError::NotIrreducible(_))));
        assert!(matches!(galois_field(5, &[3]).err(), Some(AlgebraError::NotIrreducible(_))));
    }

    #[test]
    fn test_field_division() {
        let F8 = galois_field(2, &[1, 1, 0, 1]).unwrap();
        let elements = F8.elements().collect::<Vec<_>>();
        assert_eq!(8, elements.len());
        for a in &elements {
            for b in &elements {
                if !F8.is_zero(b) {
                    let quo = F8.div(a, b);
                    assert_el_eq!(&F8, a, &F8.mul_ref_snd(quo, b));
                }
            }
        }
    }
}
