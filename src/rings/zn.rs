use crate::primitive_int::StaticRing;
use crate::rings::field_impl::{AsField, AsFieldBase};
use crate::rings::quotient::{QuotientRing, QuotientRingBase};

///
/// The ring `Z/nZ` of integers modulo `n`, as a quotient of [`StaticRing`]
/// over `i128`. Create it as
/// ```
/// # use polyfactor::primitive_int::*;
/// # use polyfactor::rings::zn::*;
/// let Z17 = Zn::new(StaticRing::<i128>::RING, 17);
/// ```
///
pub type ZnBase = QuotientRingBase<StaticRing<i128>>;

///
/// The ring `Z/nZ`, see [`ZnBase`].
///
pub type Zn = QuotientRing<StaticRing<i128>>;

///
/// The prime field `Z/pZ`, obtained from [`Zn::as_field()`].
///
pub type FpBase = AsFieldBase<Zn>;

///
/// The prime field `Z/pZ`, see [`FpBase`].
///
pub type Fp = AsField<Zn>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::divisibility::DivisibilityRingStore;
    use crate::field::FieldStore;
    use crate::finite::FiniteRingStore;
    use crate::primitive_int::StaticRing;
    use crate::ring::*;

    #[test]
    fn test_ring_axioms() {
        let ring = Zn::new(StaticRing::<i128>::RING, 17);
        crate::ring::generic_tests::test_ring_axioms(&ring, (-9..9).map(|x| ring.from_int(x)));
    }

    #[test]
    fn test_finite_ring_axioms() {
        crate::finite::generic_tests::test_finite_ring_axioms(&Zn::new(StaticRing::<i128>::RING, 17));
        crate::finite::generic_tests::test_finite_ring_axioms(&Zn::new(StaticRing::<i128>::RING, 12));
    }

    #[test]
    fn test_as_field() {
        let field = Zn::new(StaticRing::<i128>::RING, 17).as_field().ok().unwrap();
        for a in field.elements() {
            if !field.is_zero(&a) {
                assert_el_eq!(&field, &field.one(), &field.div(&a, &a));
                let inv = field.invert(&a).unwrap();
                assert_el_eq!(&field, &field.one(), &field.mul(inv, a));
            }
        }
        assert!(Zn::new(StaticRing::<i128>::RING, 15).as_field().is_err());
    }

    #[test]
    fn test_characteristic() {
        let ring = Zn::new(StaticRing::<i128>::RING, 17);
        assert_eq!(Some(17), ring.characteristic(&StaticRing::<i128>::RING));
        let field = Zn::new(StaticRing::<i128>::RING, 17).as_field().ok().unwrap();
        assert_eq!(Some(17), field.characteristic(&StaticRing::<i128>::RING));
    }

    #[test]
    fn test_smallest_lift() {
        let ring = Zn::new(StaticRing::<i128>::RING, 25);
        assert_eq!(12, ring.get_ring().smallest_lift(12));
        assert_eq!(-12, ring.get_ring().smallest_lift(13));
        assert_eq!(23, ring.get_ring().smallest_positive_lift(-2));
    }

    #[test]
    fn test_hash_compatible_with_eq() {
        let ring = Zn::new(StaticRing::<i128>::RING, 7);
        assert_eq!(ring.default_hash(&-1), ring.default_hash(&6));
        assert_eq!(ring.default_hash(&8), ring.default_hash(&1));
    }
}
