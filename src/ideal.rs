use crate::divisibility::*;
use crate::error::AlgebraError;
use crate::pid::*;
use crate::ring::*;

///
/// An ideal of a principal ideal ring, represented by a single generator.
///
/// The constructor accepts any non-empty set of generators and reduces it to
/// a single one by repeatedly taking greatest common divisors, so ideals of
/// the same ring can be compared for equality regardless of how they were
/// generated.
///
/// # Example
/// ```
/// # use polyfactor::ideal::Ideal;
/// # use polyfactor::primitive_int::*;
/// let ZZ = StaticRing::<i64>::RING;
/// let ideal = Ideal::new(ZZ, vec![10, 15]).unwrap();
/// assert!(ideal.contains(&5));
/// assert!(!ideal.contains(&7));
/// ```
///
pub struct Ideal<R: RingStore> {
    ring: R,
    generator: El<R>
}

impl<R> Ideal<R>
    where R: RingStore, R::Type: PrincipalIdealRing
{
    pub fn new(ring: R, generators: Vec<El<R>>) -> Result<Self, AlgebraError> {
        if generators.is_empty() {
            return Err(AlgebraError::EmptyGeneratingSet);
        }
        let generator = generators.into_iter().fold(ring.zero(), |current, gen| ring.ideal_gen(&current, &gen));
        Ok(Ideal { ring, generator })
    }

    pub fn principal(ring: R, generator: El<R>) -> Self {
        Ideal { ring, generator }
    }

    pub fn ring(&self) -> &R {
        &self.ring
    }

    pub fn generator(&self) -> &El<R> {
        &self.generator
    }

    pub fn contains(&self, el: &El<R>) -> bool {
        if self.ring.is_zero(&self.generator) {
            self.ring.is_zero(el)
        } else {
            self.ring.divides(el, &self.generator)
        }
    }

    pub fn is_zero(&self) -> bool {
        self.ring.is_zero(&self.generator)
    }

    ///
    /// Whether this ideal is generated by a single element. Always true,
    /// since ideals are only supported over principal ideal rings.
    ///
    pub fn is_principal(&self) -> bool {
        true
    }
}

impl<R> Ideal<R>
    where R: RingStore, R::Type: PrimalityRing
{
    ///
    /// Whether the quotient by this ideal is a field. In a principal ideal
    /// domain, this is the case exactly if the generator is prime.
    ///
    pub fn is_maximal(&self) -> bool {
        self.ring.is_prime(&self.generator)
    }
}

impl<R> PartialEq for Ideal<R>
    where R: RingStore, R::Type: PrincipalIdealRing
{
    fn eq(&self, other: &Self) -> bool {
        self.ring.get_ring() == other.ring.get_ring()
            && self.contains(&other.generator)
            && other.contains(&self.generator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordered::OrderedRingStore;
    use crate::primitive_int::StaticRing;
    use crate::rings::poly::*;
    use crate::rings::poly::dense_poly::DensePolyRing;
    use crate::rings::zn::Zn;

    #[test]
    fn test_generator_is_gcd() {
        let ZZ = StaticRing::<i64>::RING;
        let ideal = Ideal::new(ZZ, vec![12, 18, 30]).unwrap();
        assert_eq!(6, ZZ.abs(*ideal.generator()));
    }

    #[test]
    fn test_empty_generating_set() {
        let ZZ = StaticRing::<i64>::RING;
        assert_eq!(Some(AlgebraError::EmptyGeneratingSet), Ideal::new(ZZ, vec![]).err());
    }

    #[test]
    fn test_contains() {
        let ZZ = StaticRing::<i64>::RING;
        let ideal = Ideal::new(ZZ, vec![10, 15]).unwrap();
        assert!(ideal.contains(&5));
        assert!(ideal.contains(&-20));
        assert!(ideal.contains(&0));
        assert!(!ideal.contains(&7));

        let zero_ideal = Ideal::new(ZZ, vec![0]).unwrap();
        assert!(zero_ideal.is_zero());
        assert!(zero_ideal.contains(&0));
        assert!(!zero_ideal.contains(&5));
    }

    #[test]
    fn test_is_maximal() {
        let ZZ = StaticRing::<i64>::RING;
        assert!(Ideal::new(ZZ, vec![7]).unwrap().is_maximal());
        assert!(!Ideal::new(ZZ, vec![6]).unwrap().is_maximal());
        assert!(!Ideal::new(ZZ, vec![1]).unwrap().is_maximal());
    }

    #[test]
    fn test_eq() {
        let ZZ = StaticRing::<i64>::RING;
        assert!(Ideal::new(ZZ, vec![10, 15]).unwrap() == Ideal::new(ZZ, vec![-5]).unwrap());
        assert!(Ideal::new(ZZ, vec![10, 15]).unwrap() != Ideal::new(ZZ, vec![10]).unwrap());
    }

    #[test]
    fn test_poly_ideal() {
        let field = Zn::new(StaticRing::<i128>::RING, 2).as_field().ok().unwrap();
        let poly_ring = DensePolyRing::new(field, "X");
        let one = || poly_ring.base_ring().one();
        // (x^2 + x, x^2 + 1) = (x + 1) over F2
        let f = poly_ring.from_terms([(one(), 1), (one(), 2)].into_iter());
        let g = poly_ring.from_terms([(one(), 0), (one(), 2)].into_iter());
        let ideal = Ideal::new(&poly_ring, vec![f, g]).unwrap();
        assert_eq!(Some(1), poly_ring.degree(ideal.generator()));
        assert!(ideal.contains(&poly_ring.from_terms([(one(), 0), (one(), 1)].into_iter())));
        assert!(ideal.is_maximal());
    }
}
