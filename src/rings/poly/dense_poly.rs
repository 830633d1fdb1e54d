use crate::algorithms;
use crate::divisibility::*;
use crate::field::Field;
use crate::finite::{FiniteRing, FiniteRingStore};
use crate::integer::{IntegerRing, IntegerRingStore};
use crate::pid::*;
use crate::primitive_int::StaticRing;
use crate::ring::*;
use crate::rings::poly::*;
use crate::rings::quotient::ResidueSystemRing;

use std::cmp::min;

///
/// The univariate polynomial ring `R[X]`. Polynomials are stored as dense
/// vectors of coefficients.
///
/// # Example
/// ```
/// # use polyfactor::ring::*;
/// # use polyfactor::rings::poly::*;
/// # use polyfactor::rings::poly::dense_poly::*;
/// # use polyfactor::primitive_int::*;
/// let ZZ = StaticRing::<i32>::RING;
/// let P = DensePolyRing::new(ZZ, "X");
/// let x_plus_1 = P.add(P.indeterminate(), P.one());
/// let binomial_coefficients = P.pow(x_plus_1, 10);
/// assert_eq!(10 * 9 * 8 * 7 * 6 / 120, *P.coefficient_at(&binomial_coefficients, 5));
/// ```
///
pub struct DensePolyRingBase<R: RingStore> {
    base_ring: R,
    unknown_name: &'static str,
    zero: El<R>
}

impl<R: RingStore + Clone> Clone for DensePolyRingBase<R> {

    fn clone(&self) -> Self {
        DensePolyRingBase {
            base_ring: <R as Clone>::clone(&self.base_ring),
            unknown_name: self.unknown_name,
            zero: self.base_ring.zero()
        }
    }
}

///
/// The univariate polynomial ring `R[X]`, with polynomials being stored as
/// dense vectors of coefficients. For details, see [`DensePolyRingBase`].
///
pub type DensePolyRing<R> = RingValue<DensePolyRingBase<R>>;

impl<R: RingStore> DensePolyRing<R> {

    pub fn new(base_ring: R, unknown_name: &'static str) -> Self {
        let zero = base_ring.zero();
        RingValue::from(DensePolyRingBase {
            base_ring,
            unknown_name,
            zero
        })
    }
}

impl<R: RingStore> DensePolyRingBase<R> {

    fn poly_div<F>(&self, lhs: &mut <Self as RingBase>::Element, rhs: &<Self as RingBase>::Element, mut left_div_lc: F) -> Option<<Self as RingBase>::Element>
        where F: FnMut(El<R>) -> Option<El<R>>
    {
        let lhs_val = std::mem::replace(lhs, self.zero());
        let (quo, rem) = algorithms::poly_div::poly_div_rem(
            RingRef::new(self),
            lhs_val,
            rhs,
            |x| left_div_lc(self.base_ring().clone_el(x)).ok_or(())
        ).ok()?;
        *lhs = rem;
        return Some(quo);
    }
}

///
/// An element of [`DensePolyRing`].
///
pub struct DensePolyRingEl<R: RingStore> {
    data: Vec<El<R>>
}

impl<R: RingStore> RingBase for DensePolyRingBase<R> {

    type Element = DensePolyRingEl<R>;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        DensePolyRingEl {
            data: val.data.iter().map(|c| self.base_ring.clone_el(c)).collect()
        }
    }

    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        for i in 0..min(lhs.data.len(), rhs.data.len()) {
            self.base_ring.add_assign_ref(&mut lhs.data[i], &rhs.data[i]);
        }
        for i in min(lhs.data.len(), rhs.data.len())..rhs.data.len() {
            lhs.data.push(self.base_ring.clone_el(&rhs.data[i]));
        }
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.add_assign_ref(lhs, &rhs);
    }

    fn sub_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        for i in 0..min(lhs.data.len(), rhs.data.len()) {
            self.base_ring.sub_assign_ref(&mut lhs.data[i], &rhs.data[i]);
        }
        for i in min(lhs.data.len(), rhs.data.len())..rhs.data.len() {
            lhs.data.push(self.base_ring.negate(self.base_ring.clone_el(&rhs.data[i])));
        }
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        for i in 0..lhs.data.len() {
            self.base_ring.negate_inplace(&mut lhs.data[i]);
        }
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.mul_assign_ref(lhs, &rhs);
    }

    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        *lhs = self.mul_ref(lhs, rhs);
    }

    fn zero(&self) -> Self::Element {
        DensePolyRingEl {
            data: Vec::new()
        }
    }

    fn from_int(&self, value: i32) -> Self::Element {
        let mut result = self.zero();
        result.data.push(self.base_ring.get_ring().from_int(value));
        return result;
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        for i in 0..min(lhs.data.len(), rhs.data.len()) {
            if !self.base_ring.eq_el(&lhs.data[i], &rhs.data[i]) {
                return false;
            }
        }
        let longer = if lhs.data.len() > rhs.data.len() { lhs } else { rhs };
        for i in min(lhs.data.len(), rhs.data.len())..longer.data.len() {
            if !self.base_ring.is_zero(&longer.data[i]) {
                return false;
            }
        }
        return true;
    }

    fn is_commutative(&self) -> bool {
        self.base_ring.is_commutative()
    }

    fn is_noetherian(&self) -> bool {
        // by Hilbert's basis theorem
        self.base_ring.is_noetherian()
    }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        super::generic_impls::dbg_poly(self, value, out, self.unknown_name)
    }

    fn square(&self, value: &mut Self::Element) {
        *value = self.mul_ref(&value, &value);
    }

    fn mul_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let lhs_len = self.degree(lhs).map(|i| i + 1).unwrap_or(0);
        let rhs_len = self.degree(rhs).map(|i| i + 1).unwrap_or(0);
        if lhs_len == 0 || rhs_len == 0 {
            return self.zero();
        }
        let mut result = Vec::with_capacity(lhs_len + rhs_len - 1);
        result.extend((0..(lhs_len + rhs_len - 1)).map(|_| self.base_ring.zero()));
        for i in 0..lhs_len {
            if self.base_ring.is_zero(&lhs.data[i]) {
                continue;
            }
            for j in 0..rhs_len {
                self.base_ring.add_assign(&mut result[i + j], self.base_ring.mul_ref(&lhs.data[i], &rhs.data[j]));
            }
        }
        return DensePolyRingEl {
            data: result
        };
    }

    fn mul_assign_int(&self, lhs: &mut Self::Element, rhs: i32) {
        for i in 0..lhs.data.len() {
            self.base_ring.get_ring().mul_assign_int(&mut lhs.data[i], rhs);
        }
    }

    fn characteristic<I>(&self, ZZ: &I) -> Option<El<I>>
        where I: IntegerRingStore, I::Type: IntegerRing
    {
        self.base_ring.get_ring().characteristic(ZZ)
    }
}

impl<R> PartialEq for DensePolyRingBase<R>
    where R: RingStore
{
    fn eq(&self, other: &Self) -> bool {
        self.base_ring.get_ring() == other.base_ring.get_ring()
    }
}

impl<R: RingStore> RingExtension for DensePolyRingBase<R> {

    type BaseRing = R;

    fn base_ring<'a>(&'a self) -> &'a Self::BaseRing {
        &self.base_ring
    }

    fn from(&self, x: El<Self::BaseRing>) -> Self::Element {
        let mut result = self.zero();
        result.data.push(x);
        return result;
    }

    fn mul_assign_base(&self, lhs: &mut Self::Element, rhs: &El<Self::BaseRing>) {
        for i in 0..lhs.data.len() {
            self.base_ring.mul_assign_ref(&mut lhs.data[i], rhs);
        }
    }
}

///
/// Iterator over all terms of an element of [`DensePolyRing`].
///
pub struct TermIterator<'a, R>
    where R: RingStore
{
    iter: std::iter::Enumerate<std::slice::Iter<'a, El<R>>>,
    ring: &'a R
}

impl<'a, R> Clone for TermIterator<'a, R>
    where R: RingStore
{
    fn clone(&self) -> Self {
        TermIterator {
            iter: self.iter.clone(),
            ring: self.ring
        }
    }
}

impl<'a, R> Iterator for TermIterator<'a, R>
    where R: RingStore
{
    type Item = (&'a El<R>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((i, c)) = self.iter.next() {
            if !self.ring.is_zero(c) {
                return Some((c, i));
            }
        }
        return None;
    }
}

impl<R> PolyRing for DensePolyRingBase<R>
    where R: RingStore
{
    type TermsIterator<'a> = TermIterator<'a, R>
        where Self: 'a;

    fn indeterminate(&self) -> Self::Element {
        let mut result = self.zero();
        result.data.extend([self.base_ring.zero(), self.base_ring.one()].into_iter());
        return result;
    }

    fn terms<'a>(&'a self, f: &'a Self::Element) -> TermIterator<'a, R> {
        TermIterator {
            iter: f.data.iter().enumerate(),
            ring: self.base_ring()
        }
    }

    fn add_assign_from_terms<I>(&self, lhs: &mut Self::Element, rhs: I)
        where I: Iterator<Item = (El<Self::BaseRing>, usize)>
    {
        for (c, i) in rhs {
            if lhs.data.len() <= i {
                lhs.data.resize_with(i + 1, || self.base_ring.zero());
            }
            self.base_ring.add_assign(&mut lhs.data[i], c);
        }
    }

    fn coefficient_at<'a>(&'a self, f: &'a Self::Element, i: usize) -> &'a El<Self::BaseRing> {
        if i < f.data.len() {
            return &f.data[i];
        } else {
            return &self.zero;
        }
    }

    fn degree(&self, f: &Self::Element) -> Option<usize> {
        for i in (0..f.data.len()).rev() {
            if !self.base_ring.is_zero(&f.data[i]) {
                return Some(i);
            }
        }
        return None;
    }

    fn div_rem_monic(&self, mut lhs: Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element) {
        assert!(self.base_ring.is_one(self.coefficient_at(rhs, self.degree(rhs).unwrap())));
        let quo = self.poly_div(&mut lhs, rhs, |x| Some(x)).unwrap();
        return (quo, lhs);
    }

    fn evaluate(&self, f: &Self::Element, value: &El<Self::BaseRing>) -> El<Self::BaseRing> {
        if self.is_zero(f) {
            return self.base_ring.zero();
        }
        let d = self.degree(f).unwrap();
        let mut current = self.base_ring.clone_el(self.coefficient_at(f, d));
        for i in (0..d).rev() {
            self.base_ring.mul_assign_ref(&mut current, value);
            self.base_ring.add_assign_ref(&mut current, self.coefficient_at(f, i));
        }
        return current;
    }
}

impl<R> Domain for DensePolyRingBase<R>
    where R: RingStore, R::Type: Domain
{}

impl<R> DivisibilityRing for DensePolyRingBase<R>
    where R: DivisibilityRingStore, R::Type: DivisibilityRing
{
    fn checked_left_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element> {
        if let Some(d) = self.degree(rhs) {
            let lc = &rhs.data[d];
            let mut lhs_copy = self.clone_el(lhs);
            let quo = self.poly_div(&mut lhs_copy, rhs, |x| self.base_ring().checked_left_div(&x, lc))?;
            if self.is_zero(&lhs_copy) {
                Some(quo)
            } else {
                None
            }
        } else if self.is_zero(lhs) {
            Some(self.zero())
        } else {
            None
        }
    }
}

impl<R> PrincipalIdealRing for DensePolyRingBase<R>
    where R: RingStore, R::Type: Field
{
    fn extended_ideal_gen(&self, lhs: &Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element, Self::Element) {
        algorithms::eea::eea(self.clone_el(lhs), self.clone_el(rhs), RingRef::new(self))
    }
}

impl<R> EuclideanRing for DensePolyRingBase<R>
    where R: RingStore, R::Type: Field
{
    fn euclidean_div_rem(&self, mut lhs: Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element) {
        let lc_inv = self.base_ring.invert(&rhs.data[self.degree(rhs).unwrap()]).unwrap();
        let quo = self.poly_div(&mut lhs, rhs, |x| Some(self.base_ring().mul_ref_snd(x, &lc_inv))).unwrap();
        return (quo, lhs);
    }

    fn euclidean_deg(&self, val: &Self::Element) -> Option<usize> {
        return Some(self.degree(val).map(|x| x + 1).unwrap_or(0));
    }
}

impl<R> PrimalityRing for DensePolyRingBase<R>
    where R: RingStore, R::Type: Field + FiniteRing
{
    fn is_prime(&self, value: &Self::Element) -> bool {
        // units and zero are not prime
        match self.degree(value) {
            None | Some(0) => false,
            Some(_) => algorithms::irreducibility::is_irreducible(RingRef::new(self), value)
        }
    }
}

impl<R> ResidueSystemRing for DensePolyRingBase<R>
    where R: RingStore, R::Type: Field + FiniteRing
{
    fn residue_system(&self, modulus: &Self::Element) -> Vec<Self::Element> {
        let d = self.degree(modulus).unwrap();
        if d == 0 {
            return vec![self.zero()];
        }
        let base_elements = self.base_ring.elements().collect::<Vec<_>>();
        let mut digits = vec![0; d];
        let mut result = Vec::new();
        loop {
            result.push(RingRef::new(self).from_terms(
                digits.iter().enumerate().map(|(i, j)| (self.base_ring.clone_el(&base_elements[*j]), i))
            ));
            let mut i = 0;
            while i < d && digits[i] == base_elements.len() - 1 {
                digits[i] = 0;
                i += 1;
            }
            if i == d {
                return result;
            }
            digits[i] += 1;
        }
    }

    fn residue_count<I>(&self, modulus: &Self::Element, ZZ: &I) -> Option<El<I>>
        where I: IntegerRingStore, I::Type: IntegerRing
    {
        let d = self.degree(modulus).unwrap();
        let base_size = self.base_ring.size(&StaticRing::<i128>::RING)?;
        let count = base_size.checked_pow(u32::try_from(d).ok()?)?;
        Some(ZZ.get_ring().from_i128(count))
    }

    fn random_residue<G: FnMut() -> u64>(&self, modulus: &Self::Element, mut rng: G) -> Self::Element {
        let d = self.degree(modulus).unwrap();
        RingRef::new(self).from_terms((0..d).map(|i| (self.base_ring.random_element(&mut rng), i)))
    }
}

impl<R> HashableElRing for DensePolyRingBase<R>
    where R: RingStore, R::Type: HashableElRing
{
    fn hash<H: std::hash::Hasher>(&self, el: &Self::Element, h: &mut H) {
        for (c, i) in self.terms(el) {
            h.write_usize(i);
            self.base_ring.get_ring().hash(c, h);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::zn::Zn;
    use crate::primitive_int::StaticRing;

    fn edge_case_elements<P: PolyRingStore>(poly_ring: P) -> impl Iterator<Item = El<P>>
        where P::Type: PolyRing
    {
        let base_ring = poly_ring.base_ring();
        vec![
            poly_ring.from_terms([].into_iter()),
            poly_ring.from_terms([(base_ring.from_int(1), 0)].into_iter()),
            poly_ring.from_terms([(base_ring.from_int(1), 1)].into_iter()),
            poly_ring.from_terms([(base_ring.from_int(1), 0), (base_ring.from_int(1), 1)].into_iter()),
            poly_ring.from_terms([(base_ring.from_int(-1), 0)].into_iter()),
            poly_ring.from_terms([(base_ring.from_int(-1), 1)].into_iter()),
            poly_ring.from_terms([(base_ring.from_int(-1), 0), (base_ring.from_int(1), 1)].into_iter()),
            poly_ring.from_terms([(base_ring.from_int(1), 0), (base_ring.from_int(-1), 1)].into_iter())
        ].into_iter()
    }

    #[test]
    fn test_ring_axioms() {
        let poly_ring = DensePolyRing::new(Zn::new(StaticRing::<i128>::RING, 7), "X");
        crate::ring::generic_tests::test_ring_axioms(&poly_ring, edge_case_elements(&poly_ring));
    }

    #[test]
    fn test_poly_ring_axioms() {
        let base_ring = Zn::new(StaticRing::<i128>::RING, 7);
        let poly_ring = DensePolyRing::new(base_ring, "X");
        crate::rings::poly::generic_tests::test_poly_ring_axioms(&poly_ring, poly_ring.base_ring().elements());
    }

    #[test]
    fn test_divisibility_ring_axioms() {
        let poly_ring = DensePolyRing::new(Zn::new(StaticRing::<i128>::RING, 7), "X");
        crate::divisibility::generic_tests::test_divisibility_axioms(&poly_ring, edge_case_elements(&poly_ring));
    }

    #[test]
    fn test_euclidean_ring_axioms() {
        let field = Zn::new(StaticRing::<i128>::RING, 7).as_field().ok().unwrap();
        let poly_ring = DensePolyRing::new(field, "X");
        crate::pid::generic_tests::test_euclidean_ring_axioms(&poly_ring, edge_case_elements(&poly_ring));
    }

    #[test]
    fn test_principal_ideal_ring_axioms() {
        let field = Zn::new(StaticRing::<i128>::RING, 7).as_field().ok().unwrap();
        let poly_ring = DensePolyRing::new(field, "X");
        crate::pid::generic_tests::test_principal_ideal_ring_axioms(&poly_ring, edge_case_elements(&poly_ring));
    }

    #[test]
    fn test_evaluate() {
        let ZZX = DensePolyRing::new(StaticRing::<i64>::RING, "X");
        let f = ZZX.from_terms([(1, 0), (2, 1), (3, 3)].into_iter());
        assert_eq!(1, ZZX.evaluate(&f, &0));
        assert_eq!(6, ZZX.evaluate(&f, &1));
        assert_eq!(29, ZZX.evaluate(&f, &2));
        assert_eq!(0, ZZX.evaluate(&ZZX.zero(), &2));
    }

    #[test]
    fn test_is_prime() {
        let field = Zn::new(StaticRing::<i128>::RING, 2).as_field().ok().unwrap();
        let poly_ring = DensePolyRing::new(field, "X");
        let one = || poly_ring.base_ring().one();
        let irreducible = poly_ring.from_terms([(one(), 0), (one(), 1), (one(), 2)].into_iter());
        let reducible = poly_ring.from_terms([(one(), 0), (one(), 2)].into_iter());
        assert!(poly_ring.is_prime(&irreducible));
        assert!(!poly_ring.is_prime(&reducible));
        assert!(!poly_ring.is_prime(&poly_ring.one()));
        assert!(!poly_ring.is_prime(&poly_ring.zero()));
    }

    #[test]
    fn test_residue_system() {
        let field = Zn::new(StaticRing::<i128>::RING, 3).as_field().ok().unwrap();
        let poly_ring = DensePolyRing::new(field, "X");
        let one = || poly_ring.base_ring().one();
        let modulus = poly_ring.from_terms([(one(), 0), (one(), 2)].into_iter());
        let residues = poly_ring.get_ring().residue_system(&modulus);
        assert_eq!(9, residues.len());
        assert_eq!(Some(9), poly_ring.get_ring().residue_count(&modulus, &StaticRing::<i64>::RING));
        for (i, a) in residues.iter().enumerate() {
            assert!(poly_ring.degree(a).unwrap_or(0) < 2);
            for b in &residues[(i + 1)..] {
                assert!(!poly_ring.eq_el(a, b));
            }
        }
    }
}
