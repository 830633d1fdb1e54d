use crate::ring::*;

pub mod dense_poly;

///
/// Trait for all rings that represent the polynomial ring `R[X]` with
/// any base ring R.
///
pub trait PolyRing: RingExtension + Sized {

    type TermsIterator<'a>: Iterator<Item = (&'a El<Self::BaseRing>, usize)>
        where Self: 'a;

    fn indeterminate(&self) -> Self::Element;

    ///
    /// Iterates over the nonzero terms of the polynomial, in order of
    /// ascending degree.
    ///
    fn terms<'a>(&'a self, f: &'a Self::Element) -> Self::TermsIterator<'a>;

    fn add_assign_from_terms<I>(&self, lhs: &mut Self::Element, rhs: I)
        where I: Iterator<Item = (El<Self::BaseRing>, usize)>
    {
        let self_ring = RingRef::new(self);
        self.add_assign(lhs, self_ring.sum(
            rhs.map(|(c, i)| self.mul(self.from(c), self_ring.pow(self.indeterminate(), i)))
        ));
    }

    fn coefficient_at<'a>(&'a self, f: &'a Self::Element, i: usize) -> &'a El<Self::BaseRing>;

    fn degree(&self, f: &Self::Element) -> Option<usize>;

    ///
    /// Polynomial division, assuming that the leading coefficient of `rhs`
    /// is one.
    ///
    fn div_rem_monic(&self, lhs: Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element);

    ///
    /// Evaluates the polynomial at the given point of the base ring.
    ///
    fn evaluate(&self, f: &Self::Element, value: &El<Self::BaseRing>) -> El<Self::BaseRing> {
        // Horner scheme over the nonzero terms, from highest to lowest degree
        let base_ring = self.base_ring();
        let terms = self.terms(f).collect::<Vec<_>>();
        let mut current = base_ring.zero();
        let mut current_deg = self.degree(f).unwrap_or(0);
        for (c, i) in terms.into_iter().rev() {
            current = base_ring.mul(current, base_ring.pow(base_ring.clone_el(value), current_deg - i));
            base_ring.add_assign_ref(&mut current, c);
            current_deg = i;
        }
        return base_ring.mul(current, base_ring.pow(base_ring.clone_el(value), current_deg));
    }
}

pub trait PolyRingStore: RingStore
    where Self::Type: PolyRing
{
    delegate!{ fn indeterminate(&self) -> El<Self> }
    delegate!{ fn degree(&self, f: &El<Self>) -> Option<usize> }
    delegate!{ fn div_rem_monic(&self, lhs: El<Self>, rhs: &El<Self>) -> (El<Self>, El<Self>) }

    fn coefficient_at<'a>(&'a self, f: &'a El<Self>, i: usize) -> &'a El<<Self::Type as RingExtension>::BaseRing> {
        self.get_ring().coefficient_at(f, i)
    }

    fn terms<'a>(&'a self, f: &'a El<Self>) -> <Self::Type as PolyRing>::TermsIterator<'a> {
        self.get_ring().terms(f)
    }

    fn from_terms<I>(&self, iter: I) -> El<Self>
        where I: Iterator<Item = (El<<Self::Type as RingExtension>::BaseRing>, usize)>,
    {
        let mut result = self.zero();
        self.get_ring().add_assign_from_terms(&mut result, iter);
        return result;
    }

    ///
    /// As [`PolyRingStore::from_terms()`], but stops and propagates the error
    /// as soon as the computation of a term fails.
    ///
    fn try_from_terms<E, I>(&self, iter: I) -> Result<El<Self>, E>
        where I: Iterator<Item = Result<(El<<Self::Type as RingExtension>::BaseRing>, usize), E>>
    {
        let mut terms = Vec::new();
        for term in iter {
            terms.push(term?);
        }
        return Ok(self.from_terms(terms.into_iter()));
    }

    fn lc<'a>(&'a self, f: &'a El<Self>) -> Option<&'a El<<Self::Type as RingExtension>::BaseRing>> {
        Some(self.coefficient_at(f, self.degree(f)?))
    }

    fn evaluate(&self, f: &El<Self>, value: &El<<Self::Type as RingExtension>::BaseRing>) -> El<<Self::Type as RingExtension>::BaseRing> {
        self.get_ring().evaluate(f, value)
    }
}

impl<R: RingStore> PolyRingStore for R
    where R::Type: PolyRing
{}

///
/// Computes the formal derivative of the given polynomial.
///
pub fn derive_poly<P>(ring: P, f: &El<P>) -> El<P>
    where P: PolyRingStore,
        P::Type: PolyRing
{
    ring.from_terms(ring.terms(f)
        .filter(|(_, i)| *i > 0)
        .map(|(c, i)| (ring.base_ring().mul_int_ref(c, i as i32), i - 1))
    )
}

pub mod generic_impls {
    use crate::ring::*;
    use super::PolyRing;

    pub fn dbg_poly<P: PolyRing>(ring: &P, el: &P::Element, out: &mut std::fmt::Formatter, unknown_name: &str) -> std::fmt::Result {
        let mut terms = ring.terms(el);
        let print_unknown = |i: usize, out: &mut std::fmt::Formatter| {
            if i == 0 {
                // print nothing
                Ok(())
            } else if i == 1 {
                write!(out, "{}", unknown_name)
            } else {
                write!(out, "{}^{}", unknown_name, i)
            }
        };
        if let Some((c, i)) = terms.next() {
            ring.base_ring().get_ring().dbg(c, out)?;
            print_unknown(i, out)?;
        } else {
            write!(out, "0")?;
        }
        while let Some((c, i)) = terms.next() {
            write!(out, " + ")?;
            ring.base_ring().get_ring().dbg(c, out)?;
            print_unknown(i, out)?;
        }
        return Ok(());
    }
}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {
    use super::*;

    pub fn test_poly_ring_axioms<R: PolyRingStore, I: Iterator<Item = El<<R::Type as RingExtension>::BaseRing>>>(ring: R, interesting_base_ring_elements: I)
        where R::Type: PolyRing
    {
        let x = ring.indeterminate();
        let elements = interesting_base_ring_elements.collect::<Vec<_>>();

        // test linear independence of X
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    for d in &elements {
                        let a_bx = ring.add(ring.from_ref(a), ring.mul_ref_snd(ring.from_ref(b), &x));
                        let c_dx = ring.add(ring.from_ref(c), ring.mul_ref_snd(ring.from_ref(d), &x));
                        assert!(ring.eq_el(&a_bx, &c_dx) == (ring.base_ring().eq_el(a, c) && ring.base_ring().eq_el(b, d)));
                    }
                }
            }
        }

        // multiplication is convolution of coefficients
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    for d in &elements {
                        let a_bx = ring.add(ring.from_ref(a), ring.mul_ref_snd(ring.from_ref(b), &x));
                        let c_dx = ring.add(ring.from_ref(c), ring.mul_ref_snd(ring.from_ref(d), &x));
                        let result = <_ as RingStore>::sum(&ring, [
                            ring.mul(ring.from_ref(a), ring.from_ref(c)),
                            ring.mul(ring.from_ref(a), ring.mul_ref_snd(ring.from_ref(d), &x)),
                            ring.mul(ring.from_ref(b), ring.mul_ref_snd(ring.from_ref(c), &x)),
                            ring.mul(ring.from_ref(b), ring.mul(ring.from_ref(d), ring.pow(ring.clone_el(&x), 2)))
                        ].into_iter());
                        assert_el_eq!(&ring, &result, &ring.mul(a_bx, c_dx));
                    }
                }
            }
        }

        // test terms(), from_terms()
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    let f = <_ as RingStore>::sum(&ring, [
                        ring.from_ref(a),
                        ring.mul_ref_snd(ring.from_ref(b), &x),
                        ring.mul(ring.from_ref(c), ring.pow(ring.clone_el(&x), 3))
                    ].into_iter());
                    let actual = ring.from_terms([(ring.base_ring().clone_el(a), 0), (ring.base_ring().clone_el(c), 3), (ring.base_ring().clone_el(b), 1)].into_iter());
                    assert_el_eq!(&ring, &f, &actual);
                    assert_el_eq!(&ring, &f, &ring.from_terms(ring.terms(&f).map(|(c, i)| (ring.base_ring().clone_el(c), i))));
                }
            }
        }

        // test div_rem_monic()
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    let f = ring.from_terms([(ring.base_ring().clone_el(a), 0), (ring.base_ring().clone_el(b), 3)].into_iter());
                    let g = ring.from_terms([(ring.base_ring().negate(ring.base_ring().clone_el(c)), 0), (ring.base_ring().one(), 1)].into_iter());

                    let (quo, rem) = ring.div_rem_monic(ring.clone_el(&f), &g);
                    assert_el_eq!(
                        &ring,
                        &ring.from_terms([(ring.base_ring().add_ref_fst(a, ring.base_ring().mul_ref_fst(b, ring.base_ring().pow(ring.base_ring().clone_el(c), 3))), 0)].into_iter()),
                        &rem
                    );
                    assert_el_eq!(
                        &ring,
                        &f,
                        &ring.add(rem, ring.mul(quo, g))
                    );
                }
            }
        }

        // test evaluate()
        for a in &elements {
            for b in &elements {
                let f = ring.add(ring.from_ref(a), ring.mul_ref_snd(ring.from_ref(b), &x));
                for v in &elements {
                    let expected = ring.base_ring().add_ref_fst(a, ring.base_ring().mul_ref(b, v));
                    assert!(ring.base_ring().eq_el(&expected, &ring.evaluate(&f, v)));
                }
            }
        }
    }
}
