use std::rc::Rc;

use crate::integer::{IntegerRing, IntegerRingStore};

///
/// Basic trait for objects that have a ring structure.
///
/// Implementors of this trait should provide the basic ring operations,
/// and additionally operators for displaying and equality testing. If
/// a performance advantage can be achieved by accepting some arguments by
/// reference instead of by value, the default-implemented functions for
/// ring operations on references should be overwritten.
///
/// Note that usually, this trait will not be used directly, but always
/// through a [`RingStore`]. In more detail, while this trait
/// defines the functionality, [`RingStore`] allows abstracting
/// the storage - everything that allows access to a ring then is a
/// [`RingStore`]. For example, references or shared pointers
/// to rings. If you want to use rings directly by value, some technical
/// details make it necessary to use the no-op container [`RingValue`].
///
/// Rings themselves are compared by structural equality via [`PartialEq`],
/// never by identity. Two ring objects that compare equal must have exactly
/// the same elements and operations.
///
pub trait RingBase: PartialEq {

    type Element;

    fn clone_el(&self, val: &Self::Element) -> Self::Element;
    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) { self.add_assign(lhs, self.clone_el(rhs)) }
    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element);
    fn sub_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) { self.sub_assign(lhs, self.clone_el(rhs)) }
    fn negate_inplace(&self, lhs: &mut Self::Element);
    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element);
    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) { self.mul_assign(lhs, self.clone_el(rhs)) }
    fn zero(&self) -> Self::Element { self.from_int(0) }
    fn one(&self) -> Self::Element { self.from_int(1) }
    fn neg_one(&self) -> Self::Element { self.from_int(-1) }
    fn from_int(&self, value: i32) -> Self::Element;
    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool;
    fn is_zero(&self, value: &Self::Element) -> bool { self.eq_el(value, &self.zero()) }
    fn is_one(&self, value: &Self::Element) -> bool { self.eq_el(value, &self.one()) }
    fn is_neg_one(&self, value: &Self::Element) -> bool { self.eq_el(value, &self.neg_one()) }
    fn is_commutative(&self) -> bool;
    fn is_noetherian(&self) -> bool;
    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result;

    ///
    /// Returns the characteristic of this ring, if it fits within the given
    /// integer ring. The characteristic is the additive order of 1, with the
    /// convention that it is 0 if 1 has infinite additive order.
    ///
    fn characteristic<I>(&self, ZZ: &I) -> Option<El<I>>
        where I: IntegerRingStore, I::Type: IntegerRing;

    fn square(&self, value: &mut Self::Element) {
        let copy = self.clone_el(value);
        self.mul_assign(value, copy);
    }

    fn negate(&self, mut value: Self::Element) -> Self::Element {
        self.negate_inplace(&mut value);
        return value;
    }

    fn sub_assign(&self, lhs: &mut Self::Element, mut rhs: Self::Element) {
        self.negate_inplace(&mut rhs);
        self.add_assign(lhs, rhs);
    }

    fn mul_assign_int(&self, lhs: &mut Self::Element, rhs: i32) {
        self.mul_assign(lhs, self.from_int(rhs));
    }

    fn mul_int_ref(&self, lhs: &Self::Element, rhs: i32) -> Self::Element {
        let mut result = self.clone_el(lhs);
        self.mul_assign_int(&mut result, rhs);
        return result;
    }

    fn add_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let mut result = self.clone_el(lhs);
        self.add_assign_ref(&mut result, rhs);
        return result;
    }

    fn add_ref_fst(&self, lhs: &Self::Element, mut rhs: Self::Element) -> Self::Element {
        self.add_assign_ref(&mut rhs, lhs);
        return rhs;
    }

    fn add_ref_snd(&self, mut lhs: Self::Element, rhs: &Self::Element) -> Self::Element {
        self.add_assign_ref(&mut lhs, rhs);
        return lhs;
    }

    fn add(&self, mut lhs: Self::Element, rhs: Self::Element) -> Self::Element {
        self.add_assign(&mut lhs, rhs);
        return lhs;
    }

    fn sub_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let mut result = self.clone_el(lhs);
        self.sub_assign_ref(&mut result, rhs);
        return result;
    }

    fn sub_ref_fst(&self, lhs: &Self::Element, mut rhs: Self::Element) -> Self::Element {
        self.sub_assign_ref(&mut rhs, lhs);
        self.negate_inplace(&mut rhs);
        return rhs;
    }

    fn sub_ref_snd(&self, mut lhs: Self::Element, rhs: &Self::Element) -> Self::Element {
        self.sub_assign_ref(&mut lhs, rhs);
        return lhs;
    }

    fn sub(&self, mut lhs: Self::Element, rhs: Self::Element) -> Self::Element {
        self.sub_assign(&mut lhs, rhs);
        return lhs;
    }

    fn mul_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let mut result = self.clone_el(lhs);
        self.mul_assign_ref(&mut result, rhs);
        return result;
    }

    fn mul_ref_fst(&self, lhs: &Self::Element, mut rhs: Self::Element) -> Self::Element {
        if self.is_commutative() {
            self.mul_assign_ref(&mut rhs, lhs);
            return rhs;
        } else {
            let mut result = self.clone_el(lhs);
            self.mul_assign(&mut result, rhs);
            return result;
        }
    }

    fn mul_ref_snd(&self, mut lhs: Self::Element, rhs: &Self::Element) -> Self::Element {
        self.mul_assign_ref(&mut lhs, rhs);
        return lhs;
    }

    fn mul(&self, mut lhs: Self::Element, rhs: Self::Element) -> Self::Element {
        self.mul_assign(&mut lhs, rhs);
        return lhs;
    }
}

macro_rules! delegate {
    (fn $name:ident (&self, $($pname:ident: $ptype:ty),*) -> $rtype:ty) => {
        fn $name (&self, $($pname: $ptype),*) -> $rtype {
            self.get_ring().$name($($pname),*)
        }
    };
    (fn $name:ident (&self) -> $rtype:ty) => {
        fn $name (&self) -> $rtype {
            self.get_ring().$name()
        }
    };
}

///
/// Basic trait for objects that store (in some sense) a ring. This can
/// be a ring-by-value, a reference to a ring, or a shared pointer to a ring.
///
/// As opposed to [`RingBase`], which is responsible for the
/// functionality and ring operations, this trait is solely responsible for
/// the storage, and provides a convenient interface by delegating to the
/// stored [`RingBase`] object.
///
pub trait RingStore: Sized {

    type Type: RingBase;

    fn get_ring<'a>(&'a self) -> &'a Self::Type;

    delegate!{ fn clone_el(&self, val: &El<Self>) -> El<Self> }
    delegate!{ fn add_assign_ref(&self, lhs: &mut El<Self>, rhs: &El<Self>) -> () }
    delegate!{ fn add_assign(&self, lhs: &mut El<Self>, rhs: El<Self>) -> () }
    delegate!{ fn sub_assign_ref(&self, lhs: &mut El<Self>, rhs: &El<Self>) -> () }
    delegate!{ fn negate_inplace(&self, lhs: &mut El<Self>) -> () }
    delegate!{ fn mul_assign(&self, lhs: &mut El<Self>, rhs: El<Self>) -> () }
    delegate!{ fn mul_assign_ref(&self, lhs: &mut El<Self>, rhs: &El<Self>) -> () }
    delegate!{ fn zero(&self) -> El<Self> }
    delegate!{ fn one(&self) -> El<Self> }
    delegate!{ fn neg_one(&self) -> El<Self> }
    delegate!{ fn from_int(&self, value: i32) -> El<Self> }
    delegate!{ fn eq_el(&self, lhs: &El<Self>, rhs: &El<Self>) -> bool }
    delegate!{ fn is_zero(&self, value: &El<Self>) -> bool }
    delegate!{ fn is_one(&self, value: &El<Self>) -> bool }
    delegate!{ fn is_neg_one(&self, value: &El<Self>) -> bool }
    delegate!{ fn is_commutative(&self) -> bool }
    delegate!{ fn is_noetherian(&self) -> bool }
    delegate!{ fn negate(&self, value: El<Self>) -> El<Self> }
    delegate!{ fn sub_assign(&self, lhs: &mut El<Self>, rhs: El<Self>) -> () }
    delegate!{ fn square(&self, value: &mut El<Self>) -> () }
    delegate!{ fn mul_assign_int(&self, lhs: &mut El<Self>, rhs: i32) -> () }
    delegate!{ fn mul_int_ref(&self, lhs: &El<Self>, rhs: i32) -> El<Self> }
    delegate!{ fn add_ref(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn add_ref_fst(&self, lhs: &El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn add_ref_snd(&self, lhs: El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn add(&self, lhs: El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn sub_ref(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn sub_ref_fst(&self, lhs: &El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn sub_ref_snd(&self, lhs: El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn sub(&self, lhs: El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn mul_ref(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn mul_ref_fst(&self, lhs: &El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn mul_ref_snd(&self, lhs: El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn mul(&self, lhs: El<Self>, rhs: El<Self>) -> El<Self> }

    fn characteristic<I>(&self, ZZ: &I) -> Option<El<I>>
        where I: IntegerRingStore, I::Type: IntegerRing
    {
        self.get_ring().characteristic(ZZ)
    }

    fn sum<I>(&self, els: I) -> El<Self>
        where I: Iterator<Item = El<Self>>
    {
        els.fold(self.zero(), |a, b| self.add(a, b))
    }

    fn prod<I>(&self, els: I) -> El<Self>
        where I: Iterator<Item = El<Self>>
    {
        els.fold(self.one(), |a, b| self.mul(a, b))
    }

    fn base_ring<'a>(&'a self) -> &'a <Self::Type as RingExtension>::BaseRing
        where Self::Type: RingExtension
    {
        self.get_ring().base_ring()
    }

    fn from(&self, x: El<<Self::Type as RingExtension>::BaseRing>) -> El<Self>
        where Self::Type: RingExtension
    {
        self.get_ring().from(x)
    }

    fn from_ref(&self, x: &El<<Self::Type as RingExtension>::BaseRing>) -> El<Self>
        where Self::Type: RingExtension
    {
        self.get_ring().from_ref(x)
    }

    ///
    /// Raises an element to a nonnegative power, via square-and-multiply.
    ///
    fn pow(&self, x: El<Self>, power: usize) -> El<Self> {
        if power == 0 {
            return self.one();
        } else if power == 1 {
            return x;
        }
        let mut result = self.one();
        for i in (0..(usize::BITS - power.leading_zeros())).rev() {
            self.square(&mut result);
            if (power >> i) & 1 == 1 {
                self.mul_assign_ref(&mut result, &x);
            }
        }
        return result;
    }

    fn format<'a>(&'a self, value: &'a El<Self>) -> RingElementDisplayWrapper<'a, Self> {
        RingElementDisplayWrapper { ring: self, element: value }
    }

    fn println(&self, value: &El<Self>) {
        println!("{}", self.format(value));
    }
}

pub struct RingElementDisplayWrapper<'a, R: RingStore> {
    ring: &'a R,
    element: &'a El<R>
}

impl<'a, R: RingStore> std::fmt::Display for RingElementDisplayWrapper<'a, R> {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.ring.get_ring().dbg(self.element, f)
    }
}

///
/// Trait for rings that are built on top of a base ring, e.g. polynomial
/// rings or quotient rings. The base ring is stored, and its elements can
/// be mapped into the extension via the canonical map.
///
pub trait RingExtension: RingBase {

    type BaseRing: RingStore;

    fn base_ring<'a>(&'a self) -> &'a Self::BaseRing;
    fn from(&self, x: El<Self::BaseRing>) -> Self::Element;

    fn from_ref(&self, x: &El<Self::BaseRing>) -> Self::Element {
        self.from(self.base_ring().clone_el(x))
    }

    fn mul_assign_base(&self, lhs: &mut Self::Element, rhs: &El<Self::BaseRing>) {
        let factor = self.from_ref(rhs);
        self.mul_assign(lhs, factor);
    }
}

///
/// Trait for rings whose elements can be hashed. The hash must be compatible
/// with [`RingBase::eq_el()`].
///
pub trait HashableElRing: RingBase {

    fn hash<H: std::hash::Hasher>(&self, el: &Self::Element, h: &mut H);
}

///
/// [`RingStore`] for [`HashableElRing`]s
///
pub trait HashableElRingStore: RingStore
    where Self::Type: HashableElRing
{
    fn hash<H: std::hash::Hasher>(&self, el: &El<Self>, h: &mut H) {
        self.get_ring().hash(el, h)
    }

    fn default_hash(&self, el: &El<Self>) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.hash(el, &mut hasher);
        return <std::collections::hash_map::DefaultHasher as std::hash::Hasher>::finish(&hasher);
    }
}

impl<R> HashableElRingStore for R
    where R: RingStore,
        R::Type: HashableElRing
{}

///
/// Type alias for the element type of a [`RingStore`].
///
pub type El<R> = <<R as RingStore>::Type as RingBase>::Element;

///
/// Type alias for the base ring of a [`RingStore`] over a [`RingExtension`].
///
pub type BaseRing<R> = <<R as RingStore>::Type as RingExtension>::BaseRing;

///
/// The most fundamental [`RingStore`]. It is basically a no-op container,
/// i.e. stores a [`RingBase`] object by value, and allows accessing it.
///
/// # Why is this necessary?
///
/// We cannot implement
/// ```ignore
/// impl<R: RingBase> RingStore for R {}
/// impl<'a, R: RingStore> RingStore for &'a R {}
/// ```
/// since this might cause conflicting implementations. Instead, we implement
/// ```ignore
/// impl<R: RingBase> RingStore for RingValue<R> {}
/// impl<'a, R: RingStore> RingStore for &'a R {}
/// ```
/// To simplify working with this, create your ring type as
/// ```ignore
/// struct ABase { ... }
/// impl RingBase for ABase { ... }
/// ```
/// and then provide a type alias
/// ```ignore
/// type A = RingValue<ABase>;
/// ```
///
#[derive(Copy, Clone)]
pub struct RingValue<R: RingBase> {
    ring: R
}

impl<R: RingBase> RingValue<R> {

    pub const fn from(value: R) -> Self {
        RingValue { ring: value }
    }

    pub fn into(self) -> R {
        self.ring
    }
}

impl<R: RingBase> RingStore for RingValue<R> {

    type Type = R;

    fn get_ring(&self) -> &R {
        &self.ring
    }
}

///
/// The second most basic [`RingStore`]. Similarly to [`RingValue`] it is
/// just a no-op container, but stores a reference to a [`RingBase`] object.
///
/// This is mainly used when implementing [`RingBase`]-level functionality
/// in terms of higher-level algorithms, which require a [`RingStore`].
///
pub struct RingRef<'a, R: RingBase> {
    ring: &'a R
}

impl<'a, R: RingBase> Clone for RingRef<'a, R> {

    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, R: RingBase> Copy for RingRef<'a, R> {}

impl<'a, R: RingBase> RingRef<'a, R> {

    pub const fn new(value: &'a R) -> Self {
        RingRef { ring: value }
    }
}

impl<'a, R: RingBase> RingStore for RingRef<'a, R> {

    type Type = R;

    fn get_ring(&self) -> &R {
        self.ring
    }
}

impl<'a, R: RingStore> RingStore for &'a R {

    type Type = <R as RingStore>::Type;

    fn get_ring(&self) -> &Self::Type {
        (**self).get_ring()
    }
}

impl<R: RingStore> RingStore for Rc<R> {

    type Type = <R as RingStore>::Type;

    fn get_ring(&self) -> &Self::Type {
        (**self).get_ring()
    }
}

///
/// Asserts that two ring elements are equal, printing both via the ring's
/// element formatting if they are not.
///
#[macro_export]
macro_rules! assert_el_eq {
    ($ring:expr, $lhs:expr, $rhs:expr) => {
        match (&$ring, &$lhs, &$rhs) {
            (ring_val, lhs_val, rhs_val) => {
                assert!(
                    $crate::ring::RingStore::eq_el(ring_val, lhs_val, rhs_val),
                    "Assertion failed: {} != {}",
                    $crate::ring::RingStore::format(ring_val, lhs_val),
                    $crate::ring::RingStore::format(ring_val, rhs_val)
                );
            }
        }
    }
}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {
    use super::*;

    pub fn test_ring_axioms<R: RingStore, I: Iterator<Item = El<R>>>(ring: R, edge_case_elements: I) {
        let elements = edge_case_elements.collect::<Vec<_>>();
        let zero = ring.zero();
        let one = ring.one();

        // check self-subtraction
        for a in &elements {
            assert_el_eq!(&ring, &zero, &ring.sub_ref(a, a));
        }

        // check identity elements
        for a in &elements {
            assert_el_eq!(&ring, a, &ring.add_ref_fst(a, ring.clone_el(&zero)));
            assert_el_eq!(&ring, a, &ring.mul_ref_fst(a, ring.clone_el(&one)));
        }

        // check commutativity
        for a in &elements {
            for b in &elements {
                assert_el_eq!(&ring, &ring.add_ref(a, b), &ring.add_ref(b, a));
                if ring.is_commutative() {
                    assert_el_eq!(&ring, &ring.mul_ref(a, b), &ring.mul_ref(b, a));
                }
            }
        }

        // check associativity
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    assert_el_eq!(&ring,
                        &ring.add_ref_fst(a, ring.add_ref(b, c)),
                        &ring.add_ref_snd(ring.add_ref(a, b), c)
                    );
                    assert_el_eq!(&ring,
                        &ring.mul_ref_fst(a, ring.mul_ref(b, c)),
                        &ring.mul_ref_snd(ring.mul_ref(a, b), c)
                    );
                }
            }
        }

        // check distributivity
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    assert_el_eq!(&ring,
                        &ring.mul_ref_fst(a, ring.add_ref(b, c)),
                        &ring.add(ring.mul_ref(a, b), ring.mul_ref(a, c))
                    );
                    assert_el_eq!(&ring,
                        &ring.mul_ref_snd(ring.add_ref(a, b), c),
                        &ring.add(ring.mul_ref(a, c), ring.mul_ref(b, c))
                    );
                }
            }
        }

        // check negation
        for a in &elements {
            assert_el_eq!(&ring, a, &ring.clone_el(a));
            assert_el_eq!(&ring, &zero, &ring.add_ref_fst(a, ring.negate(ring.clone_el(a))));
        }
    }
}
