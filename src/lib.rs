//! A library for computations with rings, polynomials and their
//! factorizations, built around a trait hierarchy of ring axioms: rings,
//! euclidean domains and fields are traits, and algorithms are generic over
//! every ring implementing the axioms they require.
//!
//! The main entry points are the ring trait tower in [`ring`], [`pid`] and
//! [`field`], the concrete rings in [`rings`] and the factorization
//! algorithms in [`algorithms`], up to the factorization of integer
//! polynomials:
//! ```
//! # use polyfactor::assert_el_eq;
//! # use polyfactor::ring::*;
//! # use polyfactor::primitive_int::StaticRing;
//! # use polyfactor::rings::poly::*;
//! # use polyfactor::rings::poly::dense_poly::DensePolyRing;
//! # use polyfactor::algorithms::zx_factor::zx_factorization;
//! let ZZX = DensePolyRing::new(StaticRing::<i128>::RING, "X");
//! // f = (x - 17)(x^2 + 8x + 3)
//! let f = ZZX.from_terms([(-51, 0), (-133, 1), (-9, 2), (1, 3)].into_iter());
//! let mut rng = oorandom::Rand64::new(1);
//! let factorization = zx_factorization(&ZZX, &f, &mut rng).unwrap();
//! let product = ZZX.prod(factorization.iter()
//!     .map(|(factor, m)| ZZX.pow(ZZX.clone_el(factor), *m)));
//! assert_el_eq!(&ZZX, &f, &product);
//! ```

// rings are often named like the structures they represent, e.g. ZZ or F4
#![allow(non_snake_case)]

#[macro_use]
pub mod ring;
pub mod algorithms;
pub mod divisibility;
pub mod error;
pub mod field;
pub mod finite;
pub mod ideal;
pub mod integer;
pub mod ordered;
pub mod pid;
pub mod primitive_int;
pub mod rings;
