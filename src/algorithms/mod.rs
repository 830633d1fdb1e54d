///
/// Contains the distinct-degree factorization of squarefree polynomials
/// over finite fields.
///
pub mod distinct_degree;
///
/// Contains an implementation of the (extended) euclidean algorithm, with
/// variants that give sign guarantees over the integers.
///
pub mod eea;
///
/// Contains Berlekamp's and the Cantor-Zassenhaus factorization algorithms
/// for polynomials over finite fields.
///
pub mod equal_degree;
///
/// Contains the sieve of Erathostenes.
///
pub mod erathostenes;
///
/// Contains Hensel lifting of factorizations of integer polynomials from
/// a prime modulus to prime power moduli.
///
pub mod hensel;
///
/// Contains the Rabin irreducibility test for polynomials over finite
/// fields.
///
pub mod irreducibility;
///
/// Contains the Miller-Rabin primality test.
///
pub mod miller_rabin;
///
/// Contains polynomial division with remainder, in variants for monic
/// divisors, divisors with invertible leading coefficient and
/// pseudo-division over domains.
///
pub mod poly_div;
///
/// Contains the gcd computation for polynomials over unique factorization
/// domains that are not fields, e.g. `ZZ[X]`.
///
pub mod poly_gcd;
///
/// Contains modular exponentiation of polynomials, i.e. powering in
/// `R[X]/(f)`.
///
pub mod poly_pow;
///
/// Contains a generic implementation of square-and-multiply.
///
pub mod sqr_mul;
///
/// Contains the squarefree decomposition of polynomials over finite
/// fields, via Yun's algorithm.
///
pub mod squarefree;
///
/// Contains the factorization of integer polynomials via the Zassenhaus
/// method.
///
pub mod zx_factor;
