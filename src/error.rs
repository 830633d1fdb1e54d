use thiserror::Error;

///
/// The error type for fallible ring-theoretic operations of this crate.
///
/// Violations of mathematical preconditions that callers can always check
/// beforehand (e.g. passing the zero polynomial where a nonzero one is
/// required) are considered bugs and lead to panics instead.
///
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {

    ///
    /// An element or ideal belonging to one ring was passed to an operation
    /// of a structurally different ring.
    ///
    #[error("the given value does not belong to the expected ring")]
    DomainMismatch,

    #[error("division by zero")]
    DivisionByZero,

    #[error("the element is not invertible")]
    NotInvertible,

    #[error("the element is not divisible by the given divisor")]
    NotDivisible,

    #[error("an ideal requires at least one generator")]
    EmptyGeneratingSet,

    #[error("the modulus {0} is not a prime number")]
    NotPrime(i128),

    ///
    /// Carries a rendering of the offending polynomial.
    ///
    #[error("the polynomial {0} is not irreducible over its coefficient field")]
    NotIrreducible(String),

    ///
    /// A randomized or search-based algorithm exceeded its attempt bound.
    ///
    #[error("the algorithm did not converge within its attempt bound")]
    DidNotConverge,

    ///
    /// An algorithm would require intermediate values outside the range of
    /// the integer representation it works with.
    ///
    #[error("the required working precision exceeds the supported integer range")]
    PrecisionExhausted
}
