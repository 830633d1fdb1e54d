use crate::ring::*;
use crate::integer::*;
use crate::ordered::OrderedRingStore;

///
/// The base set makes the Miller-Rabin test deterministic for all integers
/// below `3.3 * 10^24`, see e.g. the tables of Sorenson and Webster.
///
const MILLER_RABIN_BASES: [u128; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

///
/// Miller-Rabin primality test.
///
/// If n is a prime, this returns true. If n is not a prime, this returns
/// false, except possibly for integers beyond `3.3 * 10^24`, where the used
/// witness set no longer guarantees a correct result and this degrades into
/// a strong probable-prime test. Negative inputs are not accepted.
///
pub fn is_prime<I>(ZZ: I, n: &El<I>) -> bool
    where I: IntegerRingStore,
        I::Type: IntegerRing
{
    assert!(!ZZ.is_neg(n));
    let n = ZZ.get_ring().to_i128(n) as u128;
    if n < 2 {
        return false;
    }
    for p in MILLER_RABIN_BASES {
        if n == p {
            return true;
        } else if n % p == 0 {
            return false;
        }
    }

    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;

    for a in MILLER_RABIN_BASES {
        let mut current = pow_mod(a, d, n);
        let mut witness_condition = current == 1;
        for _r in 0..s {
            witness_condition |= current == n - 1;
            if witness_condition {
                break;
            }
            current = mul_mod(current, current, n);
        }
        if !witness_condition {
            return false;
        }
    }
    return true;
}

///
/// Computes `(lhs * rhs) % modulus` without intermediate overflow, via
/// binary doubling.
///
fn mul_mod(mut lhs: u128, mut rhs: u128, modulus: u128) -> u128 {
    debug_assert!(lhs < modulus && rhs < modulus);
    let mut result = 0;
    while rhs > 0 {
        if rhs & 1 == 1 {
            result = add_mod(result, lhs, modulus);
        }
        lhs = add_mod(lhs, lhs, modulus);
        rhs >>= 1;
    }
    return result;
}

fn add_mod(lhs: u128, rhs: u128, modulus: u128) -> u128 {
    if lhs >= modulus - rhs {
        lhs - (modulus - rhs)
    } else {
        lhs + rhs
    }
}

fn pow_mod(base: u128, mut power: u128, modulus: u128) -> u128 {
    let mut result = 1 % modulus;
    let mut current = base % modulus;
    while power > 0 {
        if power & 1 == 1 {
            result = mul_mod(result, current, modulus);
        }
        current = mul_mod(current, current, modulus);
        power >>= 1;
    }
    return result;
}

#[cfg(test)]
use crate::primitive_int::*;

#[test]
pub fn test_is_prime() {
    assert!(is_prime(StaticRing::<i128>::RING, &2));
    assert!(is_prime(StaticRing::<i128>::RING, &3));
    assert!(is_prime(StaticRing::<i128>::RING, &5));
    assert!(is_prime(StaticRing::<i128>::RING, &7));
    assert!(is_prime(StaticRing::<i128>::RING, &11));
    assert!(is_prime(StaticRing::<i128>::RING, &22531));
    assert!(is_prime(StaticRing::<i128>::RING, &417581));
    assert!(is_prime(StaticRing::<i128>::RING, &68719476767));

    assert!(!is_prime(StaticRing::<i128>::RING, &0));
    assert!(!is_prime(StaticRing::<i128>::RING, &1));
    assert!(!is_prime(StaticRing::<i128>::RING, &4));
    assert!(!is_prime(StaticRing::<i128>::RING, &6));
    assert!(!is_prime(StaticRing::<i128>::RING, &8));
    assert!(!is_prime(StaticRing::<i128>::RING, &9));
    assert!(!is_prime(StaticRing::<i128>::RING, &10));
    assert!(!is_prime(StaticRing::<i128>::RING, &22532));
    assert!(!is_prime(StaticRing::<i128>::RING, &347584));

    // a Carmichael number
    assert!(!is_prime(StaticRing::<i128>::RING, &561));
    // squares of primes
    assert!(!is_prime(StaticRing::<i128>::RING, &(22531 * 22531)));
}

#[test]
fn test_is_prime_large() {
    assert!(is_prime(StaticRing::<i128>::RING, &170141183460469231731687303715884105727));
    assert!(!is_prime(StaticRing::<i128>::RING, &170141183460469231731687303715884105725));
}
