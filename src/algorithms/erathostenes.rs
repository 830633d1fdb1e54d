use crate::primitive_int::StaticRing;
use crate::ring::*;
use crate::integer::*;

///
/// Computes all primes strictly below `B` with the sieve of Erathostenes.
///
/// The sieve table only stores odd numbers; entry `i` stands for `2*i + 1`.
///
pub fn erathostenes(B: u64) -> Vec<u64> {
    if B <= 2 {
        return Vec::new();
    }
    let len = (B / 2) as usize;
    let mut is_composite = vec![false; len];
    let mut primes = vec![2];
    for i in 1..len {
        if is_composite[i] {
            continue;
        }
        let n = 2 * i + 1;
        primes.push(n as u64);
        // the odd multiples 3n, 5n, ... sit at indices i + n, i + 2n, ...
        for j in ((i + n)..len).step_by(n) {
            is_composite[j] = true;
        }
    }
    return primes;
}

///
/// [`erathostenes()`] with the bound and the returned primes living in an
/// arbitrary implementation of the integers.
///
pub fn enumerate_primes<I>(ZZ: I, B: &El<I>) -> Vec<El<I>>
    where I: IntegerRingStore,
        I::Type: IntegerRing
{
    let bound = int_cast(ZZ.clone_el(B), &StaticRing::<i128>::RING, &ZZ) as u64;
    erathostenes(bound).into_iter().map(|p| int_cast(p as i128, &ZZ, &StaticRing::<i128>::RING)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erathostenes() {
        assert_eq!(Vec::<u64>::new(), erathostenes(2));
        assert_eq!(vec![2], erathostenes(3));
        assert_eq!(vec![2, 3], erathostenes(4));
        assert_eq!(vec![2, 3, 5, 7, 11, 13, 17, 19], erathostenes(20));
        assert_eq!(vec![2, 3, 5, 7, 11, 13, 17, 19, 23], erathostenes(28));
        assert_eq!(vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29], erathostenes(30));
    }

    #[test]
    fn test_erathostenes_prime_counts() {
        assert_eq!(25, erathostenes(100).len());
        assert_eq!(168, erathostenes(1000).len());
    }

    #[test]
    fn test_erathostenes_against_trial_division() {
        let primes = erathostenes(200);
        for n in 2..200u64 {
            let n_is_prime = (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0);
            assert_eq!(n_is_prime, primes.contains(&n), "disagreement at {}", n);
        }
    }

    #[test]
    fn test_enumerate_primes() {
        let ZZ = StaticRing::<i128>::RING;
        assert_eq!(vec![2, 3, 5, 7], enumerate_primes(&ZZ, &10));
    }
}
