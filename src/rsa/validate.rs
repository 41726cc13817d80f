// Prime Validation
// Trial-division primality check for the two key primes

use log::debug;
use num_traits::{One, Zero};

use super::bigint::{from_u64, isqrt, RsaBigInt};

/// Trial division by every integer in [2, floor(sqrt(n))].
/// Anything below 2 is not prime.
pub fn is_prime(n: &RsaBigInt) -> bool {
    let two = from_u64(2);
    if n < &two {
        return false;
    }

    let limit = isqrt(n);
    let mut i = two;
    while i <= limit {
        if (n % &i).is_zero() {
            return false;
        }
        i += 1u8;
    }

    true
}

/// Check that `p` and `q` are distinct primes
pub fn validate_primes(p: &RsaBigInt, q: &RsaBigInt) -> bool {
    if p == q {
        debug!("rejecting key material: primes are equal ({})", p);
        return false;
    }

    for n in [p, q] {
        if !is_prime(n) {
            debug!("rejecting key material: {} is not prime", n);
            return false;
        }
    }

    true
}

/// Smallest prime strictly greater than `n`
pub fn next_prime(n: &RsaBigInt) -> RsaBigInt {
    let mut candidate = n + RsaBigInt::one();
    while !is_prime(&candidate) {
        candidate += 1u8;
    }
    candidate
}
