//! Primality testing, the sieve of Eratosthenes and prime factorization.

use std::fmt;

use extmath_core::error::{ArithmeticError, ArithmeticResult};

/// A prime raised to a positive exponent, one term of a factorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimePower {
    /// The prime base
    pub prime: u64,
    /// How many times the prime divides the number
    pub exponent: u32,
}

impl PrimePower {
    /// `prime^exponent`, or None if it overflows.
    pub fn value(&self) -> Option<u64> {
        self.prime.checked_pow(self.exponent)
    }
}

impl fmt::Display for PrimePower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent == 1 {
            write!(f, "{}", self.prime)
        } else {
            write!(f, "{}^{}", self.prime, self.exponent)
        }
    }
}

/// Trial-division primality test over candidates of the form `6k ± 1`.
pub fn is_prime(n: u64) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n <= 1 || n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut k: u64 = 6;
    // (k - 1)^2 <= n, written to stay clear of overflow
    while k - 1 <= n / (k - 1) {
        if n % (k - 1) == 0 || n % (k + 1) == 0 {
            return false;
        }
        k += 6;
    }
    true
}

/// Sieve of Eratosthenes up to and including `limit`.
///
/// The returned vector has `limit + 1` entries and `sieve[x]` is true
/// exactly when `x` is prime.
pub fn sieve(limit: usize) -> Vec<bool> {
    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    if limit >= 1 {
        is_prime[1] = false;
    }

    let mut i = 2;
    while i <= limit / i {
        if is_prime[i] {
            for multiple in (i * i..=limit).step_by(i) {
                is_prime[multiple] = false;
            }
        }
        i += 1;
    }
    is_prime
}

/// All primes `<= limit`, ascending.
pub fn primes_up_to(limit: usize) -> Vec<usize> {
    sieve(limit)
        .into_iter()
        .enumerate()
        .filter_map(|(x, prime)| prime.then_some(x))
        .collect()
}

/// Prime factorization of `n`, primes ascending.
///
/// `prime_factors(1)` is empty.
///
/// # Errors
///
/// [`ArithmeticError::InvalidArgument`] for `n == 0`.
pub fn prime_factors(n: u64) -> ArithmeticResult<Vec<PrimePower>> {
    if n == 0 {
        return Err(ArithmeticError::invalid_argument(
            "zero has no prime factorization",
        ));
    }

    let mut factors = Vec::new();
    let mut remaining = n;

    let mut take = |prime: u64, remaining: &mut u64| {
        let mut exponent = 0;
        while *remaining % prime == 0 {
            *remaining /= prime;
            exponent += 1;
        }
        if exponent > 0 {
            factors.push(PrimePower { prime, exponent });
        }
    };

    take(2, &mut remaining);
    let mut candidate: u64 = 3;
    while remaining != 1 && candidate <= remaining / candidate {
        take(candidate, &mut remaining);
        candidate += 2;
    }
    if remaining > 1 {
        factors.push(PrimePower {
            prime: remaining,
            exponent: 1,
        });
    }

    Ok(factors)
}
