//! Divisor enumeration and divisor functions, built on the prime factorization.

use extmath_core::error::ArithmeticResult;

use crate::primes::prime_factors;

/// Every positive divisor of `n`, ascending, including 1 and `n`.
///
/// The divisor set is grown one prime power at a time: each new factor
/// `p^e` multiplies the divisors found so far by `p, p^2, ..., p^e`.
///
/// # Errors
///
/// [`ArithmeticError::InvalidArgument`](extmath_core::error::ArithmeticError::InvalidArgument)
/// for `n == 0`.
pub fn divisors(n: u64) -> ArithmeticResult<Vec<u64>> {
    let factors = prime_factors(n)?;
    let capacity = factors.iter().map(|f| f.exponent as usize + 1).product();

    let mut divisors = Vec::with_capacity(capacity);
    divisors.push(1u64);
    for factor in &factors {
        let base_count = divisors.len();
        let mut power = 1u64;
        for _ in 0..factor.exponent {
            power *= factor.prime;
            for i in 0..base_count {
                divisors.push(divisors[i] * power);
            }
        }
    }

    divisors.sort_unstable();
    Ok(divisors)
}

/// Number of positive divisors of `n`: the product of `exponent + 1`.
pub fn divisor_count(n: u64) -> ArithmeticResult<u64> {
    Ok(prime_factors(n)?
        .iter()
        .map(|f| u64::from(f.exponent) + 1)
        .product())
}

/// Sum of all positive divisors of `n`, including 1 and `n`.
///
/// Computed as the product over prime powers of `1 + p + ... + p^e`, in
/// 128-bit arithmetic so no `u64` input can overflow it.
pub fn divisor_sum(n: u64) -> ArithmeticResult<u128> {
    Ok(prime_factors(n)?
        .iter()
        .map(|f| {
            let prime = u128::from(f.prime);
            let mut term = 1u128;
            let mut power = 1u128;
            for _ in 0..f.exponent {
                power *= prime;
                term += power;
            }
            term
        })
        .product())
}
