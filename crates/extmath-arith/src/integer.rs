//! Elementary integer functions.

use extmath_core::error::{ArithmeticError, ArithmeticResult};
use num_traits::{CheckedRem, PrimInt};

/// Greatest common divisor by Euclid's algorithm.
///
/// The result is non-negative and `gcd(0, 0) == 0`. For signed types,
/// `gcd(MIN, 0)` and `gcd(MIN, MIN)` have no positive representation and
/// are returned as `MIN`.
pub fn gcd<I: PrimInt + CheckedRem>(a: I, b: I) -> I {
    let (mut a, mut b) = (a, b);
    while b != I::zero() {
        // `MIN % -1` overflows; its remainder is zero.
        let r = a.checked_rem(&b).unwrap_or_else(I::zero);
        a = b;
        b = r;
    }
    if a < I::zero() {
        I::zero().checked_sub(&a).unwrap_or(a)
    } else {
        a
    }
}

/// Least common multiple, non-negative. `lcm(0, x) == 0`.
///
/// # Errors
///
/// [`ArithmeticError::Overflow`] if the result does not fit in `I`.
pub fn lcm<I: PrimInt + CheckedRem>(a: I, b: I) -> ArithmeticResult<I> {
    if a == I::zero() || b == I::zero() {
        return Ok(I::zero());
    }
    let product = (a / gcd(a, b))
        .checked_mul(&b)
        .ok_or_else(|| ArithmeticError::overflow("lcm"))?;
    if product < I::zero() {
        I::zero()
            .checked_sub(&product)
            .ok_or_else(|| ArithmeticError::overflow("lcm"))
    } else {
        Ok(product)
    }
}

/// `n!` as a floating-point value; saturates to `+inf` past `170!`.
pub fn factorial(n: u32) -> f64 {
    (2..=n).fold(1.0, |acc, i| acc * f64::from(i))
}

/// `n!` as an exact integer.
///
/// # Errors
///
/// [`ArithmeticError::Overflow`] for `n > 20`.
pub fn checked_factorial(n: u32) -> ArithmeticResult<u64> {
    (2..=u64::from(n)).try_fold(1u64, |acc, i| {
        acc.checked_mul(i)
            .ok_or_else(|| ArithmeticError::overflow(format!("{}!", n)))
    })
}

/// Reverse the decimal digits of `n` (`1230` becomes `321`).
///
/// # Errors
///
/// [`ArithmeticError::Overflow`] when the reversed number exceeds `u64::MAX`.
pub fn reverse_digits(n: u64) -> ArithmeticResult<u64> {
    let mut remaining = n;
    let mut reversed: u64 = 0;
    while remaining > 0 {
        reversed = reversed
            .checked_mul(10)
            .and_then(|r| r.checked_add(remaining % 10))
            .ok_or_else(|| ArithmeticError::overflow(format!("reversing {}", n)))?;
        remaining /= 10;
    }
    Ok(reversed)
}
