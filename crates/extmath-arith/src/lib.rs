//! extmath arithmetic - integer helpers and exact fractions.
//!
//! # Modules
//!
//! - [`integer`]: gcd, lcm, factorial and digit reversal
//! - [`primes`]: primality testing, sieve of Eratosthenes, prime factorization
//! - [`divisors`]: divisor enumeration, divisor count and divisor sum
//! - [`fraction`]: rational numbers over primitive or arbitrary-precision integers

pub mod divisors;
pub mod fraction;
pub mod integer;
pub mod primes;

pub use divisors::{divisor_count, divisor_sum, divisors};
pub use fraction::{BigFraction, Fraction, FractionInt};
pub use integer::{checked_factorial, factorial, gcd, lcm, reverse_digits};
pub use primes::{is_prime, prime_factors, primes_up_to, sieve, PrimePower};

pub use extmath_core::error::{ArithmeticError, ArithmeticResult};
