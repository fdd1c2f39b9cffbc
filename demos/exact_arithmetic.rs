//! Number theory helpers and exact fractions through the facade crate.

use extmath::prelude::*;
use extmath::num_bigint::BigInt;

fn main() -> Result<(), ArithmeticError> {
    println!("=== Number theory ===\n");

    let n = 5040;
    let factors: Vec<String> = prime_factors(n)?.iter().map(ToString::to_string).collect();
    println!("{} = {}", n, factors.join(" · "));
    println!("divisors: {} of them, summing to {}", divisor_count(n)?, divisor_sum(n)?);
    println!("gcd(5040, 3528) = {}", gcd(5040u64, 3528));
    println!("lcm(5040, 3528) = {}", lcm(5040u64, 3528)?);
    println!("primes below 50: {:?}", primes_up_to(50));
    println!("20! = {}", checked_factorial(20)?);
    println!("reverse(1230) = {}\n", reverse_digits(1230)?);

    println!("=== Exact fractions ===\n");

    let mut harmonic = Fraction::<i64>::new(0, 1)?;
    for k in 1..=10 {
        harmonic = harmonic + Fraction::new(1, k)?;
    }
    println!("H(10) = {} ≈ {:.6}", harmonic, harmonic.to_f64()?);

    let parsed: Fraction<i64> = "-14/21".parse()?;
    println!("-14/21 parses as {}", parsed);

    // Well past the range of i64.
    let mut big = BigFraction::from_integer(BigInt::from(1));
    for k in 1..=40 {
        big = big * BigFraction::new(BigInt::from(k), BigInt::from(k + 1))?.pow(2)?;
    }
    println!("prod (k/(k+1))^2 for k = 1..40 = {}", big);

    match Fraction::<i64>::new(0, 1)?.recip() {
        Ok(r) => println!("unexpected reciprocal {}", r),
        Err(e) => println!("reciprocal of zero: {}", e),
    }

    Ok(())
}
