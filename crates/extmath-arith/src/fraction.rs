//! Exact rational numbers.
//!
//! [`Fraction`] wraps [`num_rational::Ratio`] and is generic over the
//! integer type holding numerator and denominator, so the same arithmetic
//! serves machine integers (`Fraction<i64>`) and arbitrary-precision
//! integers ([`BigFraction`]).
//!
//! Fractions are kept in lowest terms with a positive denominator at all
//! times. Construction, reciprocals and powers report failures through
//! [`ArithmeticError`]; the arithmetic operators inherit the overflow
//! behaviour of the underlying integer type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use extmath_core::error::{ArithmeticError, ArithmeticResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{CheckedSub, One, Pow, Signed, ToPrimitive, Zero};

/// Integer types a [`Fraction`] can be built on.
pub trait FractionInt: Clone + Integer + Signed + CheckedSub + ToPrimitive + fmt::Display {}

impl<I> FractionInt for I where I: Clone + Integer + Signed + CheckedSub + ToPrimitive + fmt::Display {}

/// A fraction over arbitrary-precision integers.
pub type BigFraction = Fraction<BigInt>;

/// A rational number `numerator / denominator` in lowest terms.
#[derive(Debug, Clone)]
pub struct Fraction<I>(Ratio<I>);

impl<I: FractionInt> Fraction<I> {
    /// Create `numerator / denominator`, reduced to lowest terms.
    ///
    /// # Errors
    ///
    /// - [`ArithmeticError::ZeroDenominator`] if `denominator` is zero.
    /// - [`ArithmeticError::Overflow`] if moving the sign to the numerator
    ///   does not fit in `I` (`i64::MIN / -1`).
    pub fn new(numerator: I, denominator: I) -> ArithmeticResult<Self> {
        if denominator.is_zero() {
            return Err(ArithmeticError::ZeroDenominator);
        }
        if !denominator.is_negative() {
            return Ok(Self(Ratio::new(numerator, denominator)));
        }

        // Ratio flips a negative denominator with an unchecked negation.
        if numerator.is_zero() {
            return Ok(Self::zero());
        }
        if numerator == denominator {
            return Ok(Self::one());
        }
        let g = numerator.gcd(&denominator);
        let flip = |x: I| {
            I::zero()
                .checked_sub(&x)
                .ok_or_else(|| ArithmeticError::overflow("fraction sign normalization"))
        };
        let numer = flip(numerator / g.clone())?;
        let denom = flip(denominator / g)?;
        Ok(Self(Ratio::new_raw(numer, denom)))
    }

    /// Create the fraction `n / 1`.
    pub fn from_integer(n: I) -> Self {
        Self(Ratio::from_integer(n))
    }

    /// Wrap a ratio; `Ratio` is always kept reduced by its own constructors.
    pub fn from_ratio(ratio: Ratio<I>) -> Self {
        Self(ratio)
    }

    /// The underlying ratio.
    pub fn as_ratio(&self) -> &Ratio<I> {
        &self.0
    }

    /// Unwrap into the underlying ratio.
    pub fn into_ratio(self) -> Ratio<I> {
        self.0
    }

    /// The numerator; carries the sign of the fraction.
    pub fn numerator(&self) -> &I {
        self.0.numer()
    }

    /// The denominator; always positive.
    pub fn denominator(&self) -> &I {
        self.0.denom()
    }

    /// Whether the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// The reciprocal `denominator / numerator`.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] for a zero fraction, and
    /// [`ArithmeticError::Overflow`] when the sign cannot be moved.
    pub fn recip(&self) -> ArithmeticResult<Self> {
        if self.0.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Self::new(self.denominator().clone(), self.numerator().clone())
    }

    /// Raise to an integer power; negative exponents go through the reciprocal.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] for zero raised to a negative power.
    pub fn pow(&self, exponent: i32) -> ArithmeticResult<Self>
    where
        I: Pow<u32, Output = I>,
    {
        let base = if exponent < 0 { self.recip()? } else { self.clone() };
        Ok(Self(Pow::pow(base.0, exponent.unsigned_abs())))
    }

    /// Division that reports a zero divisor instead of panicking.
    pub fn checked_div(&self, other: &Self) -> ArithmeticResult<Self> {
        if other.0.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self(&self.0 / &other.0))
    }

    /// The nearest `f64`.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::Overflow`] when numerator or denominator is too
    /// large to be represented as an `f64`.
    pub fn to_f64(&self) -> ArithmeticResult<f64> {
        let numer = self.numerator().to_f64().filter(|v| v.is_finite());
        let denom = self.denominator().to_f64().filter(|v| v.is_finite());
        match (numer, denom) {
            (Some(n), Some(d)) => Ok(n / d),
            _ => Err(ArithmeticError::overflow("conversion to f64")),
        }
    }
}

impl<I: FractionInt> From<I> for Fraction<I> {
    fn from(n: I) -> Self {
        Self::from_integer(n)
    }
}

impl<I: FractionInt> PartialEq for Fraction<I> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<I: FractionInt> Eq for Fraction<I> {}

impl<I: FractionInt> Ord for Fraction<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<I: FractionInt> PartialOrd for Fraction<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I: FractionInt + Hash> Hash for Fraction<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<I: FractionInt> Neg for Fraction<I> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<I: FractionInt> Add for Fraction<I> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<I: FractionInt> Sub for Fraction<I> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl<I: FractionInt> Mul for Fraction<I> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<I: FractionInt> Div for Fraction<I> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `other` is zero, like integer division. Use
    /// [`Fraction::checked_div`] to get an error instead.
    fn div(self, other: Self) -> Self {
        assert!(!other.0.is_zero(), "attempt to divide by a zero fraction");
        Self(self.0 / other.0)
    }
}

impl<'a, I: FractionInt> Add<&'a Fraction<I>> for &'a Fraction<I> {
    type Output = Fraction<I>;

    fn add(self, other: &'a Fraction<I>) -> Fraction<I> {
        Fraction(&self.0 + &other.0)
    }
}

impl<'a, I: FractionInt> Sub<&'a Fraction<I>> for &'a Fraction<I> {
    type Output = Fraction<I>;

    fn sub(self, other: &'a Fraction<I>) -> Fraction<I> {
        Fraction(&self.0 - &other.0)
    }
}

impl<'a, I: FractionInt> Mul<&'a Fraction<I>> for &'a Fraction<I> {
    type Output = Fraction<I>;

    fn mul(self, other: &'a Fraction<I>) -> Fraction<I> {
        Fraction(&self.0 * &other.0)
    }
}

impl<'a, I: FractionInt> Div<&'a Fraction<I>> for &'a Fraction<I> {
    type Output = Fraction<I>;

    fn div(self, other: &'a Fraction<I>) -> Fraction<I> {
        assert!(!other.0.is_zero(), "attempt to divide by a zero fraction");
        Fraction(&self.0 / &other.0)
    }
}

impl<I: FractionInt> Zero for Fraction<I> {
    fn zero() -> Self {
        Self(Ratio::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<I: FractionInt> One for Fraction<I> {
    fn one() -> Self {
        Self(Ratio::one())
    }
}

impl<I: FractionInt> fmt::Display for Fraction<I> {
    /// Always `n/d`, integers included (`5/1`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator(), self.denominator())
    }
}

impl<I: FractionInt> FromStr for Fraction<I> {
    type Err = ArithmeticError;

    /// Parse `"n/d"` or a bare integer `"n"`, with optional surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            I::from_str_radix(part.trim(), 10)
                .map_err(|_| ArithmeticError::parse(s, format!("invalid integer `{}`", part.trim())))
        };

        match s.split_once('/') {
            Some((numer, denom)) => Self::new(parse(numer)?, parse(denom)?),
            None => Ok(Self::from_integer(parse(s)?)),
        }
    }
}
