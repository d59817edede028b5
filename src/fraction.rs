use std::fmt::{self, Debug};
use std::ops::Add;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// An exact fraction over arbitrary-precision integers.
///
/// The denominator is always strictly positive. [`Fraction::new`] keeps the
/// given terms as they are; sums come back in lowest terms.
#[derive(Clone)]
pub struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

impl Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.numer, self.denom)
    }
}

impl Fraction {
    /// Construct `numer / denom`, or `None` when the denominator is zero.
    /// The sign is moved onto the numerator.
    pub fn new(numer: BigInt, denom: BigInt) -> Option<Self> {
        if denom.is_zero() {
            return None;
        }
        if denom.is_negative() {
            Some(Self {
                numer: -numer,
                denom: -denom,
            })
        } else {
            Some(Self { numer, denom })
        }
    }

    /// 0/1
    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn from_integer(value: BigInt) -> Self {
        Self {
            numer: value,
            denom: BigInt::one(),
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Divide numerator and denominator by their gcd.
    pub fn reduced(&self) -> Self {
        let g = self.numer.gcd(&self.denom);
        if g.is_zero() || g.is_one() {
            return self.clone();
        }
        Self {
            numer: &self.numer / &g,
            denom: &self.denom / &g,
        }
    }

    /// True when the denominator divides the numerator exactly.
    pub fn is_integer(&self) -> bool {
        (&self.numer % &self.denom).is_zero()
    }

    /// The exact integer value, if there is one.
    pub fn to_integer(&self) -> Option<BigInt> {
        let (q, r) = self.numer.div_rem(&self.denom);
        r.is_zero().then_some(q)
    }

    /// Render as a decimal with `precision` fractional digits, rounding the
    /// last digit half away from zero.
    pub fn to_decimal_string(&self, precision: usize) -> String {
        let num = self.numer.magnitude();
        let den = self.denom.magnitude();
        let scale = num_traits::pow(BigUint::from(10u8), precision);

        let (mut int_part, rem) = num.div_rem(den);
        let (mut frac_part, rem) = (rem * &scale).div_rem(den);
        if &rem * 2u8 >= *den {
            frac_part += 1u8;
            if frac_part >= scale {
                int_part += 1u8;
                frac_part -= &scale;
            }
        }

        let mut out = String::new();
        if self.numer.is_negative() {
            out.push('-');
        }
        out.push_str(&int_part.to_string());
        if precision > 0 {
            out.push('.');
            out.push_str(&format!("{:0>width$}", frac_part.to_string(), width = precision));
        }
        out
    }
}

impl Add<&Fraction> for Fraction {
    type Output = Self;
    fn add(self, rhs: &Self) -> Self {
        // a/b + c/d = (ad + cb) / bd, both denominators positive
        let numer = self.numer * &rhs.denom + &rhs.numer * &self.denom;
        let denom = self.denom * &rhs.denom;
        Fraction { numer, denom }.reduced()
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        &self.numer * &other.denom == &other.numer * &self.denom
    }
}

impl Eq for Fraction {}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.denom.is_one() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(BigInt::from(n), BigInt::from(d)).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_denominator() {
        assert!(Fraction::new(BigInt::from(3), BigInt::zero()).is_none());
    }

    #[test]
    fn test_new_normalizes_sign() {
        let f = frac(3, -4);
        assert_eq!(f.numer(), &BigInt::from(-3));
        assert_eq!(f.denom(), &BigInt::from(4));
        let g = frac(-3, -4);
        assert_eq!(g.numer(), &BigInt::from(3));
    }

    #[test]
    fn test_add() {
        // 1/2 + 1/3 = 5/6
        let sum = frac(1, 2) + &frac(1, 3);
        assert_eq!(sum.numer(), &BigInt::from(5));
        assert_eq!(sum.denom(), &BigInt::from(6));
        // 1/2 + 1/2 = 1
        let sum = frac(1, 2) + &frac(1, 2);
        assert_eq!(sum.to_integer(), Some(BigInt::from(1)));
        // -3/4 + 3/4 = 0
        assert!((frac(-3, 4) + &frac(3, 4)).numer().is_zero());
    }

    #[test]
    fn test_equality_ignores_representation() {
        assert_eq!(frac(2, 4), frac(1, 2));
        assert_eq!(frac(-6, 3), Fraction::from_integer(BigInt::from(-2)));
        assert_ne!(frac(1, 3), frac(1, 2));
    }

    #[test]
    fn test_integrality() {
        assert!(frac(12, 4).is_integer());
        assert_eq!(frac(12, -4).to_integer(), Some(BigInt::from(-3)));
        assert!(!frac(7, 2).is_integer());
        assert_eq!(frac(7, 2).to_integer(), None);
        assert!(Fraction::zero().is_integer());
    }

    #[test]
    fn test_reduced() {
        let r = frac(18, 24).reduced();
        assert_eq!(r.numer(), &BigInt::from(3));
        assert_eq!(r.denom(), &BigInt::from(4));
        let z = frac(0, 7).reduced();
        assert_eq!(z.denom(), &BigInt::one());
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(frac(1, 2).to_decimal_string(5), "0.50000");
        assert_eq!(frac(5, 2).to_decimal_string(5), "2.50000");
        assert_eq!(frac(2, 3).to_decimal_string(5), "0.66667");
        assert_eq!(frac(-7, 3).to_decimal_string(5), "-2.33333");
        assert_eq!(frac(-1, 8).to_decimal_string(2), "-0.13");
        // carry out of the fractional digits
        assert_eq!(frac(999_999, 1_000_000).to_decimal_string(5), "1.00000");
        assert_eq!(frac(7, 2).to_decimal_string(0), "4");
        assert_eq!(frac(6, 3).to_decimal_string(3), "2.000");
    }

    #[test]
    fn test_display() {
        assert_eq!(frac(3, 6).reduced().to_string(), "1/2");
        assert_eq!(frac(-4, 2).reduced().to_string(), "-2");
    }
}
