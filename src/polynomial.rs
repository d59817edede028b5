use num_bigint::BigInt;
use num_traits::Zero;
use rand::Rng;

/// f(x) = a0 + a1*x + ... + a_{t-1}*x^{t-1} with integer coefficients.
#[derive(Debug, Clone)]
pub struct Poly {
    /// Coefficients a0, a1, ..., a_{t-1}
    pub coeffs: Vec<BigInt>,
}

impl Poly {
    pub fn from_coeffs<T: Into<BigInt>>(coeffs: Vec<T>) -> Self {
        Poly {
            coeffs: coeffs.into_iter().map(Into::into).collect(),
        }
    }

    /// Random polynomial with `t` coefficients, each a signed 64-bit value.
    pub fn random<R: Rng>(t: usize, rng: &mut R) -> Self {
        let coeffs = (0..t).map(|_| BigInt::from(rng.random::<i64>())).collect();
        Poly { coeffs }
    }

    /// Evaluate at x using Horner's method.
    pub fn eval(&self, x: &BigInt) -> BigInt {
        let mut result = BigInt::zero();
        for coeff in self.coeffs.iter().rev() {
            result = result * x + coeff;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_matches_expansion() {
        // 5x^2 + 2x + 6
        let poly = Poly::from_coeffs(vec![6, 2, 5]);
        assert_eq!(poly.eval(&BigInt::from(0)), BigInt::from(6));
        assert_eq!(poly.eval(&BigInt::from(1)), BigInt::from(13));
        assert_eq!(poly.eval(&BigInt::from(2)), BigInt::from(30));
        assert_eq!(poly.eval(&BigInt::from(3)), BigInt::from(57));
        assert_eq!(poly.eval(&BigInt::from(-1)), BigInt::from(9));
    }
}
