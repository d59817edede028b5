//! Exact Lagrange interpolation at x = 0 over the rationals.

use crate::error::{Error, Result};
use crate::fraction::Fraction;
use crate::point::Point;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::{debug, trace};

/// Digits after the decimal point when a non-integer result is reported.
const DIAGNOSTIC_PRECISION: usize = 5;

/// Numerator and denominator of L_j(0) before they are combined.
///
/// # Formula
/// ```text
/// L_j(0) = ∏_{i ≠ j} x_i / (x_i - x_j)
/// ```
fn basis_terms(j: usize, points: &[Point]) -> Result<(BigInt, BigInt)> {
    let x_j = &points[j].x;
    // numerator = ∏_{i != j} x_i
    let mut num = BigInt::one();
    // denominator = ∏_{i != j} (x_i - x_j)
    let mut den = BigInt::one();
    for (i, p) in points.iter().enumerate() {
        if i == j {
            continue;
        }
        let diff = &p.x - x_j;
        if diff.is_zero() {
            return Err(Error::DegenerateInterpolation { x: x_j.clone() });
        }
        num *= &p.x;
        den *= diff;
    }
    Ok((num, den))
}

/// Lagrange basis value L_j(0) for the point at position `j`.
///
/// These satisfy ∑_j L_j(0) · f(x_j) = f(0) for any polynomial f of degree
/// below `points.len()`.
pub fn lagrange_coefficient(j: usize, points: &[Point]) -> Result<Fraction> {
    let (num, den) = basis_terms(j, points)?;
    Fraction::new(num, den)
        .map(|f| f.reduced())
        .ok_or_else(|| Error::DegenerateInterpolation {
            x: points[j].x.clone(),
        })
}

/// All basis values, in point order.
pub fn lagrange_coefficients(points: &[Point]) -> Result<Vec<Fraction>> {
    (0..points.len())
        .map(|j| lagrange_coefficient(j, points))
        .collect()
}

/// Recover f(0) from `points`, which must have pairwise distinct x.
///
/// Each contribution y_j · L_j(0) is formed as the single fraction
/// `(y_j · num_j) / den_j` and summed exactly. The sum must be an integer;
/// anything else means the shares do not lie on one integer polynomial of
/// degree below `points.len()`.
pub fn reconstruct_secret(points: &[Point]) -> Result<BigInt> {
    if points.is_empty() {
        return Err(Error::InsufficientShares { needed: 1, got: 0 });
    }
    debug!(k = points.len(), "interpolating at zero");

    let mut sum = Fraction::zero();
    for (j, point) in points.iter().enumerate() {
        let (num, den) = basis_terms(j, points)?;
        let term = Fraction::new(&point.y * num, den)
            .ok_or_else(|| Error::DegenerateInterpolation { x: point.x.clone() })?;
        trace!(%point, %term, "lagrange term");
        sum = sum + &term;
    }

    sum.to_integer().ok_or_else(|| {
        let sum = sum.reduced();
        Error::NonIntegerResult {
            fraction: sum.to_string(),
            decimal: sum.to_decimal_string(DIAGNOSTIC_PRECISION),
        }
    })
}
