use std::fmt;

use num_bigint::BigInt;

/// A decoded share: `x` is the share index, `y` the polynomial value at `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
