pub mod error;
pub mod fraction;
pub mod lagrange;
pub mod point;
#[cfg(test)]
mod polynomial;
pub mod radix;
pub mod share;

pub use error::{Error, Result};
pub use fraction::Fraction;
pub use lagrange::reconstruct_secret;
pub use point::Point;
pub use share::{decode_shares, RawShare, SelectionOrder, ShareSet};

use num_bigint::BigInt;

/// Decode the first `k` shares of `set` under `order` and interpolate the secret.
pub fn recover_secret(set: &ShareSet, order: SelectionOrder) -> Result<BigInt> {
    let points = decode_shares(set, order)?;
    reconstruct_secret(&points)
}
