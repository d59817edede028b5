//! Share documents and the decoder that turns them into interpolation points.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::point::Point;
use crate::radix::{parse_bigint, parse_index, parse_radix};

/// Identifier of the metadata entry in a share document. Never a share.
pub const METADATA_KEY: &str = "keys";

/// The `"keys"` object: total share count and reconstruction threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Metadata {
    pub n: usize,
    pub k: usize,
}

/// One encoded share value as it appears in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawShare {
    #[serde(default)]
    pub base: String,
    #[serde(default)]
    pub value: String,
}

impl RawShare {
    pub fn new(base: impl Into<String>, value: impl Into<String>) -> Self {
        RawShare {
            base: base.into(),
            value: value.into(),
        }
    }
}

impl From<RawShare> for Value {
    fn from(share: RawShare) -> Self {
        serde_json::json!({ "base": share.base, "value": share.value })
    }
}

/// A threshold share set: `k` of the shares reconstruct the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSet {
    /// Total number of shares issued. Informational only.
    pub n: usize,
    /// Threshold.
    pub k: usize,
    /// Share entries by identifier, kept untyped until selected.
    pub shares: BTreeMap<String, Value>,
}

#[derive(Deserialize)]
struct Document {
    keys: Option<Metadata>,
    #[serde(flatten)]
    entries: BTreeMap<String, Value>,
}

impl ShareSet {
    pub fn new(n: usize, k: usize) -> Self {
        ShareSet {
            n,
            k,
            shares: BTreeMap::new(),
        }
    }

    /// Builder-style insertion of one share.
    pub fn with_share(mut self, id: impl Into<String>, share: impl Into<Value>) -> Self {
        self.shares.insert(id.into(), share.into());
        self
    }

    /// Parse a JSON share document.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: Document = serde_json::from_str(json)?;
        let Metadata { n, k } = doc.keys.ok_or(Error::MissingMetadata)?;
        Ok(ShareSet {
            n,
            k,
            shares: doc.entries,
        })
    }

    /// Read and parse a JSON share document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// Which `k` shares to use when more are available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionOrder {
    /// Byte-wise string order of the identifiers: `"10"` sorts before `"2"`.
    #[default]
    Lexicographic,
    /// Numeric order of the parsed identifiers, ties broken by the string.
    Numeric,
}

impl fmt::Display for SelectionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionOrder::Lexicographic => write!(f, "lexicographic"),
            SelectionOrder::Numeric => write!(f, "numeric"),
        }
    }
}

impl FromStr for SelectionOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "lexicographic" | "lex" => Ok(SelectionOrder::Lexicographic),
            "numeric" => Ok(SelectionOrder::Numeric),
            other => Err(format!(
                "unknown selection order {other:?} (expected lexicographic or numeric)"
            )),
        }
    }
}

fn index_of(id: &str) -> Result<BigUint> {
    parse_index(id).ok_or_else(|| Error::MalformedIndex { id: id.to_string() })
}

fn decode_value(id: &str, entry: &Value) -> Result<BigInt> {
    let share = RawShare::deserialize(entry).map_err(|e| Error::MalformedShareValue {
        id: id.to_string(),
        reason: e.to_string(),
    })?;
    let radix = parse_radix(&share.base).ok_or_else(|| Error::MalformedShareValue {
        id: id.to_string(),
        reason: format!("invalid base {:?}", share.base),
    })?;
    parse_bigint(&share.value, radix).ok_or_else(|| Error::MalformedShareValue {
        id: id.to_string(),
        reason: format!("{:?} is not a base-{radix} number", share.value),
    })
}

/// Identifiers in selection order, metadata excluded.
fn ordered_ids(set: &ShareSet, order: SelectionOrder) -> Result<Vec<&str>> {
    let ids = set
        .shares
        .keys()
        .map(String::as_str)
        .filter(|id| *id != METADATA_KEY);
    match order {
        // BTreeMap iteration is already byte-wise sorted
        SelectionOrder::Lexicographic => Ok(ids.collect()),
        SelectionOrder::Numeric => {
            let mut keyed = ids
                .map(|id| index_of(id).map(|x| (x, id)))
                .collect::<Result<Vec<_>>>()?;
            keyed.sort();
            Ok(keyed.into_iter().map(|(_, id)| id).collect())
        }
    }
}

/// Decode exactly `set.k` points from the share set.
///
/// Identifiers are ranked by `order` and the first `k` are decoded; the rest
/// are ignored and never type-checked. A malformed selected share fails the
/// whole decode.
pub fn decode_shares(set: &ShareSet, order: SelectionOrder) -> Result<Vec<Point>> {
    let k = set.k;
    if k == 0 {
        return Err(Error::InvalidThreshold);
    }

    let ids = ordered_ids(set, order)?;
    if ids.len() != set.n {
        warn!(n = set.n, found = ids.len(), "share count differs from metadata");
    }
    if ids.len() > k {
        warn!(
            unused = ?&ids[k..],
            %order,
            "more shares than the threshold; only the first {k} are used"
        );
    }

    let mut points = Vec::with_capacity(k.min(ids.len()));
    for &id in ids.iter().take(k) {
        let x = BigInt::from(index_of(id)?);
        let y = decode_value(id, &set.shares[id])?;
        debug!(id, %x, %y, "decoded share");
        points.push(Point { x, y });
    }

    if points.len() < k {
        return Err(Error::InsufficientShares {
            needed: k,
            got: points.len(),
        });
    }
    Ok(points)
}
