//! Version literals and segment-wise comparison
//!
//! A version is the list of digit groups found in its literal, so
//! `7.0.8` becomes `[7, 0, 8]` and `1.0.0.rc1` becomes `[1, 0, 0, 1]`.
//! Comparison pads the shorter list with zeros.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

// Leading version literal of a registry token, e.g. `1.15.4` in `1.15.4 x86_64-linux`
static LITERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d[0-9A-Za-z._\-]*").unwrap());

static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// A parsed version: the original literal plus its numeric segments
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    literal: String,
    segments: Vec<u64>,
}

impl Version {
    /// Parse the leading version literal of `token`
    ///
    /// Returns `None` when the token does not start with a digit.
    pub fn parse(token: &str) -> Option<Self> {
        let literal = LITERAL_RE.find(token.trim())?.as_str();
        let segments = DIGITS_RE
            .find_iter(literal)
            .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
            .collect();

        Some(Self {
            literal: literal.to_string(),
            segments,
        })
    }

    /// Build a version directly from segments (literal is the dotted join)
    pub fn from_segments(segments: &[u64]) -> Self {
        let literal = segments
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(".");
        Self {
            literal,
            segments: segments.to_vec(),
        }
    }

    /// The literal as it appeared in the source text
    pub fn as_str(&self) -> &str {
        &self.literal
    }

    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    /// Segment at `index`, or 0 when the version is shorter
    pub fn segment(&self, index: usize) -> u64 {
        self.segments.get(index).copied().unwrap_or(0)
    }

    pub fn major(&self) -> u64 {
        self.segment(0)
    }

    pub fn minor(&self) -> u64 {
        self.segment(1)
    }

    /// The last segment, which the pin policies treat as the patch level
    pub fn patch(&self) -> u64 {
        self.segments.last().copied().unwrap_or(0)
    }

    /// Zero-padded comparison of the segment lists
    pub fn compare(&self, other: &Version) -> Ordering {
        compare_segments(&self.segments, &other.segments)
    }

    /// True iff `self` is strictly greater than `other`
    pub fn is_higher(&self, other: &Version) -> bool {
        is_higher(&self.segments, &other.segments)
    }
}

/// Compare two segment lists position by position, missing segments as 0
pub fn compare_segments(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let left = a.get(i).copied().unwrap_or(0);
        let right = b.get(i).copied().unwrap_or(0);
        match left.cmp(&right) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// True iff `a` is strictly greater than `b` after zero padding
pub fn is_higher(a: &[u64], b: &[u64]) -> bool {
    compare_segments(a, b) == Ordering::Greater
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.literal)
    }
}
