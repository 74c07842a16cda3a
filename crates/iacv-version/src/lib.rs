use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("Malformed version number string {version}")]
    Malformed { version: String },
    #[error("Invalid segment {segment} in version: {version}")]
    InvalidSegment { segment: String, version: String },
}

impl VersionError {
    /// Short machine-readable tag for callers that report errors instead of
    /// matching on them.
    pub fn reason(&self) -> &'static str {
        match self {
            VersionError::Malformed { .. } => "no-match",
            VersionError::InvalidSegment { .. } => "bad-segment",
        }
    }

    /// The input string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            VersionError::Malformed { version } => version,
            VersionError::InvalidSegment { version, .. } => version,
        }
    }
}

// Accepted shape: optional leading "v", dot-separated decimal segments, an
// optional pre-release introduced by "-" (or attached directly for loosely
// formatted strings like "1.7rc2"), and optional "+"-introduced metadata.
// Everything after the first "-" up to the "+" is a single pre-release
// string; it is never re-split into hyphenated and loose groups.
static VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^v?([0-9]+(?:\.[0-9]+)*)(?:-([0-9A-Za-z~-]+(?:\.[0-9A-Za-z~-]+)*)|([A-Za-z~][0-9A-Za-z~-]*(?:\.[0-9A-Za-z~-]+)*))?(?:\+([0-9A-Za-z~-]+(?:\.[0-9A-Za-z~-]+)*))?$",
    )
    .expect("version pattern compiles")
});

static MAX: Lazy<Version> = Lazy::new(|| {
    let max = u64::MAX;
    Version::new(format!("{max}.{max}.{max}")).expect("max sentinel parses")
});

static ZERO: Lazy<Version> = Lazy::new(|| Version::new("0.0").expect("zero sentinel parses"));

#[derive(Debug, Clone)]
pub struct Version {
    original: String,
    segments: Vec<u64>,
    original_segment_count: usize,
    pre_release: String,
    build_metadata: String,
}

impl Version {
    pub fn new(version: impl Into<String>) -> Result<Self, VersionError> {
        let original: String = version.into();
        let captures =
            VERSION_PATTERN
                .captures(&original)
                .ok_or_else(|| VersionError::Malformed {
                    version: original.clone(),
                })?;

        let mut segments = Vec::new();
        for piece in captures[1].split('.') {
            let segment =
                piece
                    .parse::<u64>()
                    .map_err(|_| VersionError::InvalidSegment {
                        segment: piece.to_string(),
                        version: original.clone(),
                    })?;
            segments.push(segment);
        }
        let original_segment_count = segments.len();
        while segments.len() < 3 {
            segments.push(0);
        }

        // Hyphen-delimited pre-release wins over the loose form; the grammar
        // guarantees at most one of the two groups matched.
        let pre_release = captures
            .get(2)
            .or_else(|| captures.get(3))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let build_metadata = captures
            .get(4)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        Ok(Self {
            original,
            segments,
            original_segment_count,
            pre_release,
            build_metadata,
        })
    }

    /// Upper bound sentinel: the largest all-numeric version.
    pub fn max() -> &'static Version {
        &MAX
    }

    /// Lower bound sentinel, parsed from "0.0".
    pub fn zero() -> &'static Version {
        &ZERO
    }

    /// Numeric segments, zero-padded on the right to at least three.
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    /// How many numeric segments the source text actually contained.
    pub fn original_segment_count(&self) -> usize {
        self.original_segment_count
    }

    /// Pre-release identifier; empty for a final release.
    pub fn pre_release(&self) -> &str {
        &self.pre_release
    }

    /// Build metadata; carried for display only, never compared.
    pub fn build_metadata(&self) -> &str {
        &self.build_metadata
    }

    /// The input string, preserved verbatim.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre_release.is_empty()
    }

    fn cmp_segments(&self, other: &Self) -> Ordering {
        let common = self.segments.len().min(other.segments.len());
        for (a, b) in self.segments[..common].iter().zip(&other.segments[..common]) {
            if a != b {
                return a.cmp(b);
            }
        }

        // One side ran out of segments. The longer side wins only if it
        // still has a non-zero segment left.
        if other.segments[common..].iter().any(|&s| s != 0) {
            return Ordering::Less;
        }
        if self.segments[common..].iter().any(|&s| s != 0) {
            return Ordering::Greater;
        }
        Ordering::Equal
    }

    fn cmp_pre_release(&self, other: &Self) -> Ordering {
        if self.pre_release == other.pre_release {
            return Ordering::Equal;
        }
        // A final release outranks any pre-release of the same segments.
        if self.pre_release.is_empty() {
            return Ordering::Greater;
        }
        if other.pre_release.is_empty() {
            return Ordering::Less;
        }

        let ours: Vec<&str> = self.pre_release.split('.').collect();
        let theirs: Vec<&str> = other.pre_release.split('.').collect();
        for i in 0..ours.len().max(theirs.len()) {
            let a = ours.get(i).copied().unwrap_or("");
            let b = theirs.get(i).copied().unwrap_or("");
            match cmp_pre_release_part(a, b) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }
        Ordering::Equal
    }
}

fn cmp_pre_release_part(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let a_number = a.parse::<u64>().ok();
    let b_number = b.parse::<u64>().ok();

    // A missing part loses to a numeric part but beats an alphabetic one.
    if a.is_empty() {
        return if b_number.is_some() {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
    if b.is_empty() {
        return if a_number.is_some() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }

    match (a_number, b_number) {
        (Some(a), Some(b)) => a.cmp(&b),
        // Purely numeric identifiers rank below alphanumeric ones.
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

impl Default for Version {
    fn default() -> Self {
        ZERO.clone()
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Versions that compare equal agree on their first three segments
        // and on the pre-release string, so hashing only those keeps Hash
        // consistent with Eq. Metadata and the original text never count.
        self.segments[..3].hash(state);
        self.pre_release.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.original == other.original {
            return Ordering::Equal;
        }

        match self.cmp_segments(other) {
            Ordering::Equal => self.cmp_pre_release(other),
            ordering => ordering,
        }
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, VersionError> {
        Version::new(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.original)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Version::new(s).map_err(serde::de::Error::custom)
    }
}
