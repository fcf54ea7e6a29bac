use std::fmt;
use std::str::FromStr;

use crate::version::error::VersionError;

/// Dotted numeric version such as `12.0.1.2.3`
///
/// Segments compare lexicographically, so `12.0.1` < `12.0.1.0` < `12.1`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    segments: Vec<u64>,
}

impl Version {
    pub fn new(segments: Vec<u64>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    /// Leading segment, used to scope tag searches
    pub fn major(&self) -> u64 {
        self.segments.first().copied().unwrap_or_default()
    }

    /// All-zero version with the same number of segments
    pub fn zero_like(&self) -> Self {
        Self::new(vec![0; self.segments.len()])
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Err(VersionError::Empty);
        }

        let segments = input
            .split('.')
            .map(|segment| {
                // u64::from_str accepts a leading '+', segments are digits only
                if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid_segment(input, segment));
                }
                segment
                    .parse::<u64>()
                    .map_err(|_| invalid_segment(input, segment))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(segments))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

fn invalid_segment(input: &str, segment: &str) -> VersionError {
    VersionError::InvalidSegment {
        input: input.to_string(),
        segment: segment.to_string(),
    }
}
