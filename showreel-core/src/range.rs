//! HTTP Range negotiation for recording artifacts.
//!
//! Decides between a full-content (200) and a partial-content (206)
//! transfer. The parser is lenient: the requested start
//! offset is the first run of decimal digits anywhere in the header
//! value, and a client-supplied end offset is never honored. Each partial
//! response serves at most one chunk-sized window, so seeking clients
//! issue a fresh request per window.

use crate::artifact::ArtifactError;

/// Contiguous byte span of a partial-content response.
///
/// Invariant: `start <= end <= total_size - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteWindow {
    /// First byte offset served, inclusive
    pub start: u64,
    /// Last byte offset served, inclusive
    pub end: u64,
    /// Size of the whole artifact
    pub total_size: u64,
}

impl ByteWindow {
    /// Number of bytes the window transmits.
    pub fn content_length(&self) -> u64 {
        self.end - self.start + 1
    }

    /// `Content-Range` header value for this window.
    pub fn content_range(&self) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, self.total_size)
    }
}

/// Transfer plan for a recording request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePlan {
    /// Whole file from offset 0, status 200
    Full { total_size: u64 },
    /// One clamped chunk window, status 206
    Partial(ByteWindow),
}

/// Decide the transfer plan for an optional `Range` header.
///
/// Without a header the whole file is served. With one, the window runs
/// from the requested start to `min(start + chunk_window, total_size - 1)`.
///
/// # Examples
/// ```
/// use showreel_core::range::{RangePlan, negotiate};
///
/// let plan = negotiate(Some("bytes=500-"), 10_000_000, 1_000_000).unwrap();
/// match plan {
///     RangePlan::Partial(window) => assert_eq!((window.start, window.end), (500, 1_000_500)),
///     RangePlan::Full { .. } => unreachable!(),
/// }
/// ```
///
/// # Errors
///
/// - `ArtifactError::RangeNotSatisfiable` - If the requested start lies at
///   or beyond the end of the artifact
pub fn negotiate(
    range_header: Option<&str>,
    total_size: u64,
    chunk_window: u64,
) -> Result<RangePlan, ArtifactError> {
    let Some(raw) = range_header else {
        return Ok(RangePlan::Full { total_size });
    };

    let start = requested_start(raw);
    if start >= total_size {
        return Err(ArtifactError::RangeNotSatisfiable {
            start,
            size: total_size,
        });
    }

    let end = start.saturating_add(chunk_window).min(total_size - 1);
    Ok(RangePlan::Partial(ByteWindow {
        start,
        end,
        total_size,
    }))
}

/// Extract the requested start offset: the first maximal digit run.
///
/// No digits means offset 0. A run too long for `u64` saturates so the
/// request falls out as unsatisfiable instead of silently restarting at 0.
fn requested_start(raw: &str) -> u64 {
    let bytes = raw.as_bytes();
    let Some(first) = bytes.iter().position(|byte| byte.is_ascii_digit()) else {
        return 0;
    };
    let run = bytes[first..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count();

    raw[first..first + run].parse().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_header_serves_full_file() {
        let plan = negotiate(None, 5000, 1_000_000).unwrap();
        assert_eq!(plan, RangePlan::Full { total_size: 5000 });
    }

    #[test]
    fn test_standard_prefix_range() {
        let plan = negotiate(Some("bytes=1000-"), 5000, 1_000_000).unwrap();
        match plan {
            RangePlan::Partial(window) => {
                assert_eq!(window.start, 1000);
                assert_eq!(window.end, 4999);
                assert_eq!(window.content_length(), 4000);
            }
            RangePlan::Full { .. } => panic!("expected partial plan"),
        }
    }

    #[test]
    fn test_end_offset_is_ignored() {
        // "bytes=100-199" asks for 100 bytes; the server still serves a
        // full chunk window starting at 100.
        let plan = negotiate(Some("bytes=100-199"), 5000, 1_000_000).unwrap();
        match plan {
            RangePlan::Partial(window) => assert_eq!((window.start, window.end), (100, 4999)),
            RangePlan::Full { .. } => panic!("expected partial plan"),
        }
    }

    #[test]
    fn test_window_clamps_to_chunk() {
        let plan = negotiate(Some("bytes=0-"), 10_000_000, 1_000_000).unwrap();
        match plan {
            RangePlan::Partial(window) => {
                assert_eq!(window.start, 0);
                assert_eq!(window.end, 1_000_000);
                // Window arithmetic is end-inclusive: one byte more than
                // the configured chunk size.
                assert_eq!(window.content_length(), 1_000_001);
            }
            RangePlan::Full { .. } => panic!("expected partial plan"),
        }
    }

    #[test]
    fn test_suffix_range_quirk_reads_digits_as_start() {
        // "bytes=-500" means "last 500 bytes" in RFC 7233; the lenient
        // parser reads the digit run as a start offset instead.
        let plan = negotiate(Some("bytes=-500"), 5000, 1_000_000).unwrap();
        match plan {
            RangePlan::Partial(window) => assert_eq!(window.start, 500),
            RangePlan::Full { .. } => panic!("expected partial plan"),
        }
    }

    #[test]
    fn test_garbage_header_defaults_to_start_zero() {
        let plan = negotiate(Some("no digits here"), 5000, 1_000_000).unwrap();
        match plan {
            RangePlan::Partial(window) => assert_eq!(window.start, 0),
            RangePlan::Full { .. } => panic!("expected partial plan"),
        }
    }

    #[test]
    fn test_start_at_end_is_unsatisfiable() {
        let result = negotiate(Some("bytes=5000-"), 5000, 1_000_000);
        assert!(matches!(
            result,
            Err(ArtifactError::RangeNotSatisfiable { start: 5000, size: 5000 })
        ));
    }

    #[test]
    fn test_range_header_on_empty_file_is_unsatisfiable() {
        let result = negotiate(Some("bytes=0-"), 0, 1_000_000);
        assert!(matches!(
            result,
            Err(ArtifactError::RangeNotSatisfiable { start: 0, size: 0 })
        ));
    }

    #[test]
    fn test_overflowing_digit_run_is_unsatisfiable() {
        let result = negotiate(Some("bytes=99999999999999999999999-"), 5000, 1_000_000);
        assert!(matches!(
            result,
            Err(ArtifactError::RangeNotSatisfiable { .. })
        ));
    }

    #[test]
    fn test_last_byte_window() {
        let plan = negotiate(Some("bytes=4999-"), 5000, 1_000_000).unwrap();
        match plan {
            RangePlan::Partial(window) => {
                assert_eq!((window.start, window.end), (4999, 4999));
                assert_eq!(window.content_length(), 1);
                assert_eq!(window.content_range(), "bytes 4999-4999/5000");
            }
            RangePlan::Full { .. } => panic!("expected partial plan"),
        }
    }
}
