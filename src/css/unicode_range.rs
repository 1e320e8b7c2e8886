//! Unicode code-point range algebra.
//!
//! # Responsibilities
//! - Parse CSS `unicode-range` values into half-open intervals
//! - Remove one interval list's coverage from another
//! - Serialize interval lists back to `unicode-range` syntax
//!
//! # Design Decisions
//! - Intervals are half-open `[begin, end)` so widths and clipping stay
//!   off-by-one free
//! - Disjointness and ordering are a convention inherited from the parser,
//!   not enforced here

/// Ordered list of half-open `[begin, end)` code-point intervals.
pub type CodePointRange = Vec<(u32, u32)>;

/// Parse a comma-separated `unicode-range` value.
///
/// Each token is `U+HEX` (one code point) or `U+HEX-HEX` (inclusive span).
/// Hex digits are case-insensitive. Tokens that do not parse are skipped.
pub fn parse_range(range: &str) -> CodePointRange {
    range
        .split(',')
        .filter_map(|token| {
            let mut parts = token.trim().split(['+', '-']).skip(1);
            let begin = u32::from_str_radix(parts.next()?, 16).ok()?;
            let end = match parts.next() {
                Some(hex) => u32::from_str_radix(hex, 16).ok()? + 1,
                None => begin + 1,
            };
            Some((begin, end))
        })
        .collect()
}

/// Remove the coverage of `rhs` from `lhs`.
///
/// Each `rhs` interval is folded over the accumulated result in order, so
/// removals compound. Intervals in the working list that straddle a removed
/// interval are clipped to the parts outside it.
pub fn subtract_range(lhs: CodePointRange, rhs: &[(u32, u32)]) -> CodePointRange {
    rhs.iter().fold(lhs, |working, &(begin, end)| {
        let mut kept = Vec::with_capacity(working.len() + 1);
        for (b, e) in working {
            if e <= begin || end <= b {
                kept.push((b, e));
            } else {
                if b < begin {
                    kept.push((b, begin));
                }
                if end < e {
                    kept.push((end, e));
                }
            }
        }
        kept
    })
}

/// Serialize intervals back to `unicode-range` syntax.
///
/// Width-one intervals become `U+hex`, wider ones `U+hex-hex` with the
/// inclusive upper bound. Lowercase hex, no zero padding.
pub fn generate_range(range: &[(u32, u32)]) -> String {
    range
        .iter()
        .map(|&(begin, end)| {
            if end - begin == 1 {
                format!("U+{begin:x}")
            } else {
                format!("U+{begin:x}-{:x}", end - 1)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
