//! Deterministic barcode art derived from receipt data.
//!
//! The pattern is decorative: a record is serialized to canonical JSON, its
//! UTF-16 code units are summed into a hash, and each bar width is a function
//! of that hash and the bar index. Identical records always produce identical
//! bars; collisions between different records are acceptable.

use serde::Serialize;

/// Default number of bars in a receipt footer
pub const BARCODE_BARS: usize = 32;
/// Number of distinct bar widths
pub const BAR_WIDTH_RANGE: u64 = 3;
/// Narrowest bar, in logical units
pub const BAR_MIN_WIDTH: u32 = 2;

/// One bar of the footer pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BarSegment {
    pub width: u32,
    pub key: u32,
}

/// Sum of the UTF-16 code units of `s`. The empty string hashes to 0.
pub fn hash_str(s: &str) -> u64 {
    s.encode_utf16()
        .fold(0u64, |acc, unit| acc.wrapping_add(u64::from(unit)))
}

/// Hash of the canonical JSON form of `data`.
///
/// Maps must be ordered (`BTreeMap`) for the result to be independent of
/// construction order; struct fields serialize in declaration order.
pub fn hash_of<T: Serialize + ?Sized>(data: &T) -> u64 {
    match serde_json::to_string(data) {
        Ok(json) => hash_str(&json),
        Err(e) => {
            log::warn!("barcode: could not serialize data ({}); using empty hash", e);
            0
        }
    }
}

/// Bars for an already computed hash.
pub fn pattern_from_hash(hash: u64, count: usize) -> Vec<BarSegment> {
    (0..count)
        .map(|i| {
            let step = (i as u64).wrapping_add(1);
            let width = (hash.wrapping_mul(step) % BAR_WIDTH_RANGE) as u32 + BAR_MIN_WIDTH;
            BarSegment {
                width,
                key: i as u32,
            }
        })
        .collect()
}

/// Derive `count` bars from any serializable record.
pub fn pattern_from<T: Serialize + ?Sized>(data: &T, count: usize) -> Vec<BarSegment> {
    pattern_from_hash(hash_of(data), count)
}

/// Last 8 digits of an epoch-millisecond timestamp, as printed under the bars.
pub fn timestamp_tail(epoch_millis: u128) -> String {
    let s = epoch_millis.to_string();
    let start = s.len().saturating_sub(8);
    s[start..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn empty_string_hashes_to_zero() {
        assert_eq!(hash_str(""), 0);
        let bars = pattern_from_hash(0, 4);
        assert!(bars.iter().all(|b| b.width == BAR_MIN_WIDTH));
    }

    #[test]
    fn hash_sums_code_units() {
        // 'a' = 97, 'b' = 98
        assert_eq!(hash_str("ab"), 195);
        // non-BMP char contributes both surrogate halves
        assert_eq!(hash_str("\u{1F600}"), 0xD83D + 0xDE00);
    }

    #[test]
    fn widths_follow_hash_and_index() {
        let bars = pattern_from_hash(7, 3);
        // (7*1)%3+2, (7*2)%3+2, (7*3)%3+2
        let widths: Vec<u32> = bars.iter().map(|b| b.width).collect();
        assert_eq!(widths, vec![3, 4, 2]);
        let keys: Vec<u32> = bars.iter().map(|b| b.key).collect();
        assert_eq!(keys, vec![0, 1, 2]);
    }

    #[test]
    fn map_construction_order_does_not_matter() {
        let mut a = BTreeMap::new();
        a.insert("quality", 80);
        a.insert("deepSleep", 75);
        let mut b = BTreeMap::new();
        b.insert("deepSleep", 75);
        b.insert("quality", 80);
        assert_eq!(pattern_from(&a, 32), pattern_from(&b, 32));
    }

    #[test]
    fn widths_stay_in_range() {
        for bar in pattern_from(&"some receipt", 64) {
            assert!((2..=4).contains(&bar.width));
        }
    }

    #[test]
    fn timestamp_tail_keeps_last_eight_digits() {
        assert_eq!(timestamp_tail(1_700_000_123_456), "00123456");
        assert_eq!(timestamp_tail(42), "42");
    }
}
