/// Sleep duration, composite score and score tier

use std::collections::BTreeMap;

use serde::Serialize;

use super::{MINUTES_PER_DAY, MINUTES_PER_HOUR};
use crate::labels::{LabelLookup, Language};

/// Parse a 24-hour `HH:MM` clock string into minutes since midnight.
fn parse_clock(s: &str) -> Option<u32> {
    let (h, m) = s.trim().split_once(':')?;
    let hours: u32 = h.trim().parse().ok()?;
    let minutes: u32 = m.trim().parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * MINUTES_PER_HOUR + minutes)
}

/// Minutes slept between `bedtime` and `wake`.
///
/// A wake time at or before the bedtime is taken to be on the next day, so
/// `23:30 -> 07:15` is 465 minutes. Identical times are the degenerate case
/// and yield 0. Missing or malformed input yields 0.
pub fn duration_minutes(bedtime: &str, wake: &str) -> u32 {
    let (Some(bed), Some(mut wake)) = (parse_clock(bedtime), parse_clock(wake)) else {
        return 0;
    };
    if bed == wake {
        return 0;
    }
    if wake < bed {
        wake += MINUTES_PER_DAY;
    }
    wake - bed
}

/// Format minutes as `Xh Ym`.
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / MINUTES_PER_HOUR, minutes % MINUTES_PER_HOUR)
}

/// Sleep duration as printed on a receipt, e.g. `"7h 45m"`.
pub fn sleep_duration(bedtime: &str, wake: &str) -> String {
    format_duration(duration_minutes(bedtime, wake))
}

/// Inputs of the composite sleep score, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SleepMetrics {
    pub quality: f64,
    pub deep_sleep: f64,
    pub wake_freshness: f64,
}

impl SleepMetrics {
    /// Read the score inputs from a record's metric map; absent keys count as 0.
    pub fn from_map(map: &BTreeMap<String, f64>) -> Self {
        let get = |k: &str| map.get(k).copied().unwrap_or(0.0);
        SleepMetrics {
            quality: get("quality"),
            deep_sleep: get("deepSleep"),
            wake_freshness: get("wakeFreshness"),
        }
    }
}

// Weights in percent; they sum to 100.
const QUALITY_WEIGHT: f64 = 40.0;
const DEEP_SLEEP_WEIGHT: f64 = 30.0;
const WAKE_FRESHNESS_WEIGHT: f64 = 30.0;

/// Weighted sleep score in `[0, 100]`, rounded half-up.
///
/// The weighted sum is accumulated in hundredths so integer inputs never pick
/// up binary fraction error before rounding: 40*80 + 30*75 + 30*70 = 7550,
/// which rounds up to 76.
pub fn sleep_score(metrics: &SleepMetrics) -> u32 {
    let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
    let hundredths = QUALITY_WEIGHT * finite(metrics.quality)
        + DEEP_SLEEP_WEIGHT * finite(metrics.deep_sleep)
        + WAKE_FRESHNESS_WEIGHT * finite(metrics.wake_freshness);
    let rounded = ((hundredths + 50.0) / 100.0).floor();
    rounded.clamp(0.0, 100.0) as u32
}

/// Qualitative bucket of a sleep score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl SleepTier {
    pub fn label_key(self) -> &'static str {
        match self {
            SleepTier::Excellent => "tier.sleep.excellent",
            SleepTier::Good => "tier.sleep.good",
            SleepTier::Fair => "tier.sleep.fair",
            SleepTier::Poor => "tier.sleep.poor",
        }
    }
}

/// Lower bounds (inclusive) of each tier above `Poor`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepThresholds {
    pub excellent: u32,
    pub good: u32,
    pub fair: u32,
}

impl Default for SleepThresholds {
    fn default() -> Self {
        Self {
            excellent: 80,
            good: 60,
            fair: 40,
        }
    }
}

/// Resolve the tier of `score`. Tiers are checked from the top so a boundary
/// value belongs to the higher tier.
pub fn sleep_tier(score: u32, thresholds: &SleepThresholds) -> SleepTier {
    if score >= thresholds.excellent {
        SleepTier::Excellent
    } else if score >= thresholds.good {
        SleepTier::Good
    } else if score >= thresholds.fair {
        SleepTier::Fair
    } else {
        SleepTier::Poor
    }
}

/// Display text for each sleep tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SleepLabelSet {
    pub excellent: String,
    pub good: String,
    pub fair: String,
    pub poor: String,
}

impl SleepLabelSet {
    pub fn localized(labels: &dyn LabelLookup, lang: Language) -> Self {
        Self {
            excellent: labels.lookup(SleepTier::Excellent.label_key(), lang),
            good: labels.lookup(SleepTier::Good.label_key(), lang),
            fair: labels.lookup(SleepTier::Fair.label_key(), lang),
            poor: labels.lookup(SleepTier::Poor.label_key(), lang),
        }
    }

    pub fn get(&self, tier: SleepTier) -> &str {
        match tier {
            SleepTier::Excellent => &self.excellent,
            SleepTier::Good => &self.good,
            SleepTier::Fair => &self.fair,
            SleepTier::Poor => &self.poor,
        }
    }
}

/// Label of the tier `score` falls in.
pub fn sleep_score_label<'a>(
    score: u32,
    thresholds: &SleepThresholds,
    labels: &'a SleepLabelSet,
) -> &'a str {
    labels.get(sleep_tier(score, thresholds))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> SleepLabelSet {
        SleepLabelSet {
            excellent: "Excellent".into(),
            good: "Good".into(),
            fair: "Fair".into(),
            poor: "Poor".into(),
        }
    }

    #[test]
    fn duration_rolls_over_midnight() {
        assert_eq!(sleep_duration("23:30", "07:15"), "7h 45m");
        assert_eq!(sleep_duration("22:00", "06:00"), "8h 0m");
        assert_eq!(sleep_duration("01:00", "09:00"), "8h 0m");
    }

    #[test]
    fn identical_times_are_zero_length() {
        assert_eq!(sleep_duration("09:00", "09:00"), "0h 0m");
        assert_eq!(sleep_duration("00:00", "00:00"), "0h 0m");
    }

    #[test]
    fn malformed_input_degrades_to_zero() {
        assert_eq!(sleep_duration("", "07:00"), "0h 0m");
        assert_eq!(sleep_duration("23:00", ""), "0h 0m");
        assert_eq!(sleep_duration("7", "08:00"), "0h 0m");
        assert_eq!(sleep_duration("25:00", "08:00"), "0h 0m");
        assert_eq!(sleep_duration("ab:cd", "08:00"), "0h 0m");
    }

    #[test]
    fn score_rounds_half_up() {
        let m = SleepMetrics {
            quality: 80.0,
            deep_sleep: 75.0,
            wake_freshness: 70.0,
        };
        assert_eq!(sleep_score(&m), 76);
    }

    #[test]
    fn score_missing_metrics_default_to_zero() {
        let mut map = BTreeMap::new();
        map.insert("quality".to_string(), 100.0);
        assert_eq!(sleep_score(&SleepMetrics::from_map(&map)), 40);
        assert_eq!(sleep_score(&SleepMetrics::default()), 0);
    }

    #[test]
    fn score_is_clamped() {
        let m = SleepMetrics {
            quality: 500.0,
            deep_sleep: 500.0,
            wake_freshness: 500.0,
        };
        assert_eq!(sleep_score(&m), 100);
        let m = SleepMetrics {
            quality: -50.0,
            deep_sleep: f64::NAN,
            wake_freshness: 0.0,
        };
        assert_eq!(sleep_score(&m), 0);
    }

    #[test]
    fn boundaries_belong_to_higher_tier() {
        let t = SleepThresholds::default();
        let l = labels();
        assert_eq!(sleep_score_label(80, &t, &l), "Excellent");
        assert_eq!(sleep_score_label(79, &t, &l), "Good");
        assert_eq!(sleep_score_label(60, &t, &l), "Good");
        assert_eq!(sleep_score_label(40, &t, &l), "Fair");
        assert_eq!(sleep_score_label(39, &t, &l), "Poor");
    }
}
