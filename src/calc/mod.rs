//! Domain calculators
//!
//! Small pure functions that turn raw record fields into the derived values a
//! receipt displays. None of them fail: malformed input degrades to a safe
//! default (zero duration, zero score, excluded price) so a half-filled form
//! still renders.

pub mod caffeine;
pub mod shopping;
pub mod sleep;

pub use caffeine::{caffeine_status, CaffeineLabelSet, CaffeineStatus, CaffeineThresholds, CaffeineTier};
pub use shopping::{shopping_total, ShoppingTotal};
pub use sleep::{
    duration_minutes, format_duration, sleep_duration, sleep_score, sleep_score_label, sleep_tier,
    SleepLabelSet, SleepMetrics, SleepThresholds, SleepTier,
};

/// Minutes in one hour
pub const MINUTES_PER_HOUR: u32 = 60;
/// Minutes in one day
pub const MINUTES_PER_DAY: u32 = 1440;
