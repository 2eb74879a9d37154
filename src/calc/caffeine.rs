//! Daily caffeine intake risk tier

use serde::Serialize;

use crate::labels::{LabelLookup, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaffeineTier {
    Safe,
    Moderate,
    High,
    Danger,
}

impl CaffeineTier {
    pub fn icon(self) -> &'static str {
        match self {
            CaffeineTier::Safe => "✓",
            CaffeineTier::Moderate => "○",
            CaffeineTier::High => "!",
            CaffeineTier::Danger => "!!",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            CaffeineTier::Safe => "tier.caffeine.safe",
            CaffeineTier::Moderate => "tier.caffeine.moderate",
            CaffeineTier::High => "tier.caffeine.high",
            CaffeineTier::Danger => "tier.caffeine.danger",
        }
    }
}

/// Exclusive upper bounds in mg of the first three tiers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaffeineThresholds {
    pub safe: f64,
    pub moderate: f64,
    pub high: f64,
}

impl Default for CaffeineThresholds {
    fn default() -> Self {
        Self {
            safe: 200.0,
            moderate: 300.0,
            high: 400.0,
        }
    }
}

impl CaffeineThresholds {
    /// Each comparison is strict, so a total equal to a bound lands in the
    /// next tier up. Non-finite totals count as zero.
    pub fn tier(&self, total_mg: f64) -> CaffeineTier {
        let mg = if total_mg.is_finite() { total_mg } else { 0.0 };
        if mg < self.safe {
            CaffeineTier::Safe
        } else if mg < self.moderate {
            CaffeineTier::Moderate
        } else if mg < self.high {
            CaffeineTier::High
        } else {
            CaffeineTier::Danger
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaffeineLabelSet {
    pub safe: String,
    pub moderate: String,
    pub high: String,
    pub danger: String,
}

impl CaffeineLabelSet {
    pub fn localized(labels: &dyn LabelLookup, lang: Language) -> Self {
        Self {
            safe: labels.lookup(CaffeineTier::Safe.label_key(), lang),
            moderate: labels.lookup(CaffeineTier::Moderate.label_key(), lang),
            high: labels.lookup(CaffeineTier::High.label_key(), lang),
            danger: labels.lookup(CaffeineTier::Danger.label_key(), lang),
        }
    }

    fn get(&self, tier: CaffeineTier) -> &str {
        match tier {
            CaffeineTier::Safe => &self.safe,
            CaffeineTier::Moderate => &self.moderate,
            CaffeineTier::High => &self.high,
            CaffeineTier::Danger => &self.danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaffeineStatus {
    pub tier: CaffeineTier,
    pub label: String,
    pub icon: &'static str,
}

/// Status line for a day's caffeine total, using the default thresholds.
pub fn caffeine_status(total_mg: f64, labels: &CaffeineLabelSet) -> CaffeineStatus {
    let tier = CaffeineThresholds::default().tier(total_mg);
    CaffeineStatus {
        tier,
        label: labels.get(tier).to_string(),
        icon: tier.icon(),
    }
}
