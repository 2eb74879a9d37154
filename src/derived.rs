//! Values computed from a record for display
//!
//! [`DerivedMetrics`] is rebuilt from the current record on every call and
//! never written back. Which calculators run is decided by the kind's schema:
//! a sleep duration slot yields a duration, a score slot yields a score, and
//! so on.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::barcode::{pattern_from, BarSegment, BARCODE_BARS};
use crate::calc::{
    caffeine_status, shopping_total, sleep_duration, sleep_score, sleep_tier, CaffeineLabelSet,
    CaffeineStatus, ShoppingTotal, SleepLabelSet, SleepMetrics, SleepThresholds, SleepTier,
};
use crate::labels::{LabelLookup, Language};
use crate::record::{ReceiptKind, ReceiptRecord};
use crate::schema::{schema_for, View};

/// Composite sleep score with its tier and display label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepScoreSummary {
    pub score: u32,
    pub tier: SleepTier,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub kind: ReceiptKind,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_score: Option<SleepScoreSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caffeine: Option<CaffeineStatus>,
    /// Totals keyed by item-list field
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub totals: BTreeMap<String, ShoppingTotal>,
    pub barcode: Vec<BarSegment>,
}

impl DerivedMetrics {
    pub fn compute(record: &ReceiptRecord, labels: &dyn LabelLookup, lang: Language) -> Self {
        let mut out = DerivedMetrics {
            kind: record.kind,
            language: lang,
            sleep_duration: None,
            sleep_score: None,
            caffeine: None,
            totals: BTreeMap::new(),
            barcode: pattern_from(record, BARCODE_BARS),
        };

        for spec in schema_for(record.kind).fields() {
            match spec.view {
                View::SleepDuration { bedtime, wake } => {
                    out.sleep_duration = Some(sleep_duration(record.text(bedtime), record.text(wake)));
                }
                View::SleepScore => {
                    let metrics = record
                        .metrics(spec.key)
                        .map(SleepMetrics::from_map)
                        .unwrap_or_default();
                    let score = sleep_score(&metrics);
                    let tier = sleep_tier(score, &SleepThresholds::default());
                    let tier_labels = SleepLabelSet::localized(labels, lang);
                    out.sleep_score = Some(SleepScoreSummary {
                        score,
                        tier,
                        label: tier_labels.get(tier).to_string(),
                    });
                }
                View::CaffeineStatus => {
                    let total = record.number(spec.key).unwrap_or(0.0);
                    out.caffeine = Some(caffeine_status(
                        total,
                        &CaffeineLabelSet::localized(labels, lang),
                    ));
                }
                View::Items { .. } => {
                    out.totals
                        .insert(spec.key.to_string(), shopping_total(record.items(spec.key)));
                }
                _ => {}
            }
        }
        out
    }

    pub fn total(&self, field: &str) -> Option<&ShoppingTotal> {
        self.totals.get(field)
    }
}
