use receiptgen::barcode::{hash_str, pattern_from, BarSegment};
use receiptgen::calc::{
    caffeine_status, shopping_total, sleep_duration, sleep_score, sleep_score_label, CaffeineLabelSet,
    CaffeineTier, SleepLabelSet, SleepMetrics, SleepThresholds,
};
use receiptgen::labels::{BundledLabels, Language};
use receiptgen::record::{FieldValue, LineItem, ReceiptKind, ReceiptRecord};

fn item(name: &str, price: Option<f64>) -> LineItem {
    LineItem {
        name: name.to_string(),
        price,
    }
}

#[test]
fn pattern_is_deterministic_for_equal_records() {
    let a = ReceiptRecord::new(ReceiptKind::Life)
        .with("date", FieldValue::Text("2025/03/01".into()))
        .with("mood", FieldValue::Choice("HAPPY".into()));
    // Same content, inserted in the other order
    let b = ReceiptRecord::new(ReceiptKind::Life)
        .with("mood", FieldValue::Choice("HAPPY".into()))
        .with("date", FieldValue::Text("2025/03/01".into()));

    let pa = pattern_from(&a, 32);
    assert_eq!(pa, pattern_from(&a, 32));
    assert_eq!(pa, pattern_from(&b, 32));
    assert_eq!(pa.len(), 32);
    assert!(pa.iter().all(|s| (2..=4).contains(&s.width)));
}

#[test]
fn empty_input_hashes_to_zero() {
    assert_eq!(hash_str(""), 0);
    let bars: Vec<BarSegment> = pattern_from(&"", 0);
    assert!(bars.is_empty());
}

#[test]
fn midnight_rollover() {
    assert_eq!(sleep_duration("23:30", "07:15"), "7h 45m");
    assert_eq!(sleep_duration("00:00", "00:00"), "0h 0m");
    assert_eq!(sleep_duration("22:00", "06:00"), "8h 0m");
    assert_eq!(sleep_duration("01:00", "09:00"), "8h 0m");
    assert_eq!(sleep_duration("", "07:00"), "0h 0m");
    assert_eq!(sleep_duration("25:99", "07:00"), "0h 0m");
}

#[test]
fn weighted_sleep_score_rounds_half_up() {
    let m = SleepMetrics {
        quality: 80.0,
        deep_sleep: 75.0,
        wake_freshness: 70.0,
    };
    assert_eq!(sleep_score(&m), 76);
    assert_eq!(sleep_score(&SleepMetrics::default()), 0);
}

#[test]
fn score_boundary_belongs_to_higher_tier() {
    let labels = SleepLabelSet::localized(&BundledLabels, Language::En);
    let t = SleepThresholds::default();
    assert_eq!(sleep_score_label(80, &t, &labels), labels.excellent);
    assert_eq!(sleep_score_label(79, &t, &labels), labels.good);
    assert_eq!(sleep_score_label(60, &t, &labels), labels.good);
    assert_eq!(sleep_score_label(40, &t, &labels), labels.fair);
    assert_eq!(sleep_score_label(39, &t, &labels), labels.poor);
}

#[test]
fn caffeine_tiers_are_upper_exclusive() {
    let labels = CaffeineLabelSet::localized(&BundledLabels, Language::En);
    assert_eq!(caffeine_status(199.0, &labels).tier, CaffeineTier::Safe);
    assert_eq!(caffeine_status(200.0, &labels).tier, CaffeineTier::Moderate);
    assert_eq!(caffeine_status(399.0, &labels).tier, CaffeineTier::High);
    assert_eq!(caffeine_status(400.0, &labels).tier, CaffeineTier::Danger);
    assert_eq!(caffeine_status(200.0, &labels).label, labels.moderate);
}

#[test]
fn shopping_total_skips_missing_prices() {
    let t = shopping_total(&[
        item("A", Some(599.0)),
        item("B", None),
        item("C", Some(79.0)),
    ]);
    assert_eq!(t.total, 678.0);
    assert!(t.has_total);

    let t = shopping_total(&[item("X", None)]);
    assert_eq!(t.total, 0.0);
    assert!(!t.has_total);

    let t = shopping_total(&[item("", Some(10.0)), item("D", Some(f64::NAN))]);
    assert_eq!(t.total, 10.0);
    assert!(t.has_total);
}

#[test]
fn refund_that_zeroes_the_total_still_has_a_total() {
    let t = shopping_total(&[item("coat", Some(100.0)), item("refund", Some(-100.0))]);
    assert_eq!(t.total, 0.0);
    assert!(t.has_total);
}
