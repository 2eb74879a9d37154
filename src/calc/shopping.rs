//! Shopping list total

use serde::Serialize;

use crate::record::LineItem;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShoppingTotal {
    pub total: f64,
    /// False iff no item carried a usable price
    pub has_total: bool,
}

/// Sum every finite price. Items without a price, or with a NaN/infinite
/// one, are skipped. Names are not inspected: hiding unnamed lines is a
/// rendering decision. Negative prices (refunds, discounts) are summed.
pub fn shopping_total(items: &[LineItem]) -> ShoppingTotal {
    let mut total = 0.0;
    let mut priced = 0usize;
    for price in items.iter().filter_map(|i| i.price).filter(|p| p.is_finite()) {
        total += price;
        priced += 1;
    }
    ShoppingTotal {
        total,
        has_total: priced > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: Option<f64>) -> LineItem {
        LineItem {
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn skips_missing_prices() {
        let items = vec![item("A", Some(599.0)), item("B", None), item("C", Some(79.0))];
        let t = shopping_total(&items);
        assert_eq!(t.total, 678.0);
        assert!(t.has_total);
    }

    #[test]
    fn nothing_priced_has_no_total() {
        let t = shopping_total(&[item("X", None)]);
        assert_eq!(t.total, 0.0);
        assert!(!t.has_total);
        assert!(!shopping_total(&[]).has_total);
    }

    #[test]
    fn nan_prices_are_excluded() {
        let t = shopping_total(&[item("X", Some(f64::NAN)), item("Y", Some(5.0))]);
        assert_eq!(t.total, 5.0);
    }

    #[test]
    fn zero_total_from_refund_still_has_total() {
        let t = shopping_total(&[item("coat", Some(100.0)), item("refund", Some(-100.0))]);
        assert_eq!(t.total, 0.0);
        assert!(t.has_total);
    }

    #[test]
    fn unnamed_items_still_count() {
        let t = shopping_total(&[item("", Some(12.0))]);
        assert_eq!(t.total, 12.0);
    }
}
