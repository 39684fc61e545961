//! Hash joins over the typed datasets
//!
//! Both joins preserve left-side input order and produce the full
//! cross-product when a key repeats on either side. The outer join appends
//! never-matched right rows after all left rows, null-filling the missing
//! side.

use super::records::{MergedOrder, OrderDetailRecord, OrderRecord, RawOrderRow, SalesTargetRecord};
use std::collections::HashMap;

/// Inner-join orders with order details on the order identifier
///
/// Rows without a counterpart on either side are dropped. Duplicate order
/// identifiers on the detail side yield one output pair per detail row.
pub fn inner_join_on_order_id(
    orders: Vec<OrderRecord>,
    details: Vec<OrderDetailRecord>,
) -> Vec<(OrderRecord, OrderDetailRecord)> {
    let mut by_order_id: HashMap<&str, Vec<&OrderDetailRecord>> = HashMap::new();
    for detail in &details {
        by_order_id
            .entry(detail.order_id.as_str())
            .or_default()
            .push(detail);
    }

    let mut joined = Vec::new();
    for order in &orders {
        if let Some(matches) = by_order_id.get(order.order_id.as_str()) {
            for detail in matches {
                joined.push((order.clone(), (*detail).clone()));
            }
        }
    }
    joined
}

/// Join key for the target join: (category, month label)
///
/// A null category on both sides compares equal, so target rows without a
/// category still bucket together.
type CategoryMonthKey = (Option<String>, String);

/// Full outer join of merged orders against sales targets
///
/// Left key is (category, derived month label); right key is (category, the
/// target's own month label). Every input row appears at least once: matched
/// pairs as cross-products, unmatched rows with the other side null-filled.
pub fn outer_join_on_category_month(
    merged: Vec<MergedOrder>,
    targets: Vec<SalesTargetRecord>,
) -> Vec<RawOrderRow> {
    let mut by_key: HashMap<CategoryMonthKey, Vec<usize>> = HashMap::new();
    for (idx, target) in targets.iter().enumerate() {
        let key = (target.category.clone(), target.month_of_order_date.clone());
        by_key.entry(key).or_default().push(idx);
    }

    let mut matched = vec![false; targets.len()];
    let mut joined = Vec::new();

    for order in &merged {
        let key = (order.category.clone(), order.month_label.clone());
        match by_key.get(&key) {
            Some(indices) => {
                for &idx in indices {
                    matched[idx] = true;
                    joined.push(RawOrderRow::from_match(order, &targets[idx]));
                }
            }
            None => joined.push(RawOrderRow::order_only(order)),
        }
    }

    for (idx, target) in targets.iter().enumerate() {
        if !matched[idx] {
            joined.push(RawOrderRow::target_only(target));
        }
    }

    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn order(id: &str, date: &str) -> OrderRecord {
        OrderRecord {
            order_id: id.to_string(),
            order_date: date.to_string(),
            customer_name: None,
            state: None,
            city: None,
        }
    }

    fn detail(id: &str, category: &str, amount: f64) -> OrderDetailRecord {
        OrderDetailRecord {
            order_id: id.to_string(),
            amount: Some(amount),
            profit: None,
            quantity: Some(1),
            category: Some(category.to_string()),
            sub_category: None,
        }
    }

    fn merged(id: &str, category: Option<&str>, label: &str) -> MergedOrder {
        MergedOrder {
            order_id: id.to_string(),
            order_date: chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            month_label: label.to_string(),
            customer_name: None,
            state: None,
            city: None,
            amount: Some(10.0),
            profit: None,
            quantity: Some(2),
            category: category.map(str::to_string),
            sub_category: None,
        }
    }

    fn target(category: Option<&str>, month: &str, value: f64) -> SalesTargetRecord {
        SalesTargetRecord {
            month_of_order_date: month.to_string(),
            category: category.map(str::to_string),
            target: Some(value),
        }
    }

    #[test]
    fn test_inner_join_drops_unmatched_rows() {
        let orders = vec![order("B-1", "01-01-2023"), order("B-2", "02-01-2023")];
        let details = vec![detail("B-2", "Furniture", 50.0), detail("B-3", "Toys", 5.0)];

        let joined = inner_join_on_order_id(orders, details);

        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].0.order_id, "B-2");
        assert_eq!(joined[0].1.category.as_deref(), Some("Furniture"));
    }

    #[test]
    fn test_inner_join_duplicate_details_fan_out() {
        let orders = vec![order("B-1", "01-01-2023")];
        let details = vec![
            detail("B-1", "Furniture", 50.0),
            detail("B-1", "Clothing", 20.0),
        ];

        let joined = inner_join_on_order_id(orders, details);

        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].1.category.as_deref(), Some("Furniture"));
        assert_eq!(joined[1].1.category.as_deref(), Some("Clothing"));
    }

    #[test]
    fn test_inner_join_empty_sides() {
        assert!(inner_join_on_order_id(vec![], vec![detail("B-1", "X", 1.0)]).is_empty());
        assert!(inner_join_on_order_id(vec![order("B-1", "01-01-2023")], vec![]).is_empty());
    }

    #[test]
    fn test_outer_join_keeps_both_sides() {
        let merged_rows = vec![
            merged("B-1", Some("Furniture"), "Jan-23"),
            merged("B-2", Some("Clothing"), "Jan-23"),
        ];
        let targets = vec![
            target(Some("Furniture"), "Jan-23", 1000.0),
            target(Some("Electronics"), "Jan-23", 900.0),
        ];

        let joined = outer_join_on_category_month(merged_rows, targets);

        assert_eq!(joined.len(), 3);

        // matched order carries both labels and the target
        assert_eq!(joined[0].order_id.as_deref(), Some("B-1"));
        assert_eq!(joined[0].month_year.as_deref(), Some("Jan-23"));
        assert_eq!(joined[0].month_of_order_date.as_deref(), Some("Jan-23"));
        assert_eq!(joined[0].target, Some(1000.0));

        // unmatched order keeps its label, target side null
        assert_eq!(joined[1].order_id.as_deref(), Some("B-2"));
        assert_eq!(joined[1].month_of_order_date, None);
        assert_eq!(joined[1].target, None);

        // unmatched target appended with order side null
        assert_eq!(joined[2].order_id, None);
        assert_eq!(joined[2].month_year, None);
        assert_eq!(joined[2].category.as_deref(), Some("Electronics"));
        assert_eq!(joined[2].target, Some(900.0));
    }

    #[test]
    fn test_outer_join_duplicate_keys_cross_product() {
        // two orders and two targets share (Furniture, Jan-23): 2x2 = 4 rows
        let merged_rows = vec![
            merged("B-1", Some("Furniture"), "Jan-23"),
            merged("B-2", Some("Furniture"), "Jan-23"),
        ];
        let targets = vec![
            target(Some("Furniture"), "Jan-23", 1000.0),
            target(Some("Furniture"), "Jan-23", 1100.0),
        ];

        let joined = outer_join_on_category_month(merged_rows, targets);

        assert_eq!(joined.len(), 4);
        let b1_targets: Vec<f64> = joined
            .iter()
            .filter(|row| row.order_id.as_deref() == Some("B-1"))
            .map(|row| row.target.unwrap())
            .collect();
        assert_eq!(b1_targets, vec![1000.0, 1100.0]);
    }

    #[test]
    fn test_outer_join_null_category_matches_null() {
        let merged_rows = vec![merged("B-1", None, "Jan-23")];
        let targets = vec![target(None, "Jan-23", 500.0)];

        let joined = outer_join_on_category_month(merged_rows, targets);

        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].order_id.as_deref(), Some("B-1"));
        assert_eq!(joined[0].target, Some(500.0));
    }

    #[test]
    fn test_outer_join_label_mismatch_leaves_target_null() {
        // derived label and target label disagree on format: no match
        let merged_rows = vec![merged("B-1", Some("Furniture"), "Jan-23")];
        let targets = vec![target(Some("Furniture"), "January-2023", 1000.0)];

        let joined = outer_join_on_category_month(merged_rows, targets);

        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].target, None);
        assert_eq!(joined[1].order_id, None);
    }
}
