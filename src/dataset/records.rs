//! Row types for source relations and stage artifacts
//!
//! Source rows deserialize straight from the relation export with their
//! source-facing column names. Downstream rows carry parsed values.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Textual order-date format in the source (`"25-12-2022"`)
pub const ORDER_DATE_FORMAT: &str = "%d-%m-%Y";

/// Month-label format used for the target join (`"Dec-22"`)
pub const MONTH_LABEL_FORMAT: &str = "%b-%y";

/// Parse a source order date, failing on any non-conforming value
pub fn parse_order_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, ORDER_DATE_FORMAT)
        .map_err(|_| Error::date_parse("Order Date", value, ORDER_DATE_FORMAT))
}

/// Derive the month-label bucket key from a parsed order date
pub fn month_label(date: NaiveDate) -> String {
    date.format(MONTH_LABEL_FORMAT).to_string()
}

/// Deserialize raw relation rows into typed records
pub fn decode_rows<T: DeserializeOwned>(
    relation: &str,
    rows: Vec<serde_json::Value>,
) -> Result<Vec<T>> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(|e| Error::decode(relation, e.to_string())))
        .collect()
}

// ============================================================================
// Source Relation Rows
// ============================================================================

/// One row of the `list_orders` relation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderRecord {
    /// Order identifier
    #[serde(rename = "Order ID")]
    pub order_id: String,

    /// Order date, textual day-month-year; parsed after the detail join
    #[serde(rename = "Order Date")]
    pub order_date: String,

    #[serde(rename = "CustomerName")]
    pub customer_name: Option<String>,

    #[serde(rename = "State")]
    pub state: Option<String>,

    #[serde(rename = "City")]
    pub city: Option<String>,
}

/// One row of the `order_details` relation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderDetailRecord {
    /// Order identifier
    #[serde(rename = "Order ID")]
    pub order_id: String,

    #[serde(rename = "Amount")]
    pub amount: Option<f64>,

    #[serde(rename = "Profit")]
    pub profit: Option<f64>,

    #[serde(rename = "Quantity")]
    pub quantity: Option<i64>,

    #[serde(rename = "Category")]
    pub category: Option<String>,

    #[serde(rename = "Sub-Category")]
    pub sub_category: Option<String>,
}

/// One row of the `sales_target` relation: one target per (category, month)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalesTargetRecord {
    /// Month label in the same `%b-%y` format the extractor derives
    #[serde(rename = "Month of Order Date")]
    pub month_of_order_date: String,

    #[serde(rename = "Category")]
    pub category: Option<String>,

    #[serde(rename = "Target")]
    pub target: Option<f64>,
}

// ============================================================================
// Stage Artifact Rows
// ============================================================================

/// Orders inner-joined with details, with the parsed date and derived label
#[derive(Debug, Clone, PartialEq)]
pub struct MergedOrder {
    pub order_id: String,
    pub order_date: NaiveDate,
    pub month_label: String,
    pub customer_name: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub amount: Option<f64>,
    pub profit: Option<f64>,
    pub quantity: Option<i64>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
}

impl MergedOrder {
    /// Combine a matched order/detail pair, parsing the order date
    ///
    /// Fails the run on the first date that does not conform to the
    /// day-month-year source format.
    pub fn try_new(order: OrderRecord, detail: OrderDetailRecord) -> Result<Self> {
        let order_date = parse_order_date(&order.order_date)?;
        Ok(Self {
            order_id: order.order_id,
            order_date,
            month_label: month_label(order_date),
            customer_name: order.customer_name,
            state: order.state,
            city: order.city,
            amount: detail.amount,
            profit: detail.profit,
            quantity: detail.quantity,
            category: detail.category,
            sub_category: detail.sub_category,
        })
    }
}

/// One row of the persisted intermediate dataset
///
/// Full outer join of merged orders and sales targets; every field is
/// optional because either side may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawOrderRow {
    pub order_id: Option<String>,
    pub order_date: Option<NaiveDate>,
    pub customer_name: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub amount: Option<f64>,
    pub profit: Option<f64>,
    pub quantity: Option<i64>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    /// Label derived from the order date (join helper, dropped downstream)
    pub month_year: Option<String>,
    /// The target's own month label
    pub month_of_order_date: Option<String>,
    pub target: Option<f64>,
}

impl RawOrderRow {
    /// Row where an order matched a target on (category, month label)
    pub fn from_match(merged: &MergedOrder, target: &SalesTargetRecord) -> Self {
        Self {
            order_id: Some(merged.order_id.clone()),
            order_date: Some(merged.order_date),
            customer_name: merged.customer_name.clone(),
            state: merged.state.clone(),
            city: merged.city.clone(),
            amount: merged.amount,
            profit: merged.profit,
            quantity: merged.quantity,
            category: merged.category.clone(),
            sub_category: merged.sub_category.clone(),
            month_year: Some(merged.month_label.clone()),
            month_of_order_date: Some(target.month_of_order_date.clone()),
            target: target.target,
        }
    }

    /// Row for an order with no matching target; target side null-filled
    pub fn order_only(merged: &MergedOrder) -> Self {
        Self {
            order_id: Some(merged.order_id.clone()),
            order_date: Some(merged.order_date),
            customer_name: merged.customer_name.clone(),
            state: merged.state.clone(),
            city: merged.city.clone(),
            amount: merged.amount,
            profit: merged.profit,
            quantity: merged.quantity,
            category: merged.category.clone(),
            sub_category: merged.sub_category.clone(),
            month_year: Some(merged.month_label.clone()),
            month_of_order_date: None,
            target: None,
        }
    }

    /// Row for a target with no matching order; order side null-filled
    pub fn target_only(target: &SalesTargetRecord) -> Self {
        Self {
            category: target.category.clone(),
            month_of_order_date: Some(target.month_of_order_date.clone()),
            target: target.target,
            ..Self::default()
        }
    }
}

/// One row of the final dataset, canonical schema
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinalOrderRow {
    pub order_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub customer_name: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub amount: Option<f64>,
    pub profit: Option<f64>,
    pub quantity: Option<i64>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub month_of_order_date: Option<String>,
    pub target: Option<f64>,
    /// `amount * quantity`; null when either operand is null
    pub sales: Option<f64>,
}

impl FinalOrderRow {
    /// Rename to the canonical schema, drop the helper label, derive sales
    pub fn from_raw(raw: RawOrderRow) -> Self {
        let sales = match (raw.amount, raw.quantity) {
            (Some(amount), Some(quantity)) => Some(amount * quantity as f64),
            _ => None,
        };
        Self {
            order_id: raw.order_id,
            date: raw.order_date,
            customer_name: raw.customer_name,
            state: raw.state,
            city: raw.city,
            amount: raw.amount,
            profit: raw.profit,
            quantity: raw.quantity,
            category: raw.category,
            sub_category: raw.sub_category,
            month_of_order_date: raw.month_of_order_date,
            target: raw.target,
            sales,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("25-12-2022", "Dec-22"; "december")]
    #[test_case("01-01-2023", "Jan-23"; "january")]
    #[test_case("15-06-2019", "Jun-19"; "june")]
    #[test_case("29-02-2020", "Feb-20"; "leap day")]
    fn test_month_label_from_valid_date(raw: &str, expected: &str) {
        let date = parse_order_date(raw).unwrap();
        assert_eq!(month_label(date), expected);
    }

    #[test_case("2022-12-25"; "iso order")]
    #[test_case("32-01-2022"; "day out of range")]
    #[test_case("25/12/2022"; "wrong separator")]
    #[test_case(""; "empty")]
    fn test_malformed_date_rejected(raw: &str) {
        let err = parse_order_date(raw).unwrap_err();
        assert!(err.to_string().contains("Order Date"), "{err}");
        assert!(err.to_string().contains(ORDER_DATE_FORMAT), "{err}");
    }

    #[test]
    fn test_decode_order_rows() {
        let rows = vec![json!({
            "Order ID": "B-25601",
            "Order Date": "01-04-2018",
            "CustomerName": "Bharat",
            "State": "Gujarat",
            "City": "Ahmedabad"
        })];

        let orders: Vec<OrderRecord> = decode_rows("list_orders", rows).unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_id, "B-25601");
        assert_eq!(orders[0].order_date, "01-04-2018");
        assert_eq!(orders[0].customer_name.as_deref(), Some("Bharat"));
    }

    #[test]
    fn test_decode_error_names_relation() {
        let rows = vec![json!({"Order Date": "01-04-2018"})];
        let err = decode_rows::<OrderRecord>("list_orders", rows).unwrap_err();
        assert!(err.to_string().contains("list_orders"), "{err}");
    }

    #[test]
    fn test_merged_order_parses_date_once() {
        let order = OrderRecord {
            order_id: "B-1".to_string(),
            order_date: "25-12-2022".to_string(),
            customer_name: None,
            state: None,
            city: None,
        };
        let detail = OrderDetailRecord {
            order_id: "B-1".to_string(),
            amount: Some(100.0),
            profit: Some(10.0),
            quantity: Some(3),
            category: Some("Furniture".to_string()),
            sub_category: None,
        };

        let merged = MergedOrder::try_new(order, detail).unwrap();
        assert_eq!(merged.month_label, "Dec-22");
        assert_eq!(
            merged.order_date,
            NaiveDate::from_ymd_opt(2022, 12, 25).unwrap()
        );
    }

    #[test]
    fn test_merged_order_fails_on_bad_date() {
        let order = OrderRecord {
            order_id: "B-1".to_string(),
            order_date: "not-a-date".to_string(),
            customer_name: None,
            state: None,
            city: None,
        };
        let detail = OrderDetailRecord {
            order_id: "B-1".to_string(),
            amount: None,
            profit: None,
            quantity: None,
            category: None,
            sub_category: None,
        };

        assert!(MergedOrder::try_new(order, detail).is_err());
    }

    #[test]
    fn test_sales_derivation() {
        let raw = RawOrderRow {
            amount: Some(10.0),
            quantity: Some(2),
            ..RawOrderRow::default()
        };
        assert_eq!(FinalOrderRow::from_raw(raw).sales, Some(20.0));
    }

    #[test_case(None, Some(2); "null amount")]
    #[test_case(Some(10.0), None; "null quantity")]
    #[test_case(None, None; "both null")]
    fn test_sales_null_propagation(amount: Option<f64>, quantity: Option<i64>) {
        let raw = RawOrderRow {
            amount,
            quantity,
            ..RawOrderRow::default()
        };
        assert_eq!(FinalOrderRow::from_raw(raw).sales, None);
    }
}
