//! Declared Arrow schemas for the stage artifacts
//!
//! Both artifacts carry an explicit schema checked at the stage boundary:
//! the transformer looks columns up by name and raises a schema-mismatch
//! error when a name is absent or the type differs. Column names are never
//! assigned positionally.

use crate::dataset::{FinalOrderRow, RawOrderRow};
use crate::error::{Error, Result};
use arrow::array::{Array, ArrayRef, Date32Array, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Date32Type, Field, Schema};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

/// Mapping from intermediate (source-facing) column names to canonical names
pub const RENAME_MAP: [(&str, &str); 13] = [
    ("Order ID", "order_id"),
    ("Order Date", "date"),
    ("CustomerName", "customer_name"),
    ("State", "state"),
    ("City", "city"),
    ("Amount", "amount"),
    ("Profit", "profit"),
    ("Quantity", "quantity"),
    ("Category", "category"),
    ("Sub-Category", "sub_category"),
    ("Month-Year", "month_year"),
    ("Month of Order Date", "month_of_order_date"),
    ("Target", "target"),
];

/// Canonical column list of the final dataset, in warehouse order
pub const FINAL_COLUMNS: [&str; 13] = [
    "order_id",
    "date",
    "customer_name",
    "state",
    "city",
    "amount",
    "profit",
    "quantity",
    "category",
    "sub_category",
    "month_of_order_date",
    "target",
    "sales",
];

/// Schema of the intermediate dataset written by the extractor
///
/// Every field is nullable: the outer join leaves either side null-filled.
pub fn raw_orders_schema() -> Schema {
    Schema::new(vec![
        Field::new("Order ID", DataType::Utf8, true),
        Field::new("Order Date", DataType::Date32, true),
        Field::new("CustomerName", DataType::Utf8, true),
        Field::new("State", DataType::Utf8, true),
        Field::new("City", DataType::Utf8, true),
        Field::new("Amount", DataType::Float64, true),
        Field::new("Profit", DataType::Float64, true),
        Field::new("Quantity", DataType::Int64, true),
        Field::new("Category", DataType::Utf8, true),
        Field::new("Sub-Category", DataType::Utf8, true),
        Field::new("Month-Year", DataType::Utf8, true),
        Field::new("Month of Order Date", DataType::Utf8, true),
        Field::new("Target", DataType::Float64, true),
    ])
}

/// Schema of the final dataset consumed by the warehouse loader
pub fn final_orders_schema() -> Schema {
    Schema::new(vec![
        Field::new("order_id", DataType::Utf8, true),
        Field::new("date", DataType::Date32, true),
        Field::new("customer_name", DataType::Utf8, true),
        Field::new("state", DataType::Utf8, true),
        Field::new("city", DataType::Utf8, true),
        Field::new("amount", DataType::Float64, true),
        Field::new("profit", DataType::Float64, true),
        Field::new("quantity", DataType::Int64, true),
        Field::new("category", DataType::Utf8, true),
        Field::new("sub_category", DataType::Utf8, true),
        Field::new("month_of_order_date", DataType::Utf8, true),
        Field::new("target", DataType::Float64, true),
        Field::new("sales", DataType::Float64, true),
    ])
}

// ============================================================================
// Rows -> RecordBatch
// ============================================================================

/// Build a RecordBatch of the intermediate dataset
pub fn raw_rows_to_batch(rows: &[RawOrderRow]) -> Result<RecordBatch> {
    let schema = Arc::new(raw_orders_schema());
    let columns: Vec<ArrayRef> = vec![
        string_array(rows.iter().map(|r| r.order_id.as_deref())),
        date_array(rows.iter().map(|r| r.order_date)),
        string_array(rows.iter().map(|r| r.customer_name.as_deref())),
        string_array(rows.iter().map(|r| r.state.as_deref())),
        string_array(rows.iter().map(|r| r.city.as_deref())),
        float_array(rows.iter().map(|r| r.amount)),
        float_array(rows.iter().map(|r| r.profit)),
        int_array(rows.iter().map(|r| r.quantity)),
        string_array(rows.iter().map(|r| r.category.as_deref())),
        string_array(rows.iter().map(|r| r.sub_category.as_deref())),
        string_array(rows.iter().map(|r| r.month_year.as_deref())),
        string_array(rows.iter().map(|r| r.month_of_order_date.as_deref())),
        float_array(rows.iter().map(|r| r.target)),
    ];

    RecordBatch::try_new(schema, columns).map_err(Error::from)
}

/// Build a RecordBatch of the final dataset
pub fn final_rows_to_batch(rows: &[FinalOrderRow]) -> Result<RecordBatch> {
    let schema = Arc::new(final_orders_schema());
    let columns: Vec<ArrayRef> = vec![
        string_array(rows.iter().map(|r| r.order_id.as_deref())),
        date_array(rows.iter().map(|r| r.date)),
        string_array(rows.iter().map(|r| r.customer_name.as_deref())),
        string_array(rows.iter().map(|r| r.state.as_deref())),
        string_array(rows.iter().map(|r| r.city.as_deref())),
        float_array(rows.iter().map(|r| r.amount)),
        float_array(rows.iter().map(|r| r.profit)),
        int_array(rows.iter().map(|r| r.quantity)),
        string_array(rows.iter().map(|r| r.category.as_deref())),
        string_array(rows.iter().map(|r| r.sub_category.as_deref())),
        string_array(rows.iter().map(|r| r.month_of_order_date.as_deref())),
        float_array(rows.iter().map(|r| r.target)),
        float_array(rows.iter().map(|r| r.sales)),
    ];

    RecordBatch::try_new(schema, columns).map_err(Error::from)
}

// ============================================================================
// RecordBatch -> Rows
// ============================================================================

/// Decode an intermediate batch back into typed rows
///
/// Columns are resolved by name against the declared schema; a missing name
/// or unexpected type raises a schema-mismatch error instead of silently
/// mislabeling data.
pub fn batch_to_raw_rows(batch: &RecordBatch) -> Result<Vec<RawOrderRow>> {
    let order_id = string_column(batch, "Order ID")?;
    let order_date = date_column(batch, "Order Date")?;
    let customer_name = string_column(batch, "CustomerName")?;
    let state = string_column(batch, "State")?;
    let city = string_column(batch, "City")?;
    let amount = float_column(batch, "Amount")?;
    let profit = float_column(batch, "Profit")?;
    let quantity = int_column(batch, "Quantity")?;
    let category = string_column(batch, "Category")?;
    let sub_category = string_column(batch, "Sub-Category")?;
    let month_year = string_column(batch, "Month-Year")?;
    let month_of_order_date = string_column(batch, "Month of Order Date")?;
    let target = float_column(batch, "Target")?;

    let mut rows = Vec::with_capacity(batch.num_rows());
    for i in 0..batch.num_rows() {
        rows.push(RawOrderRow {
            order_id: string_value(order_id, i),
            order_date: date_value(order_date, i),
            customer_name: string_value(customer_name, i),
            state: string_value(state, i),
            city: string_value(city, i),
            amount: float_value(amount, i),
            profit: float_value(profit, i),
            quantity: int_value(quantity, i),
            category: string_value(category, i),
            sub_category: string_value(sub_category, i),
            month_year: string_value(month_year, i),
            month_of_order_date: string_value(month_of_order_date, i),
            target: float_value(target, i),
        });
    }
    Ok(rows)
}

// ============================================================================
// Array helpers
// ============================================================================

fn string_array<'a>(values: impl Iterator<Item = Option<&'a str>>) -> ArrayRef {
    Arc::new(values.collect::<StringArray>())
}

fn float_array(values: impl Iterator<Item = Option<f64>>) -> ArrayRef {
    Arc::new(values.collect::<Float64Array>())
}

fn int_array(values: impl Iterator<Item = Option<i64>>) -> ArrayRef {
    Arc::new(values.collect::<Int64Array>())
}

fn date_array(values: impl Iterator<Item = Option<chrono::NaiveDate>>) -> ArrayRef {
    Arc::new(
        values
            .map(|v| v.map(Date32Type::from_naive_date))
            .collect::<Date32Array>(),
    )
}

fn column_by_name<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef> {
    batch
        .column_by_name(name)
        .ok_or_else(|| Error::schema_mismatch(name, "column not found in input file"))
}

fn string_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a StringArray> {
    column_by_name(batch, name)?
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| Error::schema_mismatch(name, "expected Utf8 column"))
}

fn float_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Float64Array> {
    column_by_name(batch, name)?
        .as_any()
        .downcast_ref::<Float64Array>()
        .ok_or_else(|| Error::schema_mismatch(name, "expected Float64 column"))
}

fn int_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Int64Array> {
    column_by_name(batch, name)?
        .as_any()
        .downcast_ref::<Int64Array>()
        .ok_or_else(|| Error::schema_mismatch(name, "expected Int64 column"))
}

fn date_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Date32Array> {
    column_by_name(batch, name)?
        .as_any()
        .downcast_ref::<Date32Array>()
        .ok_or_else(|| Error::schema_mismatch(name, "expected Date32 column"))
}

fn string_value(array: &StringArray, i: usize) -> Option<String> {
    if array.is_null(i) {
        None
    } else {
        Some(array.value(i).to_string())
    }
}

fn float_value(array: &Float64Array, i: usize) -> Option<f64> {
    if array.is_null(i) {
        None
    } else {
        Some(array.value(i))
    }
}

fn int_value(array: &Int64Array, i: usize) -> Option<i64> {
    if array.is_null(i) {
        None
    } else {
        Some(array.value(i))
    }
}

fn date_value(array: &Date32Array, i: usize) -> Option<chrono::NaiveDate> {
    if array.is_null(i) {
        None
    } else {
        Some(Date32Type::to_naive_date(array.value(i)))
    }
}
