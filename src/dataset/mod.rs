//! Typed tabular datasets
//!
//! Row types for the three source relations and the two stage artifacts,
//! plus the hash joins that combine them. Each dataset is produced once per
//! run and discarded after hand-off to the next stage.

mod join;
mod records;

pub use join::{inner_join_on_order_id, outer_join_on_category_month};
pub use records::{
    decode_rows, month_label, parse_order_date, FinalOrderRow, MergedOrder, OrderDetailRecord,
    OrderRecord, RawOrderRow, SalesTargetRecord, MONTH_LABEL_FORMAT, ORDER_DATE_FORMAT,
};
