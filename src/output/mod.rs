//! Output module
//!
//! Declared Arrow schemas, Parquet read/write, and object-storage staging
//! for the two stage artifacts.

mod cloud;
mod reader;
mod schema;
mod writer;

pub use cloud::CloudDestination;
pub use reader::read_parquet;
pub use schema::{
    batch_to_raw_rows, final_orders_schema, final_rows_to_batch, raw_orders_schema,
    raw_rows_to_batch, FINAL_COLUMNS, RENAME_MAP,
};
pub use writer::{write_batch_to_parquet, ParquetWriter, ParquetWriterConfig};
