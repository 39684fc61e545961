//! Pipeline stages
//!
//! Two stages executed in strict sequence: the extractor reads and joins the
//! source relations into the intermediate Parquet file; the transformer
//! reshapes it into the warehouse-ready final file. Each stage reads only
//! its input artifact and fully writes its output, or fails outright.

pub mod extract;
pub mod transform;

pub use extract::ExtractReport;
pub use transform::TransformReport;
