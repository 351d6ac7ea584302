pub mod aggregate;
pub mod extract;
pub mod options;
pub mod pad;
pub mod reader;
pub mod report;

pub use aggregate::Distribution;
pub use extract::extract_value;
pub use gencdf_common::{CdfError, Result};
pub use options::CdfOptions;
pub use pad::apply_padding;
pub use reader::{ingest, ingest_file};
pub use report::{build_report, write_report, CdfPoint};
