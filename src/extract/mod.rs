//! The log-parsing engine: stateful line scanners that locate markers in
//! an unstructured text stream, extract fixed-format fields, and assemble
//! them into typed results.
//!
//! Every extractor takes `&LogDocument` and performs its own independent
//! linear pass; there is no shared mutable state, so parallel calls on
//! separately loaded documents need no synchronization.

pub mod csv;
pub mod error;
pub mod fields;
pub mod geometry;
pub mod reader;
pub mod scan;
pub mod termination;

pub use error::{Error, Field};
pub use reader::{read_log, read_log_from};
pub use scan::{first_match, matching_lines, ScanMode};
