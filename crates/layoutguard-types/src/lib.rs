//! Stable DTOs and IDs used across the layoutguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs, codes and the fixed violation messages
//! - canonical tree path handling
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod path;
pub mod receipt;
pub mod violation;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use path::TreePath;
pub use receipt::{
    Finding, LayoutData, LayoutReport, ReportEnvelope, SCHEMA_REPORT_V1, Severity, ToolMeta,
    Verdict,
};
pub use violation::Violation;
