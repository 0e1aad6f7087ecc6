//! Stable DTOs and IDs used across the confguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs for rule kinds
//! - canonical file path handling
//! - explain registry for rule kinds

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod path;
pub mod receipt;

pub use explain::{Explanation, lookup_explanation};
pub use path::RepoPath;
pub use receipt::{
    ConfguardData, ConfguardReport, Finding, ReportEnvelope, SCHEMA_REPORT_V1, Severity,
    ToolMeta, Verdict,
};
