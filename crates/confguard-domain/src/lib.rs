//! Pure rule evaluation (no IO).
//!
//! Input: a parsed document and a list of rules constructed elsewhere.
//! Output: findings + verdict + severity counts.

#![forbid(unsafe_code)]

pub mod duplicates;
pub mod model;
pub mod params;
pub mod path;
pub mod policy;
pub mod query;
pub mod report;

pub mod checks;
mod engine;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_support;

pub use engine::{FileOutcome, compute_verdict, evaluate, evaluate_document};
pub use model::{Document, FieldType, Node, Number};
pub use path::{PathError, PathExpr, Segment};
pub use policy::{ParamValue, RawParams, Rule, RuleKind};
