//! Normalization of git-cliff style release context documents.
//!
//! A release context is either a single release object or a list of them.
//! Each release may carry a `commits` list and may embed its predecessor
//! inline under `previous`, forming a backward chain of arbitrary length.
//! Normalizing trims the `message` and `raw_message` of every
//! non-conventional commit down to its first line and leaves everything else
//! in place.

use serde_json::Value;

use crate::Result;

pub mod commit;
pub mod release;


pub use commit::{first_line, normalize_commits};
pub use release::walk;

/// Counters collected while walking a release context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Release objects visited, including `previous` links.
    pub releases: usize,
    /// Commit entries inspected.
    pub commits: usize,
    /// Non-conventional commits that had at least one field shortened.
    pub truncated: usize,
}

/// Normalize a release context in place.
pub fn normalize(context: &mut Value) -> Result<Summary> {
    let mut summary = Summary::default();
    walk(context, &mut summary)?;
    Ok(summary)
}

/// JSON truthiness: `null`, `false`, zero, and empty strings, lists or
/// objects are falsy; everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
