use log::*;
use serde_json::{Map, Value};

use crate::{ContextError, Result, context::Summary, context::is_truthy};

/// Commit fields trimmed to their first line on non-conventional commits.
pub const TRIMMED_FIELDS: [&str; 2] = ["message", "raw_message"];

/// Text before the first newline, or the whole string if it has none.
pub fn first_line(text: &str) -> &str {
    text.split_once('\n').map_or(text, |(first, _)| first)
}

/// Normalize the value stored under a release's `commits` key.
///
/// A falsy value (`null`, `[]`, `{}`, ...) becomes an empty list. A list has
/// every non-conventional commit trimmed in place. Anything else, or a list
/// entry that is not an object, is an error.
pub fn normalize_commits(
    commits: &mut Value,
    summary: &mut Summary,
) -> Result<()> {
    if !is_truthy(commits) {
        *commits = Value::Array(vec![]);
        return Ok(());
    }

    let list = match commits {
        Value::Array(list) => list,
        other => return Err(ContextError::invalid_commits(other)),
    };

    for (index, entry) in list.iter_mut().enumerate() {
        let commit = match entry {
            Value::Object(commit) => commit,
            other => return Err(ContextError::invalid_commit(index, other)),
        };

        summary.commits += 1;

        if trim_commit(commit) {
            summary.truncated += 1;
        }
    }

    Ok(())
}

/// Returns true if any field was shortened.
fn trim_commit(commit: &mut Map<String, Value>) -> bool {
    // a missing key counts as conventional
    let conventional = commit.get("conventional").is_none_or(is_truthy);

    if conventional {
        return false;
    }

    let mut trimmed = false;

    for field in TRIMMED_FIELDS {
        // non-string values are left as they are
        if let Some(Value::String(text)) = commit.get_mut(field)
            && let Some(end) = text.find('\n')
        {
            debug!(
                "trimming {field} of non-conventional commit {:?}",
                first_line(text)
            );
            text.truncate(end);
            trimmed = true;
        }
    }

    trimmed
}
