use log::*;
use serde_json::Value;

use crate::{
    Result,
    context::{Summary, commit::normalize_commits},
};

/// Walk a release context and normalize every release it reaches.
///
/// Lists are walked element by element. A release object has its `commits`
/// normalized and its `previous` release walked when that is an object too,
/// so a chain of any length is followed back to its first release. Every
/// other value is left alone, which also ends the chain at `previous: null`.
///
/// Releases are visited depth first in document order using an explicit
/// stack, so chain length is not limited by the call stack.
pub fn walk(value: &mut Value, summary: &mut Summary) -> Result<()> {
    let mut pending = vec![value];

    while let Some(value) = pending.pop() {
        match value {
            Value::Array(releases) => {
                pending.extend(releases.iter_mut().rev());
            }
            Value::Object(release) => {
                summary.releases += 1;

                if let Some(version) =
                    release.get("version").and_then(Value::as_str)
                {
                    debug!("normalizing release {version}");
                }

                if let Some(commits) = release.get_mut("commits") {
                    normalize_commits(commits, summary)?;
                }

                // chain ends at anything that is not a release object
                if let Some(previous) = release.get_mut("previous")
                    && previous.is_object()
                {
                    pending.push(previous);
                }
            }
            _ => {}
        }
    }

    Ok(())
}
