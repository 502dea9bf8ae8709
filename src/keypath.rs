//! Deep keypath lookup over parsed YAML trees.
//!
//! A keypath is a delimiter-joined sequence of mapping keys and/or sequence
//! indices, e.g. `on.workflow_call.inputs`. Resolution walks the tree one
//! segment at a time and borrows the addressed subtree; it never clones.

use serde_yaml::Value;
use thiserror::Error;

/// Default segment delimiter. No escaping of the delimiter is supported.
pub const KEYPATH_DELIMITER: &str = ".";

/// Why a keypath segment failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypathErrorKind {
    /// The current node is a sequence but the segment is not an integer index.
    MalformedIndex,
    /// Mapping key not found, or sequence index out of range.
    UnresolvableSegment,
    /// The current node is a scalar; there is nothing left to traverse into.
    ScalarTraversal,
}

impl KeypathErrorKind {
    fn reason(self) -> &'static str {
        match self {
            KeypathErrorKind::MalformedIndex => "segment is not a valid sequence index",
            KeypathErrorKind::UnresolvableSegment => "no such key or index",
            KeypathErrorKind::ScalarTraversal => "cannot traverse past a scalar value",
        }
    }
}

/// A keypath segment that could not be applied to the tree.
///
/// Carries the full original keypath, the offending segment, and its
/// zero-based depth so callers can produce an actionable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unable to resolve keypath '{keypath}'; failed to retrieve '{segment}' component (depth: {depth}): {}",
    .kind.reason()
)]
pub struct KeypathError {
    pub keypath: String,
    pub segment: String,
    pub depth: usize,
    pub kind: KeypathErrorKind,
}

/// Resolve `keypath` against `tree`, splitting on `delimiter`.
///
/// Each segment indexes the current node: by parsed integer for sequences,
/// by string key for mappings. The terminal value may be any node kind,
/// including a mapping or sequence. An empty keypath yields a single empty
/// segment, which fails against the root.
pub fn resolve<'a>(
    tree: &'a Value,
    keypath: &str,
    delimiter: &str,
) -> Result<&'a Value, KeypathError> {
    let mut current = tree;
    for (depth, segment) in keypath.split(delimiter).enumerate() {
        let fail = |kind| KeypathError {
            keypath: keypath.to_string(),
            segment: segment.to_string(),
            depth,
            kind,
        };

        current = match current {
            Value::Sequence(items) => {
                let index: usize = segment
                    .parse()
                    .map_err(|_| fail(KeypathErrorKind::MalformedIndex))?;
                items
                    .get(index)
                    .ok_or_else(|| fail(KeypathErrorKind::UnresolvableSegment))?
            }
            Value::Mapping(entries) => entries
                .get(segment)
                .ok_or_else(|| fail(KeypathErrorKind::UnresolvableSegment))?,
            _ => return Err(fail(KeypathErrorKind::ScalarTraversal)),
        };
    }
    Ok(current)
}

/// Resolve with the default `.` delimiter.
pub fn resolve_dotted<'a>(tree: &'a Value, keypath: &str) -> Result<&'a Value, KeypathError> {
    resolve(tree, keypath, KEYPATH_DELIMITER)
}
