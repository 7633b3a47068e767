use serde_json::Value;
use thiserror::Error;

use seclint_core::{NodePath, Operation};

/// Keys of a path item that hold operations.
pub const HTTP_METHODS: [&str; 8] = ["get", "put", "post", "delete", "options", "head", "patch", "trace"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalkError {
    #[error("document root is not a mapping")]
    RootNotMapping,
    #[error("`paths` is not a mapping")]
    PathsNotMapping,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OperationNode {
    pub path: NodePath,
    pub operation: Operation,
}

/// Collects `paths.<path>.<method>` nodes in document order.
pub fn walk_operations(root: &Value) -> Result<Vec<OperationNode>, WalkError> {
    let root = root.as_object().ok_or(WalkError::RootNotMapping)?;
    let Some(paths) = root.get("paths") else {
        tracing::warn!("document has no `paths`; nothing to check");
        return Ok(vec![]);
    };
    let paths = paths.as_object().ok_or(WalkError::PathsNotMapping)?;

    let base = NodePath::root().child("paths");
    let mut out = Vec::new();
    for (path_key, item) in paths {
        let Some(item) = item.as_object() else {
            tracing::debug!(path = %path_key, "skipping non-mapping path item");
            continue;
        };
        for (method, node) in item {
            if !HTTP_METHODS.contains(&method.as_str()) || !node.is_object() {
                continue;
            }
            out.push(OperationNode {
                path: base.child(path_key.as_str()).child(method.as_str()),
                operation: Operation::from_value(node),
            });
        }
    }
    Ok(out)
}
