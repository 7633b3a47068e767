use serde::{Deserialize, Serialize};

use crate::NodePath;

/// A single rule violation. Owned by whoever called the rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub message: String,
    pub path: NodePath,
}

impl Finding {
    pub fn new(message: impl Into<String>, path: NodePath) -> Self {
        Self {
            message: message.into(),
            path,
        }
    }
}
