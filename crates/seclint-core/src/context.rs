use crate::{Document, NodePath};

/// What the caller hands a rule alongside the node: the whole document and
/// where the node sits in it. Borrowed for the duration of one call.
#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    pub document: &'a Document,
    pub path: &'a NodePath,
}

impl<'a> RuleContext<'a> {
    pub fn new(document: &'a Document, path: &'a NodePath) -> Self {
        Self { document, path }
    }
}
