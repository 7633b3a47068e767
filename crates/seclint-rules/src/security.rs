use seclint_core::{Finding, Operation, RuleContext, Severity};

use crate::rule::Rule;

pub const OPERATION_MUST_HAVE_SECURITY: &str = "operation-must-have-security";

pub const MISSING_SECURITY_MESSAGE: &str =
    "Operation must have security defined (either globally or at operation level)";

/// Flags an operation when neither it nor the document declares security.
///
/// A non-empty document-level `security` satisfies every operation, including
/// ones that set `security: []` themselves.
pub struct OperationMustHaveSecurity;

impl Rule for OperationMustHaveSecurity {
    fn id(&self) -> &str {
        OPERATION_MUST_HAVE_SECURITY
    }

    fn description(&self) -> &str {
        "operations must declare security, or inherit a non-empty document-level security"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn eval(&self, operation: &Operation, ctx: &RuleContext<'_>) -> Vec<Finding> {
        if ctx.document.has_security() || operation.has_security() {
            return vec![];
        }
        vec![Finding::new(MISSING_SECURITY_MESSAGE, ctx.path.clone())]
    }
}
