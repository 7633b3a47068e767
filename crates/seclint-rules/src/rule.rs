use seclint_core::{Finding, Operation, RuleContext, Severity};

use crate::security::OperationMustHaveSecurity;

/// A check run once per operation. Implementations must not hold mutable
/// state; the caller may evaluate operations in parallel.
pub trait Rule: Send + Sync {
    fn id(&self) -> &str;
    fn description(&self) -> &str;
    fn default_severity(&self) -> Severity;
    fn eval(&self, operation: &Operation, ctx: &RuleContext<'_>) -> Vec<Finding>;
}

/// All rules shipped with the crate.
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(OperationMustHaveSecurity)]
}

pub fn find_rule(id: &str) -> Option<Box<dyn Rule>> {
    builtin_rules().into_iter().find(|r| r.id() == id)
}
