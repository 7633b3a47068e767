use std::fmt;

use serde::{Deserialize, Serialize};

use seclint_core::{Finding, NodePath, Severity};

/// A finding tagged with the rule that produced it and its configured severity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub rule: String,
    pub severity: Severity,
    pub message: String,
    pub path: NodePath,
}

impl Diagnostic {
    pub fn from_finding(rule: &str, severity: Severity, finding: Finding) -> Self {
        Self {
            rule: rule.to_string(),
            severity,
            message: finding.message,
            path: finding.path,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}] {}", self.path, self.severity, self.rule, self.message)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
    pub operations_checked: usize,
}

impl Report {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    /// (errors, warnings, other)
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for d in &self.diagnostics {
            match d.severity {
                Severity::Error => counts.0 += 1,
                Severity::Warn => counts.1 += 1,
                Severity::Info | Severity::Hint => counts.2 += 1,
            }
        }
        counts
    }

    pub fn summary(&self) -> String {
        let (errors, warnings, other) = self.count_by_severity();
        format!(
            "{errors} error(s), {warnings} warning(s), {other} other in {} operation(s)",
            self.operations_checked
        )
    }
}
