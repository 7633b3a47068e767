use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde_json::Value;

use seclint_core::{Document, RuleContext};
use seclint_rules::{builtin_rules, Rule};

use crate::{walk::walk_operations, Config, Diagnostic, Report};

/// Reads a YAML or JSON document into a generic tree.
pub fn load_document(path: &Path) -> Result<Value> {
    let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let root: Value = serde_yaml::from_str(&s).with_context(|| format!("parse {}", path.display()))?;
    Ok(root)
}

pub struct Runner {
    pub cfg: Config,
    rules: Vec<Box<dyn Rule>>,
}

impl Runner {
    pub fn new(cfg: Config) -> Self {
        let rules = builtin_rules().into_iter().filter(|r| cfg.is_rule_enabled(r.id())).collect();
        Self { cfg, rules }
    }

    /// Keep only the rule with the given id. Errors if it is unknown or disabled.
    pub fn only(mut self, rule_id: &str) -> Result<Self> {
        self.rules.retain(|r| r.id() == rule_id);
        if self.rules.is_empty() {
            return Err(anyhow!("rule {rule_id} is unknown or disabled"));
        }
        Ok(self)
    }

    pub fn rule_ids(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    pub fn lint_value(&self, root: &Value) -> Result<Report> {
        let document = Document::from_value(root);
        let operations = walk_operations(root)?;

        let mut report = Report {
            operations_checked: operations.len(),
            ..Report::default()
        };
        for node in &operations {
            let ctx = RuleContext::new(&document, &node.path);
            for rule in &self.rules {
                let findings = rule.eval(&node.operation, &ctx);
                tracing::debug!(
                    rule = rule.id(),
                    path = %node.path,
                    operation_id = node.operation.operation_id.as_deref().unwrap_or("-"),
                    findings = findings.len(),
                    "evaluated operation"
                );
                let severity = self.cfg.severity_for(&**rule);
                report
                    .diagnostics
                    .extend(findings.into_iter().map(|f| Diagnostic::from_finding(rule.id(), severity, f)));
            }
        }

        tracing::info!(
            openapi = document.openapi.as_deref().unwrap_or("-"),
            operations = report.operations_checked,
            diagnostics = report.diagnostics.len(),
            "lint complete"
        );
        Ok(report)
    }

    pub fn lint_file(&self, path: &Path) -> Result<Report> {
        let root = load_document(path)?;
        self.lint_value(&root).with_context(|| format!("lint {}", path.display()))
    }
}
