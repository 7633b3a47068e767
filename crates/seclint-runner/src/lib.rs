//! Runs the builtin rules over a document loaded from disk.

pub mod config;
pub mod report;
pub mod runner;
pub mod walk;

pub use config::*;
pub use report::*;
pub use runner::*;
pub use walk::*;

#[cfg(test)]
mod fixture_tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/openapi").join(name)
    }

    #[test]
    fn global_security_fixture_is_clean() {
        let report = Runner::new(Config::default()).lint_file(&fixture("petstore-global.yaml")).unwrap();
        assert_eq!(report.operations_checked, 3);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn mixed_fixture_flags_unsecured_operations() {
        let report = Runner::new(Config::default()).lint_file(&fixture("petstore-mixed.yaml")).unwrap();
        let pointers: Vec<_> = report.diagnostics.iter().map(|d| d.path.to_string()).collect();
        assert_eq!(pointers, vec!["/paths/~1pets/post", "/paths/~1pets~1{petId}/delete"]);
    }

    #[test]
    fn json_fixture_loads() {
        let report = Runner::new(Config::default()).lint_file(&fixture("no-security.json")).unwrap();
        assert_eq!(report.operations_checked, 1);
        assert_eq!(report.diagnostics.len(), 1);
    }

    #[test]
    fn unquoted_status_codes_load() {
        let report = Runner::new(Config::default()).lint_file(&fixture("unquoted-status-codes.yaml")).unwrap();
        assert_eq!(report.operations_checked, 2);
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].path.to_string(), "/paths/~1items/put");
    }

    #[test]
    fn missing_file_errors() {
        assert!(Runner::new(Config::default()).lint_file(&fixture("does-not-exist.yaml")).is_err());
    }
}
