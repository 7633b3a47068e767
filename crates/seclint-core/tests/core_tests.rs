use seclint_core::{Document, Finding, NodePath, Operation, PathSegment, RuleContext, Severity};

#[test]
fn test_operation_from_yaml_like_json() {
    let op: Operation =
        serde_json::from_str(r#"{"operationId": "getPet", "security": [{"oauth2": ["read"]}]}"#).unwrap();
    assert_eq!(op.operation_id.as_deref(), Some("getPet"));
    assert!(op.has_security());
}

#[test]
fn test_operation_without_security() {
    let op: Operation = serde_json::from_str("{}").unwrap();
    assert_eq!(op.security, None);
    assert!(!op.has_security());
}

#[test]
fn test_document_with_string_security_is_unsecured() {
    let doc: Document = serde_json::from_str(r#"{"security": "apiKey"}"#).unwrap();
    assert!(!doc.has_security());
}

#[test]
fn test_finding_json_shape() {
    let path: NodePath = ["paths", "/pets", "get"].into_iter().collect();
    let f = Finding::new("nope", path);
    let v = serde_json::to_value(&f).unwrap();
    assert_eq!(v, serde_json::json!({"message": "nope", "path": ["paths", "/pets", "get"]}));
}

#[test]
fn test_context_borrows_inputs() {
    let doc = Document::default();
    let path = NodePath(vec![PathSegment::from("paths"), PathSegment::Index(0)]);
    let ctx = RuleContext::new(&doc, &path);
    let copy = ctx;
    assert_eq!(copy.path.segments().len(), 2);
    assert_eq!(ctx.document, &doc);
}

#[test]
fn test_severity_serde_lowercase() {
    assert_eq!(serde_json::to_string(&Severity::Warn).unwrap(), r#""warn""#);
    let s: Severity = serde_json::from_str(r#""error""#).unwrap();
    assert_eq!(s, Severity::Error);
    assert_eq!(Severity::Hint.to_string(), "hint");
}
