//! Tests for db::repository::error module.

use bookshelf::db::repository::{ErrorContext, RepositoryError};

#[test]
fn test_error_context_chaining() {
    let ctx = ErrorContext::new("find_by_id")
        .with_entity("book")
        .with_entity_id("42")
        .with_details("no rows");

    assert_eq!(ctx.operation.as_deref(), Some("find_by_id"));
    assert_eq!(ctx.entity.as_deref(), Some("book"));
    assert_eq!(ctx.entity_id.as_deref(), Some("42"));
    assert_eq!(ctx.details.as_deref(), Some("no rows"));
    assert!(!ctx.is_empty());
    assert!(ErrorContext::default().is_empty());
}

#[test]
fn test_error_context_display() {
    let ctx = ErrorContext::new("create").with_entity("book").with_entity_id(7);
    assert_eq!(ctx.to_string(), "[operation=create, entity=book, id=7]");
    assert_eq!(ErrorContext::default().to_string(), "[]");
}

#[test]
fn test_repository_error_messages() {
    let err = RepositoryError::connection("connection refused");
    assert!(err.to_string().starts_with("Connection error: connection refused"));

    let err = RepositoryError::not_found("Book 1 not found")
        .in_context(ErrorContext::new("find_by_id").with_entity("book"));
    assert!(err.is_not_found());
    assert!(err.to_string().contains("operation=find_by_id"));

    assert!(!RepositoryError::query("syntax").is_not_found());
    assert!(RepositoryError::configuration("x")
        .to_string()
        .starts_with("Configuration error"));
    assert!(RepositoryError::internal("x")
        .to_string()
        .starts_with("Internal error"));
}

#[test]
fn test_with_operation_overrides_context() {
    let err = RepositoryError::query("bad")
        .in_context(ErrorContext::new("inner").with_entity("book"))
        .with_operation("find_all");
    assert_eq!(err.context().operation.as_deref(), Some("find_all"));
    assert_eq!(err.context().entity.as_deref(), Some("book"));

    let err = RepositoryError::internal("bad")
        .in_context(ErrorContext::new("spawn"))
        .with_operation("create");
    assert_eq!(err.context().operation.as_deref(), Some("create"));
}

#[test]
fn test_in_context_replaces_previous_context() {
    let err = RepositoryError::connection("refused")
        .in_context(ErrorContext::new("first").with_details("pool_error"))
        .in_context(ErrorContext::new("second"));
    assert_eq!(err.context(), &ErrorContext::new("second"));
    assert!(err.to_string().ends_with("[operation=second]"));
}
