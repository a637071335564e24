//! Integration tests for records carrying `Maybe` fields.

use jagain::Maybe;

use crate::common::{User, UserRepository};

#[test]
fn test_record_serializes_absent_fields_as_null() {
    let repo = UserRepository::new();
    let user = repo.find_user(2).unwrap();
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["email"], "jane@example.com");
    assert!(json["age"].is_null());
}

#[test]
fn test_record_roundtrip() {
    let repo = UserRepository::new();
    let user = repo.find_user(1).unwrap();
    let json = serde_json::to_string(&user).unwrap();
    let decoded: User = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, user);
}

#[test]
fn test_record_decodes_missing_fields_as_absent() {
    let decoded: User = serde_json::from_str(r#"{"id":7,"name":"Eve"}"#).unwrap();
    assert!(decoded.email.is_absent());
    assert!(decoded.age.is_absent());
}

#[test]
fn test_record_decode_error_propagates() {
    let result = serde_json::from_str::<User>(r#"{"id":7,"name":"Eve","age":"old"}"#);
    assert!(result.is_err());
}

#[test]
fn test_age_defaults() {
    let repo = UserRepository::new();
    let ages: Vec<u32> = [1, 2, 3]
        .into_iter()
        .map(|id| repo.find_user(id).unwrap().age.unwrap_or(0))
        .collect();
    assert_eq!(ages, vec![30, 0, 0]);
}

#[test]
fn test_lookup_bridges_from_nullable_reference() {
    let repo = UserRepository::new();
    let found = repo.find_user(3).to_maybe();
    let boxed = found.to_boxed().unwrap();
    assert_eq!(boxed.name, "Bob");
    assert_eq!(found.map(|u| u.name), Maybe::present("Bob".to_string()));
}

#[test]
fn test_record_display() {
    let repo = UserRepository::new();
    assert_eq!(
        Maybe::present(repo.find_user(1).unwrap()).to_string(),
        "Present(John Doe <john@example.com>)"
    );
    assert_eq!(repo.find_user(3).unwrap().to_string(), "Bob <->");
}
