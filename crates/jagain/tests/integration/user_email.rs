//! Integration tests for chained lookups across `Outcome` and `Maybe`.

use jagain::{Maybe, Outcome, flat_map_to, match_to};

use crate::common::{NoEmail, UserNotFound, UserRepository, email_by_string_id};

#[test]
fn test_email_found() {
    let repo = UserRepository::new();
    let email = email_by_string_id(&repo, "1");
    assert!(email.is_success());
    assert_eq!(email.unwrap(), "john@example.com");
}

#[test]
fn test_user_without_email_yields_no_email_failure() {
    let repo = UserRepository::new();
    let err = email_by_string_id(&repo, "3").unwrap_error();
    assert!(err.downcast_ref::<NoEmail>().is_some());
    assert_eq!(err.to_string(), "user has no email");
}

#[test]
fn test_unknown_user_short_circuits() {
    let repo = UserRepository::new();
    let err = email_by_string_id(&repo, "999").unwrap_error();
    assert_eq!(err.downcast_ref::<UserNotFound>(), Some(&UserNotFound(999)));
    assert_eq!(err.to_string(), "user with ID 999 not found");
}

#[test]
fn test_invalid_id_format() {
    let repo = UserRepository::new();
    let err = email_by_string_id(&repo, "abc").unwrap_error();
    assert!(err.to_string().starts_with("invalid user ID format"));
}

#[test]
fn test_zero_id_rejected() {
    let repo = UserRepository::new();
    let err = email_by_string_id(&repo, "0").unwrap_error();
    assert_eq!(err.to_string(), "user ID must be positive");
}

#[test]
fn test_match_to_renders_message() {
    let repo = UserRepository::new();
    let message = match_to(
        email_by_string_id(&repo, "1"),
        |email| format!("Email found: {email}"),
        |err| format!("Error occurred: {err}"),
    );
    assert_eq!(message, "Email found: john@example.com");
}

#[test]
fn test_map_error_adds_context() {
    let repo = UserRepository::new();
    let wrapped = email_by_string_id(&repo, "999")
        .map_error(|err| format!("while getting user email: {err}"));
    assert_eq!(
        wrapped.unwrap_error(),
        "while getting user email: user with ID 999 not found"
    );
}

#[test]
fn test_flat_map_to_with_typed_errors() {
    #[derive(Debug, PartialEq)]
    struct Account {
        email: Maybe<&'static str>,
    }

    let with_email: Outcome<Account, &str> = Outcome::success(Account {
        email: Maybe::present("a@b.com"),
    });
    let without_email: Outcome<Account, &str> = Outcome::success(Account {
        email: Maybe::absent(),
    });

    let email = |account: Account| account.email.to_outcome("no email");

    assert_eq!(flat_map_to(with_email, email), Outcome::success("a@b.com"));
    assert_eq!(flat_map_to(without_email, email), Outcome::failure("no email"));
}

#[test]
fn test_unwrap_or_else_falls_back_on_error() {
    let repo = UserRepository::new();
    let email = email_by_string_id(&repo, "3").unwrap_or_else(|err| format!("<{err}>"));
    assert_eq!(email, "<user has no email>");
}

#[test]
fn test_to_maybe_discards_error() {
    let repo = UserRepository::new();
    assert_eq!(
        email_by_string_id(&repo, "2").to_maybe(),
        Maybe::present("jane@example.com".to_string())
    );
    assert!(email_by_string_id(&repo, "999").to_maybe().is_absent());
}
