use crate::{DirectoryUser, Permission, PermissionSet, Role};

use googletest::prelude::*;
use uuid::Uuid;

fn alex() -> DirectoryUser {
    DirectoryUser::new(
        Uuid::new_v4(),
        "Alex Johnson",
        "alex@example.com",
        "password123",
        Role::Admin,
        PermissionSet::all(),
    )
    .with_avatar("/avatars/alex.png")
}

#[test]
fn given_mixed_case_email_when_matches_email_then_true() {
    let user = alex();

    assert_that!(user.matches_email("Alex@Example.com"), eq(true));
    assert_that!(user.matches_email("  ALEX@EXAMPLE.COM "), eq(true));
    assert_that!(user.matches_email("alex@example.org"), eq(false));
}

#[test]
fn given_non_ascii_email_when_matches_email_with_other_casing_then_true() {
    let mut user = alex();
    user.email = "josé@example.com".into();

    assert_that!(user.matches_email("JOSÉ@EXAMPLE.COM"), eq(true));
    assert_that!(user.matches_email("José@Example.com"), eq(true));
}

#[test]
fn given_password_when_verify_then_exact_match_only() {
    let user = alex();

    assert_that!(user.verify_password("password123"), eq(true));
    assert_that!(user.verify_password("Password123"), eq(false));
    assert_that!(user.verify_password("password123 "), eq(false));
}

#[test]
fn given_directory_user_when_to_session_user_then_fields_carried_and_secret_dropped() {
    let user = alex();

    let session = user.to_session_user();

    assert_that!(session.id, eq(user.id));
    assert_that!(session.email.as_str(), eq("alex@example.com"));
    assert_that!(session.avatar.as_deref(), some(eq("/avatars/alex.png")));
    assert_that!(session.role, eq(Role::Admin));
    assert_that!(session.permissions, eq(&PermissionSet::all()));

    let json = serde_json::to_string(&session).unwrap();
    assert_that!(json, not(contains_substring("password")));
}

#[test]
fn given_directory_user_when_debug_then_password_redacted() {
    let rendered = format!("{:?}", alex());

    assert_that!(rendered, contains_substring("<redacted>"));
    assert_that!(rendered, not(contains_substring("password123")));
}

#[test]
fn given_empty_password_when_validate_then_error() {
    let mut user = alex();
    user.password = String::new();

    assert_that!(user.validate(), err(anything()));
}

#[test]
fn given_email_without_at_sign_when_validate_then_error() {
    let mut user = alex();
    user.email = "alex".into();

    let result = user.validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("invalid email")
    );
}

#[test]
fn given_toml_entry_when_deserialize_then_parses_role_and_permissions() {
    let entry = r#"
        id = "00000000-0000-0000-0000-000000000004"
        name = "Guest User"
        email = "guest@example.com"
        password = "guest123"
        role = "guest"
        permissions = ["read"]
    "#;

    let user: DirectoryUser = toml::from_str(entry).unwrap();

    assert_that!(user.role, eq(Role::Guest));
    assert_that!(user.permissions.contains(Permission::Read), eq(true));
    assert_that!(user.permissions.len(), eq(1));
    assert_that!(user.avatar, none());
}

#[test]
fn given_email_with_surrounding_whitespace_when_validate_then_error() {
    let mut user = alex();
    user.email = " pat@example.com".into();

    let result = user.validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("surrounding whitespace")
    );
}
