use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Manager.as_str(), "manager");
    assert_eq!(Role::User.as_str(), "user");
    assert_eq!(Role::Guest.as_str(), "guest");
}

#[test]
fn test_role_from_str_ignores_case_and_whitespace() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("Manager").unwrap(), Role::Manager);
    assert_eq!(Role::from_str(" GUEST ").unwrap(), Role::Guest);
}

#[test]
fn test_role_from_str_rejects_unknown() {
    let result = Role::from_str("owner");
    assert!(matches!(result, Err(CoreError::InvalidRole { ref value, .. }) if value == "owner"));
}

#[test]
fn test_role_serializes_as_snake_case() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    let role: Role = serde_json::from_str("\"manager\"").unwrap();
    assert_eq!(role, Role::Manager);
}
