use crate::Permission;

use std::str::FromStr;

#[test]
fn test_permission_all_covers_every_variant_once() {
    let names: Vec<&str> = Permission::ALL.iter().map(Permission::as_str).collect();
    assert_eq!(
        names,
        vec![
            "create", "read", "update", "delete", "approve", "convert", "comment", "vote"
        ]
    );
}

#[test]
fn test_permission_from_str_matches_as_str() {
    for permission in Permission::ALL {
        assert_eq!(Permission::from_str(permission.as_str()).unwrap(), permission);
    }
}

#[test]
fn test_permission_from_str_is_case_insensitive() {
    assert_eq!(Permission::from_str("DELETE").unwrap(), Permission::Delete);
    assert!(Permission::from_str("publish").is_err());
}

#[test]
fn test_permission_display() {
    assert_eq!(Permission::Approve.to_string(), "approve");
}
