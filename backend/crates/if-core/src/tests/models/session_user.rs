use crate::{Permission, PermissionSet, Role, SessionUser};

use uuid::Uuid;

fn session_user(role: Role, permissions: PermissionSet) -> SessionUser {
    SessionUser {
        id: Uuid::new_v4(),
        name: "Test User".into(),
        email: "test@example.com".into(),
        avatar: None,
        role,
        permissions,
    }
}

#[test]
fn test_has_permission_is_exact_membership() {
    let user = session_user(Role::User, PermissionSet::from([Permission::Create]));

    assert!(user.has_permission(Permission::Create));
    assert!(!user.has_permission(Permission::Read));
}

#[test]
fn test_admin_role_grants_no_unlisted_permission() {
    let user = session_user(Role::Admin, PermissionSet::from([Permission::Read]));

    assert!(user.is_admin());
    assert!(!user.has_permission(Permission::Approve));
}

#[test]
fn test_is_manager_includes_admin() {
    assert!(session_user(Role::Admin, PermissionSet::new()).is_manager());
    assert!(session_user(Role::Manager, PermissionSet::new()).is_manager());
    assert!(!session_user(Role::User, PermissionSet::new()).is_manager());
    assert!(!session_user(Role::Guest, PermissionSet::new()).is_manager());
}

#[test]
fn test_is_admin_excludes_manager() {
    assert!(!session_user(Role::Manager, PermissionSet::all()).is_admin());
}

#[test]
fn test_missing_avatar_is_omitted_from_json() {
    let user = session_user(Role::Guest, PermissionSet::from([Permission::Read]));

    let json = serde_json::to_string(&user).unwrap();

    assert!(!json.contains("avatar"));
    assert!(json.contains(r#""role":"guest""#));
    assert!(json.contains(r#""permissions":["read"]"#));
}

#[test]
fn test_stored_json_without_avatar_deserializes() {
    let json = r#"{"id":"550e8400-e29b-41d4-a716-446655440000","name":"Alex","email":"alex@example.com","role":"admin","permissions":["create","delete"]}"#;

    let user: SessionUser = serde_json::from_str(json).unwrap();

    assert!(user.avatar.is_none());
    assert!(user.has_permission(Permission::Delete));
    assert!(!user.has_permission(Permission::Vote));
}
