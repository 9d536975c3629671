use crate::{Permission, PermissionSet};

use googletest::prelude::*;

#[test]
fn given_empty_set_when_contains_then_false_for_everything() {
    let set = PermissionSet::new();

    for permission in Permission::ALL {
        assert_that!(set.contains(permission), eq(false));
    }
    assert_that!(set.is_empty(), eq(true));
}

#[test]
fn given_read_only_set_when_contains_then_only_read_matches() {
    let set = PermissionSet::from([Permission::Read]);

    assert_that!(set.contains(Permission::Read), eq(true));
    assert_that!(set.contains(Permission::Create), eq(false));
    assert_that!(set.contains(Permission::Update), eq(false));
}

#[test]
fn given_all_when_len_then_eight() {
    assert_that!(PermissionSet::all().len(), eq(8));
}

#[test]
fn given_duplicate_inserts_when_len_then_counted_once() {
    let mut set = PermissionSet::new();

    assert_that!(set.insert(Permission::Vote), eq(true));
    assert_that!(set.insert(Permission::Vote), eq(false));
    assert_that!(set.len(), eq(1));
}

#[test]
fn given_unordered_input_when_serialize_then_sorted_list() {
    let set = PermissionSet::from([Permission::Vote, Permission::Create, Permission::Read]);

    let json = serde_json::to_string(&set).unwrap();

    assert_that!(json.as_str(), eq(r#"["create","read","vote"]"#));
}

#[test]
fn given_unknown_permission_when_deserialize_then_error() {
    let result = serde_json::from_str::<PermissionSet>(r#"["read","publish"]"#);

    assert_that!(result, err(anything()));
}

#[test]
fn given_set_when_display_then_comma_separated() {
    let set = PermissionSet::from([Permission::Comment, Permission::Read]);

    let rendered = set.to_string();

    assert_that!(rendered.as_str(), eq("read, comment"));
}
