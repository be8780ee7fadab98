use crate::RegisterRequest;

use kg_core::NewUser;

use googletest::prelude::*;

#[test]
fn test_age_accepts_number() {
    let req: RegisterRequest = serde_json::from_str(
        r#"{"uname":"alice","email":"a@x","age":30,"gender":"F","pwd":"secret"}"#,
    )
    .unwrap();

    assert_that!(req.age, eq(30));
}

#[test]
fn test_age_accepts_numeric_string() {
    let req: RegisterRequest = serde_json::from_str(
        r#"{"uname":"alice","email":"a@x","age":" 42 ","gender":"F","pwd":"secret"}"#,
    )
    .unwrap();

    assert_that!(req.age, eq(42));
}

#[test]
fn test_age_rejects_non_numeric_string() {
    let result = serde_json::from_str::<RegisterRequest>(
        r#"{"uname":"alice","email":"a@x","age":"thirty","gender":"F","pwd":"secret"}"#,
    );

    assert_that!(result, err(anything()));
}

#[test]
fn test_debug_redacts_password() {
    let req: RegisterRequest = serde_json::from_str(
        r#"{"uname":"alice","email":"a@x","age":30,"gender":"F","pwd":"hunter2"}"#,
    )
    .unwrap();

    let debug = format!("{:?}", req);

    assert_that!(debug, not(contains_substring("hunter2")));
}

#[test]
fn test_converts_to_new_user() {
    let req: RegisterRequest = serde_json::from_str(
        r#"{"uname":"alice","email":"a@x","age":30,"gender":"F","pwd":"secret"}"#,
    )
    .unwrap();

    let user: NewUser = req.into();

    assert_that!(user.username, eq("alice"));
    assert_that!(user.password, eq("secret"));
    assert_that!(user.age, eq(30));
}
