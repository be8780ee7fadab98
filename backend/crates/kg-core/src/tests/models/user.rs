use crate::{NewUser, User, UserProfile};

fn new_user(username: &str, password: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: "a@x.com".to_string(),
        age: 30,
        gender: "F".to_string(),
        password: password.to_string(),
    }
}

#[test]
fn test_profile_excludes_password_hash() {
    let user = User {
        username: "alice".to_string(),
        email: "a@x.com".to_string(),
        age: 30,
        gender: "F".to_string(),
        password_hash: "$argon2id$v=19$...".to_string(),
    };

    let profile = UserProfile::from(user);

    assert_eq!(profile.username, "alice");
    assert_eq!(profile.age, 30);
    assert!(!format!("{:?}", profile).contains("argon2"));
}

#[test]
fn test_new_user_debug_redacts_password() {
    let debug = format!("{:?}", new_user("alice", "secret"));

    assert!(debug.contains("alice"));
    assert!(!debug.contains("secret"));
}

#[test]
fn test_new_user_validate_rejects_blank_username() {
    assert!(new_user("   ", "secret").validate().is_err());
    assert!(new_user("alice", "").validate().is_err());
    assert!(new_user("alice", "secret").validate().is_ok());
}
