use kg_core::UserProfile;

use serde::Serialize;

/// Profile as the browser sees it; never carries the password hash
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub uname: String,
    pub email: String,
    pub age: i64,
    pub gender: String,
}

impl From<UserProfile> for UserDto {
    fn from(profile: UserProfile) -> Self {
        Self {
            uname: profile.username,
            email: profile.email,
            age: profile.age,
            gender: profile.gender,
        }
    }
}
