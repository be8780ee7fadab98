use kg_core::NewUser;

use std::fmt;

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub uname: String,
    pub email: String,
    #[serde(deserialize_with = "deserialize_age")]
    pub age: i64,
    pub gender: String,
    pub pwd: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("uname", &self.uname)
            .field("email", &self.email)
            .field("age", &self.age)
            .field("gender", &self.gender)
            .field("pwd", &"<redacted>")
            .finish()
    }
}

impl From<RegisterRequest> for NewUser {
    fn from(req: RegisterRequest) -> Self {
        Self {
            username: req.uname,
            email: req.email,
            age: req.age,
            gender: req.gender,
            password: req.pwd,
        }
    }
}

/// HTML forms post the age as text, API clients as a number
fn deserialize_age<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Age {
        Number(i64),
        Text(String),
    }

    match Age::deserialize(deserializer)? {
        Age::Number(n) => Ok(n),
        Age::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("age must be a whole number, got {:?}", s))),
    }
}
