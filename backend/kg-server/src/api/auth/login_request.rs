use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub uname: String,
    pub pwd: String,
}
