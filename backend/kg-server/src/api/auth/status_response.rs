use serde::Serialize;

pub const SUCCESS_STATUS: &str = "success";

/// Bare `{status, message}` acknowledgement
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl StatusResponse {
    pub fn success(message: &'static str) -> Self {
        Self {
            status: SUCCESS_STATUS,
            message,
        }
    }
}
