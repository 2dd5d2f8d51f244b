use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendCodeRequest {
    #[validate(range(min = 1))]
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(range(min = 1))]
    pub user_id: i64,
    #[validate(length(min = 1, max = 32))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeResponse {
    pub user_id: i64,
    pub code: String,
    pub expires_in: i64, // seconds until the code expires
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub user_id: i64,
    pub verified: bool,
    pub locked_out: bool,
    pub lockout_minutes_remaining: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub active_sessions: usize,
    pub locked_out_users: usize,
    pub verified_users: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_must_be_positive() {
        assert!(SendCodeRequest { user_id: 1 }.validate().is_ok());
        assert!(SendCodeRequest { user_id: 0 }.validate().is_err());
        assert!(SendCodeRequest { user_id: -7 }.validate().is_err());
    }

    #[test]
    fn test_code_length_bounds() {
        let request = |code: &str| VerifyCodeRequest {
            user_id: 42,
            code: code.to_string(),
        };

        assert!(request("123456").validate().is_ok());
        assert!(request("").validate().is_err());
        assert!(request(&"9".repeat(33)).validate().is_err());
    }
}
