pub mod error_dto;
pub mod otp_dto;

pub use error_dto::ErrorResponse;
pub use otp_dto::{
    HealthResponse, SendCodeRequest, SendCodeResponse, StatusResponse, VerifyCodeRequest,
};
