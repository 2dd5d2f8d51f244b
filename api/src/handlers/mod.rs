pub mod error;

pub use error::{
    handle_domain_error, handle_validation_errors, handle_verification_error, json_error_handler,
};
