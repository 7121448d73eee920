pub mod error_code;
pub mod response;
pub mod serde_helpers;
