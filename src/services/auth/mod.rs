pub mod bearer_jwt;

pub use bearer_jwt::{AuthFailure, TokenVerifier};
