pub mod auth;
pub mod config;
pub mod navigation;
pub mod signup;

pub use auth::{AuthClient, AuthError, AuthStatus, Credentials, Session, SignUp, User};
pub use config::Config;
pub use navigation::{Destination, Navigator};
pub use signup::{
    Field, FieldErrors, SignupInput, SignupPayload, validate,
    flow::{Phase, SignupFlow, SignupState, SubmitOutcome},
};

/// Product name shown in page titles and the header.
pub const BRAND_NAME: &str = "MoneyTime";

#[cfg(test)]
mod tests;
