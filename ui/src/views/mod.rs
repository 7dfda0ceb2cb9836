//! The views module contains the components for all Routes for our app. Each route in our [`Route`]
//! enum will render one of these components.

mod home;
mod login;
mod services;
mod signup;

pub use home::Home;
pub use login::Login;
pub use services::Services;
pub use signup::Signup;
