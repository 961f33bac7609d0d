//! Login form glue around `formstate`.
//!
//! [`LoginForm`](form::LoginForm) wires an email and a password field to form
//! state, [`LoginController`](controller::LoginController) hands valid
//! credentials to an [`Authenticator`](auth::Authenticator), and the rest is
//! configuration and logging for the `login` binary.

pub mod auth;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod logging;
pub mod paths;

pub use auth::{AuthStatus, Authenticator, HttpAuthenticator};
pub use config::LoginConfig;
pub use controller::LoginController;
pub use error::{AuthError, ConfigError};
pub use form::{FieldView, LoginForm};
