//! Identity module: authentication and account management
//!
//! `AuthService` owns every use-case that touches a password:
//! login, password change and account creation/update.

pub mod service;

pub use service::{AuthService, LoginResult, LOGIN_FAILED};
