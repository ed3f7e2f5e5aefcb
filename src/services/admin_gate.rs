//! Admin login gate
//!
//! A single shared password and a flag in session-scoped storage. This keeps
//! casual visitors off the admin page; it is not an access-control layer.

use std::sync::Arc;

use subtle::ConstantTimeEq;
use tracing::{info, warn};

use crate::errors::Result;
use crate::storage::KvStore;

/// Key of the session flag
pub const AUTH_FLAG_KEY: &str = "termitoon-auth";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminState {
    LoggedOut,
    LoggedIn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    IncorrectPassword,
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncorrectPassword => write!(f, "Incorrect password."),
        }
    }
}

impl std::error::Error for LoginError {}

pub struct AdminGate {
    password: String,
    session: Arc<dyn KvStore>,
}

impl AdminGate {
    pub fn new(password: impl Into<String>, session: Arc<dyn KvStore>) -> Self {
        Self {
            password: password.into(),
            session,
        }
    }

    /// Current state, read from the session flag on every call
    pub fn state(&self) -> AdminState {
        match self.session.get(AUTH_FLAG_KEY) {
            Ok(Some(flag)) if flag == "true" => AdminState::LoggedIn,
            Ok(_) => AdminState::LoggedOut,
            Err(e) => {
                warn!("Failed to read session flag: {}", e);
                AdminState::LoggedOut
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.state() == AdminState::LoggedIn
    }

    /// Check `attempt` against the shared password and set the session flag
    /// on success. The outer `Result` carries storage failures.
    pub fn login(&self, attempt: &str) -> Result<std::result::Result<(), LoginError>> {
        let matches: bool = attempt.as_bytes().ct_eq(self.password.as_bytes()).into();
        if !matches {
            info!("Admin login rejected");
            return Ok(Err(LoginError::IncorrectPassword));
        }

        self.session.set(AUTH_FLAG_KEY, "true")?;
        info!("Admin logged in");
        Ok(Ok(()))
    }
}
