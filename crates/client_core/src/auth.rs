//! Client-side credential gate. This is a UI mock, not a security boundary:
//! the accepted pair is a literal compared in plaintext.

pub const DEMO_USERNAME: &str = "demo@coralmango.com";
pub const DEMO_PASSWORD: &str = "demo123";

pub fn credentials_match(username: &str, password: &str) -> bool {
    username == DEMO_USERNAME && password == DEMO_PASSWORD
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialGate {
    pub username: String,
    pub password: String,
    show_error: bool,
}

impl CredentialGate {
    /// Rejection raises the error flag; editing the inputs leaves it up until
    /// the next submit.
    pub fn submit(&mut self) -> LoginOutcome {
        if credentials_match(&self.username, &self.password) {
            LoginOutcome::Accepted
        } else {
            self.show_error = true;
            LoginOutcome::Rejected
        }
    }

    pub fn show_error(&self) -> bool {
        self.show_error
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated,
}

impl AuthState {
    /// Returns true only for the Unauthenticated -> Authenticated transition.
    pub fn authenticate(&mut self) -> bool {
        match self {
            AuthState::Unauthenticated => {
                *self = AuthState::Authenticated;
                true
            }
            AuthState::Authenticated => false,
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == AuthState::Authenticated
    }
}

#[cfg(test)]
#[path = "tests/auth_tests.rs"]
mod tests;
