use shared::{User, UserRole};
use std::cell::RefCell;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Capability interface for session management. The app injects an
/// implementation; components only ever see the session it hands out, so a
/// real backend-token provider can replace the stub without touching them.
pub trait AuthProvider {
    fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;
    fn logout(&self);
    fn current_user(&self) -> Option<User>;
}

/// Development stub: starts signed in and accepts any credentials. No
/// security semantics whatsoever.
pub struct MockAuthProvider {
    session: RefCell<Option<User>>,
}

impl MockAuthProvider {
    pub fn new() -> Self {
        Self {
            session: RefCell::new(Some(Self::development_user())),
        }
    }

    fn development_user() -> User {
        User {
            id: 1,
            email: "admin@fshfunds.com".to_string(),
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            role: UserRole::Admin,
        }
    }
}

impl Default for MockAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProvider for MockAuthProvider {
    fn login(&self, email: &str, _password: &str) -> Result<User, AuthError> {
        let user = User {
            email: email.to_string(),
            ..Self::development_user()
        };
        *self.session.borrow_mut() = Some(user.clone());
        Ok(user)
    }

    fn logout(&self) {
        *self.session.borrow_mut() = None;
    }

    fn current_user(&self) -> Option<User> {
        self.session.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_starts_signed_in() {
        let provider = MockAuthProvider::new();
        let user = provider.current_user().expect("auto-login expected");
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn test_login_replaces_session() {
        let provider = MockAuthProvider::new();
        let user = provider.login("staff@fshfunds.com", "ignored").unwrap();
        assert_eq!(user.email, "staff@fshfunds.com");
        assert_eq!(
            provider.current_user().map(|u| u.email),
            Some("staff@fshfunds.com".to_string())
        );
    }

    #[test]
    fn test_logout_clears_session() {
        let provider = MockAuthProvider::new();
        provider.logout();
        assert!(provider.current_user().is_none());
    }
}
