//! Basic-auth credential checking.

use subtle::ConstantTimeEq;

/// A username/password pair accepted by the save endpoint.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Validates supplied credentials against a small fixed set.
///
/// Comparisons run in constant time with respect to the credential contents,
/// and every configured pair is checked regardless of earlier matches.
#[derive(Debug, Clone)]
pub struct AuthService {
    valid_credentials: Vec<Credentials>,
}

impl AuthService {
    /// Creates a service accepting a single username/password pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::with_credentials(vec![Credentials::new(username, password)])
    }

    /// Creates a service accepting any of the given pairs.
    pub fn with_credentials(valid_credentials: Vec<Credentials>) -> Self {
        Self { valid_credentials }
    }

    /// Returns true if `username` and `password` match a configured pair.
    pub fn are_credentials_valid(&self, username: &str, password: &str) -> bool {
        self.valid_credentials
            .iter()
            .fold(subtle::Choice::from(0), |matched, valid| {
                let username_match = username.as_bytes().ct_eq(valid.username.as_bytes());
                let password_match = password.as_bytes().ct_eq(valid.password.as_bytes());
                matched | (username_match & password_match)
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials() {
        let auth = AuthService::new("myuser", "mypass");
        assert!(auth.are_credentials_valid("myuser", "mypass"));
    }

    #[test]
    fn test_wrong_password() {
        let auth = AuthService::new("myuser", "mypass");
        assert!(!auth.are_credentials_valid("myuser", "wrong"));
        assert!(!auth.are_credentials_valid("myuser", ""));
        assert!(!auth.are_credentials_valid("myuser", "mypass "));
    }

    #[test]
    fn test_wrong_username() {
        let auth = AuthService::new("myuser", "mypass");
        assert!(!auth.are_credentials_valid("other", "mypass"));
    }

    #[test]
    fn test_multiple_pairs_do_not_cross_match() {
        let auth = AuthService::with_credentials(vec![
            Credentials::new("alice", "a-secret"),
            Credentials::new("bob", "b-secret"),
        ]);

        assert!(auth.are_credentials_valid("alice", "a-secret"));
        assert!(auth.are_credentials_valid("bob", "b-secret"));
        assert!(!auth.are_credentials_valid("alice", "b-secret"));
    }

    #[test]
    fn test_no_configured_credentials_rejects_everything() {
        let auth = AuthService::with_credentials(Vec::new());
        assert!(!auth.are_credentials_valid("", ""));
    }

    #[test]
    fn test_debug_masks_password() {
        let output = format!("{:?}", Credentials::new("myuser", "mypass"));
        assert!(!output.contains("mypass"));
    }
}
