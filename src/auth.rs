//! Admin credential check

use serde::Deserialize;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Fixed admin credential pair
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Literal comparison against the configured password
    pub fn verify_password(&self, input: &str) -> bool {
        input == self.password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_password() {
        let creds = Credentials::default();
        assert_eq!(creds.username, "admin");
        assert!(creds.verify_password("admin"));
    }

    #[test]
    fn test_rejects_near_misses() {
        let creds = Credentials::new("admin", "s3cret");
        assert!(!creds.verify_password("admin"));
        assert!(!creds.verify_password("s3cret "));
        assert!(!creds.verify_password("S3CRET"));
        assert!(!creds.verify_password(""));
        assert!(creds.verify_password("s3cret"));
    }
}
