//! Admin credential check.
//!
//! The only provider is a placeholder that compares against a configured
//! username/password pair. It is not authentication: the backend trusts any
//! caller, and the pair is readable by whoever can read the configuration.
//! Swapping in a real provider only requires another [`AuthProvider`].

use crate::config::AdminConfig;

pub trait AuthProvider: Send + Sync {
    /// Whether the pair opens an admin session
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Fixed credential pair. Non-production placeholder.
#[derive(Debug, Clone)]
pub struct PlaceholderCredentials {
    username: String,
    password: String,
}

impl PlaceholderCredentials {
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }
}

impl AuthProvider for PlaceholderCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_configured_pair_matches() {
        let auth = PlaceholderCredentials::new(&AdminConfig::default());

        assert!(auth.verify("admin", "admin123"));
        assert!(!auth.verify("admin", "admin"));
        assert!(!auth.verify("Admin", "admin123"));
        assert!(!auth.verify("", ""));
    }
}
