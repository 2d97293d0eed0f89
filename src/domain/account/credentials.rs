//! Client-supplied credentials

use super::entity::AccountId;

/// Account id and plaintext password presented with a request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user_id: AccountId,
    password: String,
}

impl Credentials {
    pub fn new(user_id: impl Into<AccountId>, password: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
        }
    }

    /// Parse a decoded `user_id:password` payload.
    ///
    /// The payload must split into exactly two fields, so a colon inside the
    /// password is rejected.
    pub fn parse(payload: &str) -> Option<Self> {
        let mut fields = payload.split(':');

        match (fields.next(), fields.next(), fields.next()) {
            (Some(user_id), Some(password), None) => Some(Self::new(user_id, password)),
            _ => None,
        }
    }

    pub fn user_id(&self) -> &AccountId {
        &self.user_id
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user_id", &self.user_id)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload() {
        let credentials = Credentials::parse("alice01:secret123").unwrap();
        assert_eq!(credentials.user_id().as_str(), "alice01");
        assert_eq!(credentials.password(), "secret123");
    }

    #[test]
    fn test_parse_allows_empty_fields() {
        let credentials = Credentials::parse(":").unwrap();
        assert_eq!(credentials.user_id().as_str(), "");
        assert_eq!(credentials.password(), "");
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        assert!(Credentials::parse("alice01").is_none());
        assert!(Credentials::parse("alice01:secret:123").is_none());
        assert!(Credentials::parse("").is_none());
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("alice01", "secret123");
        let debug = format!("{:?}", credentials);

        assert!(debug.contains("alice01"));
        assert!(!debug.contains("secret123"));
    }
}
