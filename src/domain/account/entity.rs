//! Account entity and related types

use serde::{Deserialize, Serialize};

/// Account identifier as supplied by clients
///
/// Lookups accept any string; format rules are enforced only when an account
/// is created, so an unknown or badly formed id simply resolves to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User account held by the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    /// Stored and compared as plaintext - never exposed in serialization
    #[serde(skip_serializing)]
    password: String,
    /// Empty until the user picks one
    nickname: String,
    /// Empty until the user writes one
    comment: String,
}

impl Account {
    pub fn new(
        id: AccountId,
        password: impl Into<String>,
        nickname: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            id,
            password: password.into(),
            nickname: nickname.into(),
            comment: comment.into(),
        }
    }

    // Getters

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    /// Nickname shown to clients, falling back to the account id
    pub fn nickname(&self) -> &str {
        if self.nickname.is_empty() {
            self.id.as_str()
        } else {
            &self.nickname
        }
    }

    /// Comment, if one has ever been set
    pub fn comment(&self) -> Option<&str> {
        if self.comment.is_empty() {
            None
        } else {
            Some(&self.comment)
        }
    }

    /// Plaintext password comparison
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    // Mutators

    /// Apply a profile update in place.
    ///
    /// Empty values leave the current field untouched; a field cannot be
    /// cleared once set.
    pub fn apply(&mut self, update: &ProfileUpdate) {
        if let Some(nickname) = update.nickname().filter(|v| !v.is_empty()) {
            self.nickname = nickname.to_string();
        }
        if let Some(comment) = update.comment().filter(|v| !v.is_empty()) {
            self.comment = comment.to_string();
        }
    }

    /// Post-update view recorded in the profile history
    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            nickname: self.nickname().to_string(),
            comment: self.comment.clone(),
        }
    }
}

/// Form field names that can never be changed after signup
pub const IMMUTABLE_FIELDS: [&str; 2] = ["user_id", "password"];

/// Requested change to the mutable profile fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    nickname: Option<String>,
    comment: Option<String>,
    rejected: Vec<String>,
}

impl ProfileUpdate {
    pub fn new(nickname: Option<String>, comment: Option<String>) -> Self {
        Self {
            nickname,
            comment,
            rejected: Vec::new(),
        }
    }

    /// Build an update from decoded form pairs.
    ///
    /// The first value of a repeated key wins. Immutable keys are remembered
    /// so the service can reject the whole request.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut update = Self::default();

        for (key, value) in pairs {
            match key.as_ref() {
                "nickname" if update.nickname.is_none() => update.nickname = Some(value.into()),
                "comment" if update.comment.is_none() => update.comment = Some(value.into()),
                key if IMMUTABLE_FIELDS.contains(&key) => {
                    if !update.rejected.iter().any(|k| k == key) {
                        update.rejected.push(key.to_string());
                    }
                }
                _ => {}
            }
        }

        update
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Immutable keys present in the request
    pub fn rejected_fields(&self) -> &[String] {
        &self.rejected
    }

    /// True when at least one mutable field carries a non-empty value
    pub fn has_changes(&self) -> bool {
        self.nickname().is_some_and(|v| !v.is_empty())
            || self.comment().is_some_and(|v| !v.is_empty())
    }
}

/// Profile state captured after a successful update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub nickname: String,
    pub comment: String,
}
