use serde::{Deserialize, Serialize};

/// The account an API key belongs to, or a member of a shared album.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}

impl User {
    /// Two users are the same account when their ids match. Album member
    /// lists sometimes omit the id, in which case the email decides.
    #[must_use]
    pub fn is_same_account(&self, other: &Self) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => !self.email.is_empty() && self.email == other.email,
        }
    }
}
