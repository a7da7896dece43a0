use serde::{Deserialize, Serialize};

/// Profile of the signed-in user, as served by `GET /auth/me`.
///
/// Read-only on the client; the API owns this data. Field names follow
/// the API's camelCase wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
}

impl UserProfile {
    /// First letter of the name, for the account avatar badge; "U"
    /// when the name is empty.
    #[must_use]
    pub fn initial(&self) -> String {
        self.full_name
            .chars()
            .next()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "U".to_string())
    }
}
