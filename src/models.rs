use serde::Deserialize;

/// Credential payload shared by the register and login endpoints.
///
/// Both fields are optional: an absent field is not rejected, it is
/// normalized to the empty string before it reaches the store or the
/// audit trail.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CredentialsRequest {
    pub user: Option<String>,
    pub pass: Option<String>,
}

impl CredentialsRequest {
    pub fn username(&self) -> &str {
        self.user.as_deref().unwrap_or_default()
    }

    pub fn password(&self) -> &str {
        self.pass.as_deref().unwrap_or_default()
    }
}
