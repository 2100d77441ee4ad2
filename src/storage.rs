/// Credential storage for chrome.storage.sync
use serde::{Deserialize, Serialize};

use crate::error::BlockError;

/// Keys read from chrome.storage.sync
pub const SETTINGS_KEYS: [&str; 3] = ["githubUser", "githubRepo", "githubPat"];

/// Raw stored settings; any key may be absent
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredSettings {
    #[serde(default)]
    pub github_user: Option<String>,
    #[serde(default)]
    pub github_repo: Option<String>,
    #[serde(default)]
    pub github_pat: Option<String>,
}

/// Complete GitHub credentials
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account: String,
    pub repository: String,
    pub token: String,
}

// Keep the token out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("account", &self.account)
            .field("repository", &self.repository)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl StoredSettings {
    /// Validate into `Credentials`; a missing or blank field is `MissingConfiguration`
    pub fn credentials(&self) -> Result<Credentials, BlockError> {
        fn field(value: &Option<String>) -> Result<String, BlockError> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or(BlockError::MissingConfiguration)
        }

        Ok(Credentials {
            account: field(&self.github_user)?,
            repository: field(&self.github_repo)?,
            token: field(&self.github_pat)?,
        })
    }
}

/// Read-only source of stored settings
#[allow(async_fn_in_trait)]
pub trait CredentialStore {
    async fn load_settings(&self) -> Result<StoredSettings, BlockError>;
}

/// Opens the extension's options page so the user can fill in credentials
#[allow(async_fn_in_trait)]
pub trait OptionsPage {
    async fn open_options_page(&self) -> Result<(), BlockError>;
}
