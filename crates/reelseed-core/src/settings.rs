use std::fmt;

use crate::error::SeedError;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const KEY_VAR: &str = "SUPABASE_KEY";
pub const URL_FALLBACK_VAR: &str = "VITE_SUPABASE_URL";
pub const KEY_FALLBACK_VAR: &str = "VITE_SUPABASE_ANON_KEY";

/// Connection settings for the target data store, resolved once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub url: String,
    pub api_key: String,
}

impl Settings {
    /// Resolve settings through `lookup`.
    ///
    /// Each value is read from its primary variable first and falls back to
    /// its alias when the primary is unset or blank.
    pub fn resolve<F>(lookup: F) -> Result<Self, SeedError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |primary: &str, fallback: &str| {
            [primary, fallback]
                .into_iter()
                .filter_map(|name| lookup(name))
                .map(|value| value.trim().to_string())
                .find(|value| !value.is_empty())
        };

        let url = read(URL_VAR, URL_FALLBACK_VAR);
        let api_key = read(KEY_VAR, KEY_FALLBACK_VAR);

        match (url, api_key) {
            (Some(url), Some(api_key)) => {
                let url = url.trim_end_matches('/').to_string();
                tracing::debug!(%url, "resolved store settings");
                Ok(Self { url, api_key })
            }
            (url, api_key) => {
                let mut missing = Vec::new();
                if url.is_none() {
                    missing.push(format!("{URL_VAR} (or {URL_FALLBACK_VAR})"));
                }
                if api_key.is_none() {
                    missing.push(format!("{KEY_VAR} (or {KEY_FALLBACK_VAR})"));
                }
                Err(SeedError::Config(format!(
                    "set {} in the environment before running",
                    missing.join(" and ")
                )))
            }
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
