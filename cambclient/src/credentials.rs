//! API key handling and credential resolution policy.

use crate::CambError;

/// Environment variable consulted when no explicit API key is supplied.
pub const API_KEY_ENV: &str = "CAMB_API_KEY";

#[derive(PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}

/// Resolves the API key: explicit value first, then `CAMB_API_KEY` via
/// `lookup`. Blank values count as absent.
pub fn resolve_api_key(
    explicit: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<SecretString, CambError> {
    let explicit = explicit
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    let resolved = explicit.or_else(|| {
        lookup(API_KEY_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    });

    resolved.map(SecretString::new).ok_or_else(|| {
        CambError::missing_credential(format!(
            "CAMB AI API key is required; pass it explicitly or set {API_KEY_ENV}"
        ))
    })
}
