//! Form variant value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which flavour of the content request form is deployed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    /// User supplies the webhook URL; tracks a session login
    Generic,
    /// Fixed webhook URL, email required, editable in-memory client list
    Static,
    /// Fixed webhook URL, email required, clients fetched from a record store
    Remote,
}

impl FormVariant {
    /// Whether the email field is shown and required
    pub fn collects_email(&self) -> bool {
        matches!(self, FormVariant::Static | FormVariant::Remote)
    }

    /// Whether the webhook URL is a form field (rather than configured)
    pub fn collects_webhook_url(&self) -> bool {
        matches!(self, FormVariant::Generic)
    }

    /// Whether submissions carry the session login
    pub fn tracks_login(&self) -> bool {
        matches!(self, FormVariant::Generic)
    }

    /// Whether the optional target audience field exists
    pub fn collects_target_audience(&self) -> bool {
        matches!(self, FormVariant::Generic)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormVariant::Generic => "generic",
            FormVariant::Static => "static",
            FormVariant::Remote => "remote",
        }
    }
}

impl Default for FormVariant {
    fn default() -> Self {
        Self::Static
    }
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "generic" => Ok(FormVariant::Generic),
            "static" => Ok(FormVariant::Static),
            "remote" => Ok(FormVariant::Remote),
            other => Err(format!(
                "unknown form variant '{}' (expected generic, static or remote)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities() {
        assert!(FormVariant::Generic.collects_webhook_url());
        assert!(FormVariant::Generic.tracks_login());
        assert!(!FormVariant::Generic.collects_email());

        for variant in [FormVariant::Static, FormVariant::Remote] {
            assert!(variant.collects_email());
            assert!(!variant.collects_webhook_url());
            assert!(!variant.tracks_login());
            assert!(!variant.collects_target_audience());
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Remote".parse::<FormVariant>(), Ok(FormVariant::Remote));
        assert_eq!(" generic ".parse::<FormVariant>(), Ok(FormVariant::Generic));
        assert!("dynamic".parse::<FormVariant>().is_err());
    }

    #[test]
    fn test_deserialize_lowercase() {
        let variant: FormVariant = serde_json::from_str("\"static\"").unwrap();
        assert_eq!(variant, FormVariant::Static);
    }
}
