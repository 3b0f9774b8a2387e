//! Site configuration.
//!
//! Everything has a compiled-in default. The only value that can be swapped
//! without editing code is the EmailJS public key, read at build time from
//! `PORTFOLIO_EMAILJS_PUBLIC_KEY`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::contact::RESET_DELAY;
use crate::rotation::ROTATION_INTERVAL;
use crate::tracker::{REFERENCE_LINE, REVEAL_THRESHOLD, SCROLLED_OFFSET};

/// EmailJS REST endpoint for template sends.
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS service the contact form sends through.
pub const EMAILJS_SERVICE_ID: &str = "service_wucj1fn";

/// EmailJS template rendering the contact message.
pub const EMAILJS_TEMPLATE_ID: &str = "template_6uayn4g";

/// Public (browser-side) EmailJS key.
pub const EMAILJS_PUBLIC_KEY: &str = "hFpUAq4gr4amVCelH";

/// Identifies the remote email relay. None of these are secrets and none
/// are validated locally; a wrong value shows up as a rejected send.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// URL the send request is posted to
    pub endpoint: String,
    /// Service id
    pub service_id: String,
    /// Template id
    pub template_id: String,
    /// Public key, sent as `user_id`
    pub public_key: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: EMAILJS_ENDPOINT.to_string(),
            service_id: EMAILJS_SERVICE_ID.to_string(),
            template_id: EMAILJS_TEMPLATE_ID.to_string(),
            public_key: EMAILJS_PUBLIC_KEY.to_string(),
        }
    }
}

impl RelayConfig {
    /// Defaults, with the public key taken from `PORTFOLIO_EMAILJS_PUBLIC_KEY`
    /// when it was set at compile time.
    pub fn from_build_env() -> Self {
        Self::default().with_public_key_override(option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY"))
    }

    fn with_public_key_override(mut self, key: Option<&str>) -> Self {
        if let Some(key) = key.map(str::trim).filter(|k| !k.is_empty()) {
            self.public_key = key.to_string();
        }
        self
    }
}

/// Full configuration of one page instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Email relay identifiers
    pub relay: RelayConfig,
    /// Reference line for the active section, px from the viewport top
    pub reference_line: f64,
    /// Intersection ratio that reveals a section
    pub reveal_threshold: f64,
    /// Scroll offset that switches the nav to its solid style
    pub scrolled_offset: f64,
    /// Delay before a finished submission returns to idle
    pub reset_delay: Duration,
    /// Interval between role headline changes
    pub role_interval: Duration,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            relay: RelayConfig::default(),
            reference_line: REFERENCE_LINE,
            reveal_threshold: REVEAL_THRESHOLD,
            scrolled_offset: SCROLLED_OFFSET,
            reset_delay: RESET_DELAY,
            role_interval: ROTATION_INTERVAL,
        }
    }
}

impl PortfolioConfig {
    /// Defaults plus build-time overrides.
    pub fn from_build_env() -> Self {
        Self {
            relay: RelayConfig::from_build_env(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_constants() {
        let cfg = PortfolioConfig::default();
        assert_eq!(cfg.reference_line, 150.0);
        assert_eq!(cfg.reveal_threshold, 0.1);
        assert_eq!(cfg.reset_delay, Duration::from_secs(3));
        assert_eq!(cfg.role_interval, Duration::from_millis(2500));
        assert_eq!(cfg.relay.service_id, "service_wucj1fn");
        assert_eq!(cfg.relay.template_id, "template_6uayn4g");
    }

    #[test]
    fn test_public_key_override() {
        let cfg = RelayConfig::default().with_public_key_override(Some(" pk_live "));
        assert_eq!(cfg.public_key, "pk_live");

        let cfg = RelayConfig::default().with_public_key_override(Some("   "));
        assert_eq!(cfg.public_key, EMAILJS_PUBLIC_KEY);

        let cfg = RelayConfig::default().with_public_key_override(None);
        assert_eq!(cfg, RelayConfig::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let cfg: PortfolioConfig = serde_json::from_str(r#"{"reference_line": 120.0}"#).unwrap();
        assert_eq!(cfg.reference_line, 120.0);
        assert_eq!(cfg.relay, RelayConfig::default());
    }
}
