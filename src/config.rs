//! Site configuration embedded at build time from `assets/site.json`.

use dioxus::logger::tracing::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const SITE_JSON: &str = include_str!("../assets/site.json");

/// Parsed once on first access; falls back to defaults if the embedded file is broken.
pub static SITE_CONFIG: Lazy<SiteConfig> = Lazy::new(|| {
    SiteConfig::from_json(SITE_JSON).unwrap_or_else(|err| {
        warn!("site config is invalid, using defaults: {err}");
        SiteConfig::default()
    })
});

pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about: String,
    /// Height of the fixed navigation bar, subtracted from scroll targets.
    #[serde(default = "default_nav_offset_px")]
    pub nav_offset_px: f64,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub tracks: Vec<TrackConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    #[serde(default = "default_reveal_threshold")]
    pub threshold: f64,
    #[serde(default = "default_reveal_root_margin")]
    pub root_margin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_relay_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub access_key: String,
    #[serde(default)]
    pub fallback_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackConfig {
    pub id: String,
    pub title: String,
    pub src: String,
    #[serde(default)]
    pub blurb: Option<String>,
    /// Placeholder entry whose audio file is not shipped with the site.
    #[serde(default)]
    pub sample: bool,
}

fn default_owner() -> String {
    "Portfolio".to_string()
}

fn default_nav_offset_px() -> f64 {
    80.0
}

fn default_reveal_threshold() -> f64 {
    0.1
}

fn default_reveal_root_margin() -> String {
    "0px 0px -50px 0px".to_string()
}

fn default_relay_endpoint() -> String {
    "https://api.web3forms.com/submit".to_string()
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            tagline: String::new(),
            about: String::new(),
            nav_offset_px: default_nav_offset_px(),
            reveal: RevealConfig::default(),
            contact: ContactConfig::default(),
            tracks: Vec::new(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_reveal_threshold(),
            root_margin: default_reveal_root_margin(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_relay_endpoint(),
            access_key: String::new(),
            fallback_email: String::new(),
        }
    }
}

impl ContactConfig {
    pub fn failure_message(&self) -> String {
        if self.fallback_email.is_empty() {
            "Sorry, there was an error sending your message. Please try again later.".to_string()
        } else {
            format!(
                "Sorry, there was an error sending your message. Please try emailing me directly at {}",
                self.fallback_email
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = SiteConfig::from_json(SITE_JSON).expect("embedded site.json must parse");
        assert!(!config.tracks.is_empty());
        assert_eq!(config.nav_offset_px, 80.0);
        assert_eq!(config.contact.endpoint, "https://api.web3forms.com/submit");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = SiteConfig::from_json(r#"{ "owner": "Someone" }"#).unwrap();
        assert_eq!(config.owner, "Someone");
        assert_eq!(config.nav_offset_px, 80.0);
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
        assert!(config.tracks.is_empty());
    }

    #[test]
    fn track_blurb_is_optional() {
        let config = SiteConfig::from_json(
            r#"{ "tracks": [{ "id": "a", "title": "A", "src": "/a.mp3" }] }"#,
        )
        .unwrap();
        assert_eq!(config.tracks[0].blurb, None);
    }

    #[test]
    fn shipped_tracks_are_marked_as_samples() {
        let config = SiteConfig::from_json(SITE_JSON).unwrap();
        assert!(config.tracks.iter().all(|track| track.sample));
    }

    #[test]
    fn tracks_are_real_unless_marked() {
        let config = SiteConfig::from_json(
            r#"{ "tracks": [{ "id": "a", "title": "A", "src": "/a.mp3" }] }"#,
        )
        .unwrap();
        assert!(!config.tracks[0].sample);
    }

    #[test]
    fn failure_message_names_fallback_email() {
        let contact = ContactConfig {
            fallback_email: "me@example.com".to_string(),
            ..ContactConfig::default()
        };
        assert!(contact.failure_message().ends_with("directly at me@example.com"));
    }
}
