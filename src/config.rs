use log::{info, warn};
use serde::Deserialize;
use std::path::Path;

/// Site-wide settings read from `folio.toml`. Every field has a default, so
/// the file is optional and may set any subset of keys.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub site_title: String,
    pub tagline: String,
    pub description: String,
    pub site_url: String,
    /// Third-party endpoint both the contact and newsletter forms POST to.
    pub form_endpoint: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub email: String,
    /// chrono format string for card and detail dates.
    pub date_format: String,
    /// Post keys teased on the home page, in order.
    pub featured_posts: Vec<String>,
    pub static_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_name: "Aimaan Shergill".to_string(),
            site_title: "Hi, I'm Aimaan!".to_string(),
            tagline: "I help businesses grow through strategy, data, and innovation.".to_string(),
            description: "Personal website of Aimaan Shergill \u{2013} strategy, data, and innovation."
                .to_string(),
            site_url: "http://localhost:8000".to_string(),
            form_endpoint: "https://formspree.io/f/xjkrzney".to_string(),
            linkedin_url: "https://www.linkedin.com/in/aimaanshergill/".to_string(),
            github_url: "https://github.com/ReadytoCS".to_string(),
            email: "aimaan.shergill@gmail.com".to_string(),
            date_format: "%b %-d, %Y".to_string(),
            featured_posts: vec![
                "narayana".to_string(),
                "taobao".to_string(),
                "mpesa".to_string(),
            ],
            static_dir: "website/public".to_string(),
        }
    }
}

pub const CONFIG_FILE: &str = "folio.toml";

impl SiteConfig {
    /// Load `folio.toml` from the working directory. A missing file means
    /// defaults; a malformed one is reported and ignored.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(_) => {
                info!("{} not found, using built-in site config", path.display());
                return SiteConfig::default();
            }
        };
        match Self::from_toml_str(&raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Ignoring {}: {}", path.display(), e);
                SiteConfig::default()
            }
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, String> {
        toml::from_str(raw).map_err(|e| e.to_string())
    }

    /// Both URLs end up in rendered markup, so refuse anything that is not
    /// an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), String> {
        check_http_url("form_endpoint", &self.form_endpoint)?;
        check_http_url("site_url", &self.site_url)?;
        if self.date_format.trim().is_empty() {
            return Err("date_format must not be empty".to_string());
        }
        Ok(())
    }

    /// `site_url` without a trailing slash, for joining with paths.
    pub fn base_url(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }
}

fn check_http_url(field: &str, value: &str) -> Result<(), String> {
    let parsed = url::Url::parse(value).map_err(|e| format!("{} {:?}: {}", field, value, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("{} must be http or https, got {}", field, other)),
    }
}
