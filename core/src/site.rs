use serde::Deserialize;

use crate::sizing::SizePolicy;

/// Raw contents of the site configuration selected at build time.
pub const EMBEDDED_SITE_TOML: &str = include_str!(env!("ARUKOTO_SITE_CONFIG"));

pub const DEFAULT_BLUR_PX: f64 = 12.0;

#[derive(Debug, thiserror::Error)]
pub enum SiteConfigError {
    #[error("site config parse failed: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid site config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub meta: SiteMeta,
    pub assets: SiteAssets,
    pub social: SocialLink,
    pub analytics: AnalyticsConfig,
    pub fonts: FontConfig,
    pub reveal: RevealConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
    pub lang: String,
    pub generator: String,
    pub favicon: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "あること□ないこと".to_string(),
            description: "COMING SOON | 11月13日（木）〜17日（月）｜11:00 - 19:00｜東京大学 □ 本郷キャンパス"
                .to_string(),
            lang: "en".to_string(),
            generator: String::new(),
            favicon: "/favicon.svg".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteAssets {
    pub default_background: String,
    pub overlay: String,
    pub logo: String,
    pub social_icon: String,
    pub mobile_bottom: String,
}

impl Default for SiteAssets {
    fn default() -> Self {
        Self {
            default_background: "/images/todaiback2.jpg".to_string(),
            overlay: "/images/asset-3.svg".to_string(),
            logo: "/images/logo.svg".to_string(),
            social_icon: "/images/asset-3-instagram.svg".to_string(),
            mobile_bottom: "/images/mobile-bottom.svg".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub url: String,
    pub label: String,
}

impl Default for SocialLink {
    fn default() -> Self {
        Self {
            url: "https://www.instagram.com/iiiexhibition/".to_string(),
            label: "Instagram link".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub script_src: Option<String>,
}

impl AnalyticsConfig {
    pub fn script_src(&self) -> Option<&str> {
        self.script_src
            .as_deref()
            .map(str::trim)
            .filter(|src| !src.is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub stylesheets: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    #[serde(flatten)]
    pub policy: SizePolicy,
    pub blur_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            policy: SizePolicy::default(),
            blur_px: DEFAULT_BLUR_PX,
        }
    }
}

impl SiteConfig {
    pub fn embedded() -> Result<Self, SiteConfigError> {
        Self::from_toml_str(EMBEDDED_SITE_TOML)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, SiteConfigError> {
        let config: SiteConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SiteConfigError> {
        let assets = [
            ("assets.default_background", &self.assets.default_background),
            ("assets.overlay", &self.assets.overlay),
            ("assets.logo", &self.assets.logo),
            ("assets.social_icon", &self.assets.social_icon),
            ("assets.mobile_bottom", &self.assets.mobile_bottom),
        ];
        for (field, path) in assets {
            if path.trim().is_empty() {
                return Err(invalid(field, "path cannot be empty"));
            }
        }
        if self.assets.default_background.starts_with("data:") {
            return Err(invalid(
                "assets.default_background",
                "cannot be a data URL",
            ));
        }
        let url = self.social.url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(invalid("social.url", format!("'{url}' is not an http(s) URL")));
        }
        let policy = &self.reveal.policy;
        if !positive(policy.mobile_breakpoint) {
            return Err(invalid("reveal.mobile_breakpoint", "must be positive"));
        }
        if !positive(policy.mobile_ratio) || policy.mobile_ratio > 1.0 {
            return Err(invalid("reveal.mobile_ratio", "must be in (0, 1]"));
        }
        if !positive(policy.mobile_max) {
            return Err(invalid("reveal.mobile_max", "must be positive"));
        }
        if !positive(policy.desktop_size) {
            return Err(invalid("reveal.desktop_size", "must be positive"));
        }
        if !(self.reveal.blur_px.is_finite() && self.reveal.blur_px >= 0.0) {
            return Err(invalid("reveal.blur_px", "cannot be negative"));
        }
        Ok(())
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn invalid(field: &'static str, reason: impl Into<String>) -> SiteConfigError {
    SiteConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
