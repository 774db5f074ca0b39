//! Site configuration.
//!
//! Loaded from `site.toml`, which is compiled into the crate. Every table is
//! optional; missing keys take the built-in values below.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::feature::{Feature, FeatureCatalog};

const EMBEDDED: &str = include_str!("../site.toml");

const STORAGE: &str = "https://storage.googleapis.com/landingpage_storage";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub links: StoreLinks,
    pub media: MediaAssets,
    pub layout: LayoutConfig,
    /// Showcase entries; empty means the built-in five.
    pub features: Vec<Feature>,
}

/// Outbound destinations, each opened in a new browsing context.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreLinks {
    pub app_store: String,
    pub google_play: String,
    pub web_app: String,
}

impl Default for StoreLinks {
    fn default() -> Self {
        Self {
            app_store: "https://apps.apple.com/us/app/stormsense/id6746872117".into(),
            google_play:
                "https://play.google.com/store/apps/details?id=com.excarta.stormsense&hl=en_US"
                    .into(),
            web_app: "https://stormsense.ai".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MediaAssets {
    pub hero_video: String,
    /// Static background shown when the hero video cannot play.
    pub hero_fallback: String,
    pub logo: String,
    pub hero_screenshots: String,
    pub web_app_icon: String,
    pub download_mockup: String,
    /// Substitute for any feature preview that fails to load.
    pub preview_fallback: String,
}

impl Default for MediaAssets {
    fn default() -> Self {
        Self {
            hero_video: format!("{STORAGE}/StormSense_App_Preview_Video_Full.mp4"),
            hero_fallback: format!("{STORAGE}/Gemini_Generated_Image_ghcreaghcreaghcr.jpeg"),
            logo: format!("{STORAGE}/apple_touch_icon.png"),
            hero_screenshots: format!("{STORAGE}/StormSense%20Landing%20Page%20Screenshots.png"),
            web_app_icon: format!("{STORAGE}/noun-1440734-FFFFFF.png"),
            download_mockup: format!("{STORAGE}/StormSense_Country_View.png"),
            preview_fallback: "https://images.unsplash.com/photo-1504608524841-42fe6f032b4b?w=400&q=80"
                .into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewport width (CSS px) from which the wide showcase layout applies.
    pub wide_breakpoint_px: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            wide_breakpoint_px: 1024.0,
        }
    }
}

impl SiteConfig {
    /// Configuration compiled in from `site.toml`.
    /// Returns default config if the file is invalid.
    pub fn embedded() -> Self {
        match Self::from_toml_str(EMBEDDED) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("site.toml rejected, using built-in defaults: {e}");
                Self::default()
            }
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let urls = [
            ("links.app_store", &self.links.app_store),
            ("links.google_play", &self.links.google_play),
            ("links.web_app", &self.links.web_app),
            ("media.hero_video", &self.media.hero_video),
            ("media.hero_fallback", &self.media.hero_fallback),
            ("media.logo", &self.media.logo),
            ("media.hero_screenshots", &self.media.hero_screenshots),
            ("media.web_app_icon", &self.media.web_app_icon),
            ("media.download_mockup", &self.media.download_mockup),
            ("media.preview_fallback", &self.media.preview_fallback),
        ];
        for (name, url) in urls {
            if !is_absolute_http(url) {
                return Err(ConfigError::InvalidLink {
                    name,
                    url: url.clone(),
                });
            }
        }

        let breakpoint = self.layout.wide_breakpoint_px;
        if !breakpoint.is_finite() || breakpoint <= 0.0 {
            return Err(ConfigError::InvalidBreakpoint(breakpoint));
        }

        if let Some(index) = self
            .features
            .iter()
            .position(|f| f.title.trim().is_empty())
        {
            return Err(ConfigError::EmptyFeatureTitle { index });
        }
        Ok(())
    }

    /// Feature catalog for the showcase (built-in five when none configured).
    pub fn catalog(&self) -> FeatureCatalog {
        FeatureCatalog::new(self.features.clone())
    }
}

fn is_absolute_http(url: &str) -> bool {
    ["https://", "http://"]
        .iter()
        .any(|scheme| url.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}
