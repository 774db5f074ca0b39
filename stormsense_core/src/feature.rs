//! Feature showcase catalog.

use serde::{Deserialize, Serialize};

/// Visual handle for a feature card. Rendering maps it to an SVG glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureIcon {
    CloudLightning,
    Map,
    Users,
    MapPin,
    ShieldCheck,
}

/// A displayable capability entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Feature {
    pub fn new(
        icon: FeatureIcon,
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            icon,
            title: title.into(),
            description: description.into(),
            image_url,
        }
    }

    /// Alt text for the preview image.
    pub fn preview_alt(&self) -> String {
        format!("{} Preview", self.title)
    }
}

const PREVIEW_BASE: &str = "https://storage.googleapis.com/landingpage_storage";

/// The built-in showcase, used whenever no features are supplied.
pub fn default_features() -> Vec<Feature> {
    let preview = |n: u8| Some(format!("{PREVIEW_BASE}/{n}.png"));
    vec![
        Feature::new(
            FeatureIcon::CloudLightning,
            "Hyperlocal Forecasts",
            "Get precise storm predictions for your exact location, not just your city.",
            preview(1),
        ),
        Feature::new(
            FeatureIcon::Map,
            "Live Radar Map",
            "Watch storms develop in real-time with our advanced radar technology.",
            preview(2),
        ),
        Feature::new(
            FeatureIcon::Users,
            "Community Reports",
            "See and share real-time conditions and impacts from people in your area.",
            preview(3),
        ),
        Feature::new(
            FeatureIcon::MapPin,
            "Alerts & Monitoring",
            "Save and receive alerts on whatever locations that matter to you.",
            preview(4),
        ),
        Feature::new(
            FeatureIcon::ShieldCheck,
            "Safety from the Source",
            "View all information issued by the National Weather Service.",
            preview(5),
        ),
    ]
}

/// Ordered, never-empty feature sequence. Order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCatalog {
    features: Vec<Feature>,
}

impl FeatureCatalog {
    /// Wraps `features`, substituting [`default_features`] for an empty list.
    pub fn new(features: Vec<Feature>) -> Self {
        if features.is_empty() {
            tracing::debug!("no features supplied, using the built-in showcase");
            return Self {
                features: default_features(),
            };
        }
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Never true for a catalog built through [`FeatureCatalog::new`].
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Feature> {
        self.features.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    pub fn as_slice(&self) -> &[Feature] {
        &self.features
    }
}

impl Default for FeatureCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_list_falls_back_to_builtin_five() {
        let catalog = FeatureCatalog::new(Vec::new());
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());

        let titles: Vec<&str> = catalog.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Hyperlocal Forecasts",
                "Live Radar Map",
                "Community Reports",
                "Alerts & Monitoring",
                "Safety from the Source",
            ]
        );
    }

    #[test]
    fn supplied_features_are_kept_in_order() {
        let features = vec![
            Feature::new(FeatureIcon::Map, "Radar", "Loops", None),
            Feature::new(
                FeatureIcon::Users,
                "Reports",
                "Crowd",
                Some("https://x/r.png".into()),
            ),
        ];
        let catalog = FeatureCatalog::new(features.clone());
        assert_eq!(catalog.as_slice(), features.as_slice());
        assert_eq!(
            catalog.get(1).and_then(|f| f.image_url.as_deref()),
            Some("https://x/r.png")
        );
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn builtin_previews_are_numbered_in_display_order() {
        for (index, feature) in default_features().iter().enumerate() {
            let expected = format!("{PREVIEW_BASE}/{}.png", index + 1);
            assert_eq!(feature.image_url.as_deref(), Some(expected.as_str()));
        }
    }

    #[test]
    fn icon_names_are_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            icon: FeatureIcon,
        }
        let parsed: Wrapper = toml::from_str(r#"icon = "shield-check""#).unwrap();
        assert_eq!(parsed.icon, FeatureIcon::ShieldCheck);
    }

    #[test]
    fn preview_alt_uses_title() {
        let feature = Feature::new(FeatureIcon::MapPin, "Alerts", "Saved places", None);
        assert_eq!(feature.preview_alt(), "Alerts Preview");
    }
}
