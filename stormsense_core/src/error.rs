//! Failure kinds.
//!
//! None of these reach the visitor as a message: media failures turn into a
//! fallback asset, config failures into the built-in defaults.

use thiserror::Error;

/// A media asset that could not be shown as intended.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaFailure {
    /// Image or video failed to fetch or decode.
    #[error("failed to load {url}")]
    AssetLoad { url: String },
    /// The browser refused to start playback (usually autoplay policy).
    #[error("playback not permitted: {reason}")]
    PlaybackPermission { reason: String },
}

impl MediaFailure {
    pub fn asset(url: impl Into<String>) -> Self {
        Self::AssetLoad { url: url.into() }
    }

    pub fn permission(reason: impl Into<String>) -> Self {
        Self::PlaybackPermission {
            reason: reason.into(),
        }
    }

    /// Short label for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AssetLoad { .. } => "asset-load",
            Self::PlaybackPermission { .. } => "playback-permission",
        }
    }
}

/// Errors raised while reading `site.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{name} is not an absolute http(s) URL: {url:?}")]
    InvalidLink { name: &'static str, url: String },

    #[error("feature #{index} has an empty title")]
    EmptyFeatureTitle { index: usize },

    #[error("wide breakpoint must be a positive number of pixels, got {0}")]
    InvalidBreakpoint(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_failure_messages_name_the_cause() {
        let load = MediaFailure::asset("https://cdn.example/1.png");
        assert_eq!(load.to_string(), "failed to load https://cdn.example/1.png");
        assert_eq!(load.kind(), "asset-load");

        let blocked = MediaFailure::permission("NotAllowedError");
        assert_eq!(
            blocked.to_string(),
            "playback not permitted: NotAllowedError"
        );
        assert_eq!(blocked.kind(), "playback-permission");
    }

    #[test]
    fn config_error_wraps_toml_errors() {
        let parse_err = toml::from_str::<toml::Table>("links = [").unwrap_err();
        let err = ConfigError::from(parse_err);
        assert!(err.to_string().starts_with("failed to parse site config"));
    }
}
