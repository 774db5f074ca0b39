//! # stormsense-core
//!
//! State and policy behind the StormSense landing site, kept free of any UI
//! framework so every rule can be exercised by plain `cargo test`.
//!
//! ## Features
//!
//! - **Feature Selector** - hover cursor for wide layouts, toggle cursor for narrow ones
//! - **Preview Images** - per-element fallback substitution on load failure
//! - **Media Fallback** - autoplay, one gesture-triggered retry, static background
//! - **Site Config** - links, media and layout compiled in from `site.toml`
//!
//! ## Quick Start
//!
//! ```rust
//! use stormsense_core::{FeatureCatalog, Layout, SelectionState};
//!
//! let catalog = FeatureCatalog::new(Vec::new());
//! assert_eq!(catalog.len(), 5);
//!
//! let mut selection = SelectionState::new(catalog.len());
//! selection.hover(3);
//! selection.leave();
//! assert_eq!(selection.hovered(), 0);
//!
//! selection.set_layout(Layout::Narrow);
//! selection.select(0);
//! assert_eq!(selection.selected(), None);
//! ```
//!
//! Developed with 💀 by The StormSense Team (c)2025

pub mod config;
pub mod error;
pub mod feature;
pub mod gesture;
pub mod image;
pub mod playback;
pub mod privacy;
pub mod route;
pub mod selection;

pub use config::SiteConfig;
pub use error::{ConfigError, MediaFailure};
pub use feature::{Feature, FeatureCatalog, FeatureIcon, default_features};
pub use gesture::{GestureGuard, GestureKind, GestureTarget};
pub use image::PreviewImages;
pub use playback::{MediaFallbackController, PlayAttempt, VideoPlaybackState};
pub use route::Page;
pub use selection::{Layout, PreviewStyle, SelectionState};
