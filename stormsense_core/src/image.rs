//! Preview image sources with per-slot fallback substitution.

use crate::error::MediaFailure;
use crate::feature::FeatureCatalog;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Primary(String),
    Fallback,
}

/// Current `src` of every preview `<img>` in one rendering of the showcase.
///
/// A slot only ever moves from its primary URL to the fallback, so an
/// `error` event on the fallback itself cannot loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImages {
    slots: Vec<Slot>,
    fallback_url: String,
}

impl PreviewImages {
    pub fn new(catalog: &FeatureCatalog, fallback_url: impl Into<String>) -> Self {
        let slots = catalog
            .iter()
            .map(|feature| match &feature.image_url {
                Some(url) if !url.trim().is_empty() => Slot::Primary(url.clone()),
                _ => Slot::Fallback,
            })
            .collect();
        Self {
            slots,
            fallback_url: fallback_url.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// URL to render for slot `index`; the fallback for unknown slots.
    pub fn src(&self, index: usize) -> &str {
        match self.slots.get(index) {
            Some(Slot::Primary(url)) => url,
            _ => &self.fallback_url,
        }
    }

    pub fn is_fallback(&self, index: usize) -> bool {
        !matches!(self.slots.get(index), Some(Slot::Primary(_)))
    }

    /// Handles an image load error on slot `index`.
    ///
    /// Returns the failure when the slot switched to the fallback, `None` when
    /// nothing changed (fallback already showing, or no such slot).
    pub fn mark_failed(&mut self, index: usize) -> Option<MediaFailure> {
        let slot = self.slots.get_mut(index)?;
        match std::mem::replace(slot, Slot::Fallback) {
            Slot::Primary(url) => {
                let failure = MediaFailure::asset(url);
                tracing::warn!(
                    index,
                    kind = failure.kind(),
                    "{failure}, using fallback {}",
                    self.fallback_url
                );
                Some(failure)
            }
            Slot::Fallback => {
                tracing::warn!(index, "fallback preview {} failed to load", self.fallback_url);
                None
            }
        }
    }
}
