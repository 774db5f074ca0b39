//! Feature Selector state.
//!
//! Two cursors over the same feature sequence, one per layout, never
//! reconciled with each other:
//!
//! - wide layout: a hover cursor that always points somewhere (default 0,
//!   pointer-leave returns it to 0)
//! - narrow layout: a click cursor that toggles, `None` means collapsed
//!
//! Operations aimed at the inactive layout are no-ops, so event handlers can
//! forward every pointer event without checking the viewport themselves.

/// Viewport-dependent rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Hover-driven preview stack beside the cards.
    #[default]
    Wide,
    /// Click-driven inline preview below the tapped card.
    Narrow,
}

impl Layout {
    /// Widths at or above `breakpoint` render the wide layout.
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        if width >= breakpoint {
            Self::Wide
        } else {
            Self::Narrow
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    len: usize,
    layout: Layout,
    hovered: usize,
    selected: Option<usize>,
}

impl SelectionState {
    /// Both cursors start on the first feature.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            layout: Layout::default(),
            hovered: 0,
            selected: (len > 0).then_some(0),
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Switches the active layout. Neither cursor is touched.
    pub fn set_layout(&mut self, layout: Layout) -> bool {
        let changed = self.layout != layout;
        self.layout = layout;
        changed
    }

    /// Pointer entered card `index`. Wide layout only.
    pub fn hover(&mut self, index: usize) -> bool {
        if self.layout != Layout::Wide || index >= self.len {
            return false;
        }
        let changed = self.hovered != index;
        self.hovered = index;
        changed
    }

    /// Pointer left a card: back to the first feature, never to "none".
    pub fn leave(&mut self) -> bool {
        if self.layout != Layout::Wide {
            return false;
        }
        let changed = self.hovered != 0;
        self.hovered = 0;
        changed
    }

    /// Card `index` tapped. Narrow layout only.
    ///
    /// Tapping the expanded card collapses it; tapping another card expands
    /// that one instead.
    pub fn select(&mut self, index: usize) -> bool {
        if self.layout != Layout::Narrow || index >= self.len {
            return false;
        }
        self.selected = if self.selected == Some(index) {
            None
        } else {
            Some(index)
        };
        true
    }

    pub fn hovered(&self) -> usize {
        self.hovered
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether card `index` is highlighted under the active layout.
    pub fn is_highlighted(&self, index: usize) -> bool {
        match self.layout {
            Layout::Wide => self.hovered == index,
            Layout::Narrow => self.selected == Some(index),
        }
    }

    /// Whether card `index` shows its inline preview (narrow layout).
    pub fn is_expanded(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Styling for preview `index` in the wide-layout image stack.
    pub fn wide_preview(&self, index: usize) -> PreviewStyle {
        if self.hovered == index {
            PreviewStyle::SHOWN
        } else {
            PreviewStyle::HIDDEN
        }
    }
}

/// Opacity and scale of one preview in the crossfading stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewStyle {
    pub opacity: f32,
    pub scale: f32,
}

impl PreviewStyle {
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        scale: 1.0,
    };
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        scale: 1.05,
    };

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Inline style with a 300 ms crossfade.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: scale({}); transition: opacity 0.3s ease, transform 0.3s ease;",
            self.opacity, self.scale
        )
    }
}
