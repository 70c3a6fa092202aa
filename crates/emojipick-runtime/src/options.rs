#![forbid(unsafe_code)]

//! Host embedding options.

use std::fmt;

use crate::placement::{AnchorRect, HorizontalSide, PopupPlacement, VerticalSide};

/// How the host embeds the picker.
pub struct PickerOptions {
    /// Whether the popup starts visible.
    pub visible: bool,
    pub horizontal: HorizontalSide,
    pub vertical: VerticalSide,
    pub anchor: Option<AnchorRect>,
    on_dismiss: Box<dyn FnMut()>,
    on_pick: Option<Box<dyn FnMut(&str)>>,
}

impl fmt::Debug for PickerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerOptions")
            .field("visible", &self.visible)
            .field("horizontal", &self.horizontal)
            .field("vertical", &self.vertical)
            .field("anchor", &self.anchor)
            .field("on_pick", &self.on_pick.is_some())
            .finish_non_exhaustive()
    }
}

impl PickerOptions {
    /// Visible picker that calls `on_dismiss` on Escape, outside click or
    /// focus loss.
    pub fn new(on_dismiss: impl FnMut() + 'static) -> Self {
        Self {
            visible: true,
            horizontal: HorizontalSide::default(),
            vertical: VerticalSide::default(),
            anchor: None,
            on_dismiss: Box::new(on_dismiss),
            on_pick: None,
        }
    }

    /// Set the pick callback.
    #[must_use]
    pub fn with_on_pick(mut self, on_pick: impl FnMut(&str) + 'static) -> Self {
        self.on_pick = Some(Box::new(on_pick));
        self
    }

    /// Set initial visibility.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the horizontal side.
    #[must_use]
    pub fn with_horizontal(mut self, side: HorizontalSide) -> Self {
        self.horizontal = side;
        self
    }

    /// Set the vertical side.
    #[must_use]
    pub fn with_vertical(mut self, side: VerticalSide) -> Self {
        self.vertical = side;
        self
    }

    /// Position relative to an anchor rectangle.
    #[must_use]
    pub fn with_anchor(mut self, anchor: AnchorRect) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Resolved placement.
    #[must_use]
    pub fn placement(&self) -> PopupPlacement {
        PopupPlacement::compute(self.horizontal, self.vertical, self.anchor)
    }

    pub(crate) fn dismiss(&mut self) {
        (self.on_dismiss)();
    }

    pub(crate) fn pick(&mut self, glyph: &str) {
        if let Some(on_pick) = self.on_pick.as_mut() {
            on_pick(glyph);
        }
    }
}
