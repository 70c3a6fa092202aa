#![forbid(unsafe_code)]

//! Popup placement relative to its parent or an anchor rectangle.
//!
//! Without an anchor the popup is attached to an edge of its parent:
//!
//! | Side | Offset |
//! |------|--------|
//! | left | `right: 0` |
//! | right | `left: 0` |
//! | top | `bottom: 100%` |
//! | bottom | `top: 100%` |
//!
//! With an anchor it uses fixed coordinates derived from the anchor's
//! bounding rectangle, so it escapes clipping ancestors.

use std::fmt;

/// Popup width in pixels.
pub const POPUP_WIDTH: f32 = 320.0;
/// Popup height in pixels.
pub const POPUP_HEIGHT: f32 = 420.0;

/// Horizontal side the popup opens towards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HorizontalSide {
    #[default]
    Left,
    Right,
}

/// Vertical side the popup opens towards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VerticalSide {
    #[default]
    Top,
    Bottom,
}

/// Anchor bounding rectangle in viewport pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnchorRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl AnchorRect {
    /// Rectangle from its four edges.
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// CSS-style length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// Resolved popup position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupPlacement {
    /// Fixed to the viewport instead of the parent.
    pub fixed: bool,
    pub left: Option<Length>,
    pub right: Option<Length>,
    pub top: Option<Length>,
    pub bottom: Option<Length>,
    pub width: f32,
    pub height: f32,
}

impl PopupPlacement {
    /// Compute the placement for the given sides and optional anchor.
    #[must_use]
    pub fn compute(
        horizontal: HorizontalSide,
        vertical: VerticalSide,
        anchor: Option<AnchorRect>,
    ) -> Self {
        let mut placement = Self {
            fixed: anchor.is_some(),
            left: None,
            right: None,
            top: None,
            bottom: None,
            width: POPUP_WIDTH,
            height: POPUP_HEIGHT,
        };

        match anchor {
            Some(rect) => {
                placement.left = Some(Length::Px(match horizontal {
                    HorizontalSide::Left => rect.right - POPUP_WIDTH,
                    HorizontalSide::Right => rect.left,
                }));
                placement.top = Some(Length::Px(match vertical {
                    VerticalSide::Top => rect.top - POPUP_HEIGHT,
                    VerticalSide::Bottom => rect.bottom,
                }));
            }
            None => {
                match horizontal {
                    HorizontalSide::Left => placement.right = Some(Length::Px(0.0)),
                    HorizontalSide::Right => placement.left = Some(Length::Px(0.0)),
                }
                match vertical {
                    VerticalSide::Top => placement.bottom = Some(Length::Percent(100.0)),
                    VerticalSide::Bottom => placement.top = Some(Length::Percent(100.0)),
                }
            }
        }
        placement
    }
}
