//! Placement information derived from a bounds rectangle.

use serde::{Deserialize, Serialize};

use artkit_core::Rect;

/// The four edges of a rectangle plus its derived dimensions and center.
///
/// A convenience value for callers that position objects: computed once
/// from a bounds rectangle and then read field-by-field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl Placement {
    pub fn from_rect(rect: &Rect) -> Self {
        let rect = rect.normalized();
        Self {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
            width: rect.width(),
            height: rect.height(),
            center_x: rect.center_x(),
            center_y: rect.center_y(),
        }
    }
}

impl From<Rect> for Placement {
    fn from(rect: Rect) -> Self {
        Self::from_rect(&rect)
    }
}
