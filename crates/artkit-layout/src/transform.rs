//! Scale and move transforms between a source and a target rectangle.
//!
//! A transform is computed from two measured bounds and then applied by the
//! caller (to host objects, or to rectangles in tests via `apply`). Scaling
//! is always anchored at the target's center; translation moves the target
//! so a named reference point or edge coincides with the source's.

use serde::{Deserialize, Serialize};

use artkit_core::{Error, Rect, Result};

/// Which dimension of the source the scale is referenced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleAxis {
    /// Scale both axes by the width ratio (aspect preserved).
    Width,
    /// Scale both axes by the height ratio (aspect preserved).
    Height,
    /// Independent width and height ratios (aspect not preserved).
    Both,
}

/// A scale factor pair plus the companion stroke scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTransform {
    pub sx: f64,
    pub sy: f64,
    /// Factor for proportionally adjusting stroke thickness: the axis
    /// ratio for single-axis modes, the average of both ratios for
    /// [`ScaleAxis::Both`].
    pub stroke_scale: f64,
}

impl ScaleTransform {
    /// Computes the scale that makes `target`'s selected dimension(s) match
    /// `source`'s, anchored at `target`'s center.
    ///
    /// A zero-size reference dimension on `target` is an error; `Infinity`
    /// is never propagated into the document.
    pub fn between(source: &Rect, target: &Rect, axis: ScaleAxis) -> Result<Self> {
        let source = source.normalized();
        let target = target.normalized();
        match axis {
            ScaleAxis::Width => {
                let ratio = checked_ratio(source.width(), target.width(), "width")?;
                Ok(Self {
                    sx: ratio,
                    sy: ratio,
                    stroke_scale: ratio,
                })
            }
            ScaleAxis::Height => {
                let ratio = checked_ratio(source.height(), target.height(), "height")?;
                Ok(Self {
                    sx: ratio,
                    sy: ratio,
                    stroke_scale: ratio,
                })
            }
            ScaleAxis::Both => {
                let sx = checked_ratio(source.width(), target.width(), "width")?;
                let sy = checked_ratio(source.height(), target.height(), "height")?;
                Ok(Self {
                    sx,
                    sy,
                    stroke_scale: (sx + sy) / 2.0,
                })
            }
        }
    }

    /// Applies the scale to a rectangle about its own center.
    pub fn apply(&self, rect: &Rect) -> Rect {
        rect.normalized().scaled_about_center(self.sx, self.sy)
    }
}

fn checked_ratio(source_dim: f64, target_dim: f64, axis: &str) -> Result<f64> {
    if target_dim == 0.0 {
        return Err(Error::DivisionByZero {
            axis: axis.to_string(),
        });
    }
    Ok(source_dim / target_dim)
}

/// A reference point or edge used when moving one rectangle onto another.
///
/// Point anchors move both axes; edge and axis anchors move only the
/// relevant one, for alignment-only operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    TopEdge,
    BottomEdge,
    LeftEdge,
    RightEdge,
    HorizontalCenter,
    VerticalCenter,
}

/// A translation delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub dx: f64,
    pub dy: f64,
}

impl Translation {
    /// Computes the move that brings `target`'s anchor point (or edge) onto
    /// `source`'s.
    pub fn between(source: &Rect, target: &Rect, anchor: Anchor) -> Self {
        let s = source.normalized();
        let t = target.normalized();
        let (dx, dy) = match anchor {
            Anchor::TopLeft => (s.left - t.left, s.top - t.top),
            Anchor::TopCenter => (s.center_x() - t.center_x(), s.top - t.top),
            Anchor::TopRight => (s.right - t.right, s.top - t.top),
            Anchor::CenterLeft => (s.left - t.left, s.center_y() - t.center_y()),
            Anchor::Center => (s.center_x() - t.center_x(), s.center_y() - t.center_y()),
            Anchor::CenterRight => (s.right - t.right, s.center_y() - t.center_y()),
            Anchor::BottomLeft => (s.left - t.left, s.bottom - t.bottom),
            Anchor::BottomCenter => (s.center_x() - t.center_x(), s.bottom - t.bottom),
            Anchor::BottomRight => (s.right - t.right, s.bottom - t.bottom),
            Anchor::TopEdge => (0.0, s.top - t.top),
            Anchor::BottomEdge => (0.0, s.bottom - t.bottom),
            Anchor::LeftEdge => (s.left - t.left, 0.0),
            Anchor::RightEdge => (s.right - t.right, 0.0),
            Anchor::HorizontalCenter => (s.center_x() - t.center_x(), 0.0),
            Anchor::VerticalCenter => (0.0, s.center_y() - t.center_y()),
        };
        Self { dx, dy }
    }

    /// Applies the translation to a rectangle.
    pub fn apply(&self, rect: &Rect) -> Rect {
        rect.translated(self.dx, self.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_width_reference_preserves_aspect() {
        let source = Rect::new(0.0, 10.0, 20.0, 0.0); // 20 x 10
        let target = Rect::new(0.0, 8.0, 5.0, 0.0); // 5 x 8
        let scale = ScaleTransform::between(&source, &target, ScaleAxis::Width).unwrap();
        assert_eq!(scale.sx, 4.0);
        assert_eq!(scale.sy, 4.0);
        assert_eq!(scale.stroke_scale, 4.0);
    }

    #[test]
    fn test_scale_height_reference() {
        let source = Rect::new(0.0, 10.0, 20.0, 0.0);
        let target = Rect::new(0.0, 5.0, 8.0, 0.0);
        let scale = ScaleTransform::between(&source, &target, ScaleAxis::Height).unwrap();
        assert_eq!(scale.sx, 2.0);
        assert_eq!(scale.sy, 2.0);
    }

    #[test]
    fn test_scale_both_is_independent() {
        let source = Rect::new(0.0, 10.0, 20.0, 0.0); // 20 x 10
        let target = Rect::new(0.0, 5.0, 10.0, 0.0); // 10 x 5
        let scale = ScaleTransform::between(&source, &target, ScaleAxis::Both).unwrap();
        assert_eq!(scale.sx, 2.0);
        assert_eq!(scale.sy, 2.0);
        assert_eq!(scale.stroke_scale, 2.0);

        let squat = Rect::new(0.0, 2.0, 10.0, 0.0); // 10 x 2
        let scale = ScaleTransform::between(&source, &squat, ScaleAxis::Both).unwrap();
        assert_eq!(scale.sx, 2.0);
        assert_eq!(scale.sy, 5.0);
        assert_eq!(scale.stroke_scale, 3.5);
    }

    #[test]
    fn test_scale_zero_reference_dimension_errors() {
        let source = Rect::new(0.0, 10.0, 20.0, 0.0);
        let zero_width = Rect::new(3.0, 5.0, 3.0, 0.0);
        match ScaleTransform::between(&source, &zero_width, ScaleAxis::Width) {
            Err(Error::DivisionByZero { axis }) => assert_eq!(axis, "width"),
            other => panic!("expected DivisionByZero, got {:?}", other),
        }

        let zero_height = Rect::new(0.0, 5.0, 3.0, 5.0);
        assert!(ScaleTransform::between(&source, &zero_height, ScaleAxis::Both).is_err());
    }

    #[test]
    fn test_scale_apply_keeps_center() {
        let source = Rect::new(0.0, 30.0, 40.0, 0.0);
        let target = Rect::new(10.0, 20.0, 20.0, 10.0);
        let scale = ScaleTransform::between(&source, &target, ScaleAxis::Both).unwrap();
        let scaled = scale.apply(&target);
        assert_eq!(scaled.center(), target.center());
        assert!((scaled.width() - source.width()).abs() < 1e-9);
        assert!((scaled.height() - source.height()).abs() < 1e-9);
    }

    #[test]
    fn test_point_anchor_moves_both_axes() {
        let source = Rect::new(0.0, 10.0, 10.0, 0.0);
        let target = Rect::new(100.0, 250.0, 120.0, 200.0);

        let m = Translation::between(&source, &target, Anchor::TopLeft);
        let moved = m.apply(&target);
        assert_eq!(moved.left, source.left);
        assert_eq!(moved.top, source.top);

        let m = Translation::between(&source, &target, Anchor::BottomRight);
        let moved = m.apply(&target);
        assert_eq!(moved.right, source.right);
        assert_eq!(moved.bottom, source.bottom);
    }

    #[test]
    fn test_center_anchor_coincides_centers() {
        let source = Rect::new(0.0, 10.0, 10.0, 0.0);
        let target = Rect::new(40.0, 90.0, 70.0, 30.0);
        let moved = Translation::between(&source, &target, Anchor::Center).apply(&target);
        assert!((moved.center_x() - source.center_x()).abs() < 1e-9);
        assert!((moved.center_y() - source.center_y()).abs() < 1e-9);
        // Size is untouched by a move.
        assert_eq!(moved.width(), target.width());
        assert_eq!(moved.height(), target.height());
    }

    #[test]
    fn test_edge_anchor_moves_single_axis() {
        let source = Rect::new(0.0, 10.0, 10.0, 0.0);
        let target = Rect::new(100.0, 250.0, 120.0, 200.0);

        let m = Translation::between(&source, &target, Anchor::LeftEdge);
        assert_eq!(m.dy, 0.0);
        let moved = m.apply(&target);
        assert_eq!(moved.left, source.left);
        assert_eq!(moved.top, target.top);

        let m = Translation::between(&source, &target, Anchor::TopEdge);
        assert_eq!(m.dx, 0.0);
        let moved = m.apply(&target);
        assert_eq!(moved.top, source.top);
        assert_eq!(moved.left, target.left);
    }

    #[test]
    fn test_axis_center_anchors() {
        let source = Rect::new(0.0, 10.0, 10.0, 0.0);
        let target = Rect::new(100.0, 250.0, 120.0, 200.0);

        let m = Translation::between(&source, &target, Anchor::HorizontalCenter);
        assert_eq!(m.dy, 0.0);
        assert_eq!(m.apply(&target).center_x(), source.center_x());

        let m = Translation::between(&source, &target, Anchor::VerticalCenter);
        assert_eq!(m.dx, 0.0);
        assert_eq!(m.apply(&target).center_y(), source.center_y());
    }
}
