//! Alignment of a whole selection of bounds rectangles.

use artkit_core::Rect;

/// Edge or axis a selection is aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Top,
    Bottom,
    CenterHorizontal,
    CenterVertical,
}

/// Calculates the deltas (dx, dy) required to align each rectangle according
/// to the specified alignment.
///
/// The target edge or center is computed over the whole set (outermost edge,
/// or the center of the set's extent), then each rectangle gets a
/// `(index, dx, dy)` entry. Rectangles already in place are omitted.
pub fn alignment_deltas(rects: &[Rect], alignment: Alignment) -> Vec<(usize, f64, f64)> {
    if rects.is_empty() {
        return Vec::new();
    }

    let normalized: Vec<Rect> = rects.iter().map(|r| r.normalized()).collect();

    let target = match alignment {
        Alignment::Left => normalized
            .iter()
            .map(|r| r.left)
            .fold(f64::INFINITY, f64::min),
        Alignment::Right => normalized
            .iter()
            .map(|r| r.right)
            .fold(f64::NEG_INFINITY, f64::max),
        Alignment::CenterHorizontal => {
            let (min_x, max_x) = normalized
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), r| {
                    (min.min(r.left), max.max(r.right))
                });
            (min_x + max_x) / 2.0
        }
        Alignment::Top => normalized
            .iter()
            .map(|r| r.top)
            .fold(f64::NEG_INFINITY, f64::max),
        Alignment::Bottom => normalized
            .iter()
            .map(|r| r.bottom)
            .fold(f64::INFINITY, f64::min),
        Alignment::CenterVertical => {
            let (min_y, max_y) = normalized
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), r| {
                    (min.min(r.bottom), max.max(r.top))
                });
            (min_y + max_y) / 2.0
        }
    };

    let mut deltas = Vec::new();

    for (index, rect) in normalized.iter().enumerate() {
        let (dx, dy) = match alignment {
            Alignment::Left => (target - rect.left, 0.0),
            Alignment::Right => (target - rect.right, 0.0),
            Alignment::CenterHorizontal => (target - rect.center_x(), 0.0),
            Alignment::Top => (0.0, target - rect.top),
            Alignment::Bottom => (0.0, target - rect.bottom),
            Alignment::CenterVertical => (0.0, target - rect.center_y()),
        };

        if dx.abs() > f64::EPSILON || dy.abs() > f64::EPSILON {
            deltas.push((index, dx, dy));
        }
    }

    deltas
}
