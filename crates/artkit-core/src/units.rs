//! Document unit conversion utilities
//!
//! The host document model measures everything in points (72 per inch)
//! while users enter dimensions in millimeters or inches. Handles
//! conversion between the three, plus parsing and display formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Points per inch in the host document model.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Unit a length value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentUnits {
    /// Typographic points (the host's native unit)
    Points,
    /// Millimeters
    Millimeters,
    /// Inches
    Inches,
}

impl Default for DocumentUnits {
    fn default() -> Self {
        Self::Points
    }
}

impl fmt::Display for DocumentUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Points => write!(f, "Points"),
            Self::Millimeters => write!(f, "Millimeters"),
            Self::Inches => write!(f, "Inches"),
        }
    }
}

impl FromStr for DocumentUnits {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "points" | "pt" => Ok(Self::Points),
            "millimeters" | "mm" => Ok(Self::Millimeters),
            "inches" | "inch" | "in" => Ok(Self::Inches),
            _ => Err(format!("Unknown document unit: {}", s)),
        }
    }
}

/// Convert a value in the given units to points.
pub fn to_points(value: f64, units: DocumentUnits) -> f64 {
    match units {
        DocumentUnits::Points => value,
        DocumentUnits::Millimeters => value / MM_PER_INCH * POINTS_PER_INCH,
        DocumentUnits::Inches => value * POINTS_PER_INCH,
    }
}

/// Convert a value in points to the given units.
pub fn from_points(points: f64, units: DocumentUnits) -> f64 {
    match units {
        DocumentUnits::Points => points,
        DocumentUnits::Millimeters => points / POINTS_PER_INCH * MM_PER_INCH,
        DocumentUnits::Inches => points / POINTS_PER_INCH,
    }
}

/// Format a length in points for display in the given units
///
/// * `points` - Value in points
/// * `units` - Target display units
pub fn format_length(points: f64, units: DocumentUnits) -> String {
    format!("{:.3}", from_points(points, units))
}

/// Parse a length string to points
///
/// * `input` - String to parse
/// * `units` - Assumed units of the input
pub fn parse_length(input: &str, units: DocumentUnits) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    let value = input.parse::<f64>().map_err(|e| e.to_string())?;
    Ok(to_points(value, units))
}

/// Get the unit label for the given units ("pt", "mm" or "in")
pub fn unit_label(units: DocumentUnits) -> &'static str {
    match units {
        DocumentUnits::Points => "pt",
        DocumentUnits::Millimeters => "mm",
        DocumentUnits::Inches => "in",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_identity() {
        assert_eq!(to_points(10.5, DocumentUnits::Points), 10.5);
        assert_eq!(from_points(10.5, DocumentUnits::Points), 10.5);
    }

    #[test]
    fn test_inch_conversion() {
        assert_eq!(to_points(1.0, DocumentUnits::Inches), 72.0);
        assert_eq!(from_points(36.0, DocumentUnits::Inches), 0.5);
    }

    #[test]
    fn test_mm_conversion() {
        // 25.4 mm = 1 inch = 72 pt
        assert!((to_points(25.4, DocumentUnits::Millimeters) - 72.0).abs() < 1e-9);
        assert!((from_points(72.0, DocumentUnits::Millimeters) - 25.4).abs() < 1e-9);
    }

    #[test]
    fn test_mm_round_trip() {
        let mm = 137.25;
        let back = from_points(to_points(mm, DocumentUnits::Millimeters), DocumentUnits::Millimeters);
        assert!((back - mm).abs() < 1e-9);
    }

    #[test]
    fn test_parse_and_format() {
        assert_eq!(parse_length("1", DocumentUnits::Inches).unwrap(), 72.0);
        assert_eq!(parse_length("  10.5  ", DocumentUnits::Points).unwrap(), 10.5);
        assert_eq!(parse_length("", DocumentUnits::Millimeters).unwrap(), 0.0);
        assert_eq!(format_length(72.0, DocumentUnits::Inches), "1.000");
        assert_eq!(format_length(10.5, DocumentUnits::Points), "10.500");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_length("abc", DocumentUnits::Points).is_err());
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("pt".parse::<DocumentUnits>().unwrap(), DocumentUnits::Points);
        assert_eq!("mm".parse::<DocumentUnits>().unwrap(), DocumentUnits::Millimeters);
        assert_eq!("in".parse::<DocumentUnits>().unwrap(), DocumentUnits::Inches);
        assert!("furlong".parse::<DocumentUnits>().is_err());
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(unit_label(DocumentUnits::Points), "pt");
        assert_eq!(unit_label(DocumentUnits::Millimeters), "mm");
        assert_eq!(unit_label(DocumentUnits::Inches), "in");
    }
}
