//! Unit conversion utilities
//!
//! All lengths are stored in metres. User-facing values may be entered and
//! displayed in metres, feet or inches; imperial input accepts mixed
//! fractions such as `5 1/2`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{METRES_PER_FOOT, METRES_PER_INCH};
use crate::error::ValidationError;

/// Length unit accepted at the input boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Metres (canonical)
    #[serde(rename = "m")]
    Metres,
    /// International feet
    #[serde(rename = "ft")]
    Feet,
    /// International inches
    #[serde(rename = "in")]
    Inches,
}

impl LengthUnit {
    /// All units in the order the unit pickers list them.
    pub const ALL: [LengthUnit; 3] = [LengthUnit::Metres, LengthUnit::Feet, LengthUnit::Inches];

    /// Metres per one of this unit.
    pub fn metres_per_unit(self) -> f64 {
        match self {
            Self::Metres => 1.0,
            Self::Feet => METRES_PER_FOOT,
            Self::Inches => METRES_PER_INCH,
        }
    }

    /// Short label ("m", "ft" or "in").
    pub fn label(self) -> &'static str {
        match self {
            Self::Metres => "m",
            Self::Feet => "ft",
            Self::Inches => "in",
        }
    }

    pub fn is_imperial(self) -> bool {
        !matches!(self, Self::Metres)
    }
}

impl Default for LengthUnit {
    fn default() -> Self {
        Self::Metres
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "metre" | "metres" | "meter" | "meters" => Ok(Self::Metres),
            "ft" | "foot" | "feet" => Ok(Self::Feet),
            "in" | "inch" | "inches" => Ok(Self::Inches),
            _ => Err(format!("Unknown length unit: {}", s)),
        }
    }
}

/// Convert `value` expressed in `unit` to metres.
pub fn to_canonical(value: f64, unit: LengthUnit) -> f64 {
    value * unit.metres_per_unit()
}

/// Convert `value_m` (metres) to `unit`.
pub fn from_canonical(value_m: f64, unit: LengthUnit) -> f64 {
    value_m / unit.metres_per_unit()
}

/// Screen pixels per metre at the given zoom.
///
/// * `zoom` - View zoom factor (1.0 = 100%)
/// * `base_pixels_per_metre` - Pixel density at 100% zoom
pub fn pixels_per_unit(zoom: f64, base_pixels_per_metre: f64) -> f64 {
    zoom * base_pixels_per_metre
}

/// Format a length for display, e.g. `2.00 m` or `6.56 ft`.
///
/// * `value_m` - Value in metres
/// * `unit` - Target display unit
pub fn format_dimension(value_m: f64, unit: LengthUnit) -> String {
    format!("{:.2} {}", from_canonical(value_m, unit), unit.label())
}

/// Parse a user-entered length into metres.
///
/// * `input` - Text to parse
/// * `unit` - Unit the text is expressed in
pub fn parse_length(input: &str, unit: LengthUnit) -> Result<f64, ValidationError> {
    let input = input.trim();
    let unparseable = |reason: &str| ValidationError::Unparseable {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    if input.is_empty() {
        return Err(unparseable("empty input"));
    }

    let value = if unit.is_imperial() && input.contains('/') {
        let mut total = 0.0;
        let mut negative = false;
        for (index, part) in input.split_whitespace().enumerate() {
            let part = if index == 0 {
                if let Some(rest) = part.strip_prefix('-') {
                    negative = true;
                    rest
                } else {
                    part
                }
            } else {
                part
            };

            if part.contains('/') {
                let frac_parts: Vec<&str> = part.split('/').collect();
                if frac_parts.len() != 2 {
                    return Err(unparseable("invalid fraction format"));
                }
                let num = frac_parts[0]
                    .parse::<f64>()
                    .map_err(|_| unparseable("invalid numerator"))?;
                let den = frac_parts[1]
                    .parse::<f64>()
                    .map_err(|_| unparseable("invalid denominator"))?;
                if den == 0.0 {
                    return Err(unparseable("division by zero"));
                }
                total += num / den;
            } else {
                total += part
                    .parse::<f64>()
                    .map_err(|_| unparseable("invalid number part"))?;
            }
        }
        if negative {
            -total
        } else {
            total
        }
    } else {
        input
            .parse::<f64>()
            .map_err(|e| unparseable(&e.to_string()))?
    };

    if !value.is_finite() {
        return Err(unparseable("not a finite number"));
    }

    Ok(to_canonical(value, unit))
}
