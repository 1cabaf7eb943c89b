//! Compact text form of 3-vectors stored in ragdoll definitions.
//!
//! Vectors are written as `"(x, y, z)"` with each component rounded to
//! [`SIGNIFICANT_DIGITS`] significant digits, e.g. `"(0.1235, -2, 1.5E+04)"`. Reading strips
//! whitespace and parentheses and splits on commas, so hand-written text such as `"1,2,3"` is
//! accepted too.

use bevy::{math::Vec3, reflect::Reflect};
use serde::{Deserialize, Serialize};

use crate::core::errors::VectorParseError;

pub const SIGNIFICANT_DIGITS: usize = 4;

#[derive(Reflect, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VectorText(String);

impl VectorText {
    pub fn from_vec3(value: Vec3) -> Self {
        Self(format!(
            "({}, {}, {})",
            format_significant(value.x),
            format_significant(value.y),
            format_significant(value.z)
        ))
    }

    /// Wraps text without checking it. Use [`VectorText::parse`] to validate.
    pub fn from_raw(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parse(&self) -> Result<Vec3, VectorParseError> {
        parse_vec3(&self.0)
    }
}

impl From<Vec3> for VectorText {
    fn from(value: Vec3) -> Self {
        Self::from_vec3(value)
    }
}

impl std::fmt::Display for VectorText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn parse_vec3(text: &str) -> Result<Vec3, VectorParseError> {
    let stripped: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
        .collect();

    let parts: Vec<&str> = stripped.split(',').collect();
    if parts.len() != 3 {
        return Err(VectorParseError::ComponentCount {
            text: text.to_string(),
            found: parts.len(),
        });
    }

    let mut components = [0.; 3];
    for (component, part) in components.iter_mut().zip(&parts) {
        *component = part
            .parse::<f32>()
            .map_err(|_| VectorParseError::InvalidComponent {
                text: text.to_string(),
                component: part.to_string(),
            })?;
    }

    Ok(Vec3::from_array(components))
}

/// General numeric format with [`SIGNIFICANT_DIGITS`] significant digits: trailing zeros are
/// dropped, and scientific notation (`1.235E+04`) is used when the decimal exponent is below -4
/// or not smaller than the digit count.
pub fn format_significant(value: f32) -> String {
    if value == 0. {
        return "0".into();
    }
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0. { "Infinity" } else { "-Infinity" }.into();
    }

    // Rounding first means 9.9996 is treated as 1.000e1, not 9.9996e0
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}E{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
