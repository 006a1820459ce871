//! Splitting a display string like `"200+"` into a number and its affix, and
//! putting an animated value back together.

use thiserror::Error;

/// Why a display string has no numeric target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no digits in {0:?}")]
    NoDigits(String),
    #[error("number in {0:?} does not fit in a u32")]
    Overflow(String),
}

/// Numeric target and literal affix derived from a display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTarget {
    /// Value of the first run of ASCII digits
    pub magnitude: u32,
    /// The input with every digit removed, rendered after the number
    pub affix: String,
}

impl ParsedTarget {
    /// Parse `display`. Only the first digit run counts toward the number;
    /// every digit is stripped from the affix.
    pub fn parse(display: &str) -> Result<Self, ParseError> {
        let start = display
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| ParseError::NoDigits(display.to_string()))?;
        let run = &display[start..];
        let end = run
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(run.len());

        let magnitude = run[..end]
            .parse::<u32>()
            .map_err(|_| ParseError::Overflow(display.to_string()))?;
        let affix = display.chars().filter(|c| !c.is_ascii_digit()).collect();

        Ok(Self { magnitude, affix })
    }

    /// Target as the float the drivers work in.
    pub fn target(&self) -> f64 {
        f64::from(self.magnitude)
    }

    /// Render `value` with this target's affix.
    pub fn display(&self, value: f64) -> String {
        format_value(value, &self.affix)
    }
}

impl std::str::FromStr for ParsedTarget {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Round `value` half away from zero and append `affix`.
pub fn format_value(value: f64, affix: &str) -> String {
    // `as` saturates and maps NaN to 0, and keeps -0.4 from printing as "-0"
    let rounded = value.round() as i64;
    format!("{}{}", rounded, affix)
}
