//! Three-channel attribute values and the ranges creatures declare for them.
//!
//! Ranges are stored as text exactly as content declares them (`"120-200"`)
//! and parsed when a hatch filter needs them. A range that does not parse
//! disqualifies only its own creature.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{ErrorSeverity, GameError};

/// Target value carried by an elixir, one entry per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorValue(pub [u8; 3]);

impl ColorValue {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn channels(&self) -> [u8; 3] {
        self.0
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "({r}, {g}, {b})")
    }
}

/// Errors raised while parsing a stored channel range.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RangeParseError {
    #[error("channel {channel}: '{raw}' is not a number or 'low-high' range")]
    Malformed { channel: usize, raw: String },

    #[error("channel {channel}: lower bound {low} exceeds upper bound {high}")]
    Inverted { channel: usize, low: u8, high: u8 },
}

impl GameError for RangeParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => "RANGE_MALFORMED",
            Self::Inverted { .. } => "RANGE_INVERTED",
        }
    }
}

/// Per-channel inclusive ranges as stored in content (`["0-80", "40-120", "200"]`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AttributeRanges([String; 3]);

impl AttributeRanges {
    pub fn new<S: Into<String>>(channels: [S; 3]) -> Self {
        Self(channels.map(Into::into))
    }

    /// Ranges accepting every channel value.
    pub fn full() -> Self {
        Self::new(["0-255", "0-255", "0-255"])
    }

    pub fn raw(&self) -> &[String; 3] {
        &self.0
    }

    /// Parses all three channels.
    pub fn parse(&self) -> Result<[RangeInclusive<u8>; 3], RangeParseError> {
        let [r, g, b] = &self.0;
        Ok([
            parse_channel(0, r)?,
            parse_channel(1, g)?,
            parse_channel(2, b)?,
        ])
    }

    /// True if every channel of `value` falls inside its range.
    pub fn contains(&self, value: ColorValue) -> Result<bool, RangeParseError> {
        let ranges = self.parse()?;
        Ok(ranges
            .iter()
            .zip(value.channels())
            .all(|(range, channel)| range.contains(&channel)))
    }
}

fn parse_channel(channel: usize, raw: &str) -> Result<RangeInclusive<u8>, RangeParseError> {
    let malformed = || RangeParseError::Malformed {
        channel,
        raw: raw.to_string(),
    };
    let bound = |text: &str| text.trim().parse::<u8>().map_err(|_| malformed());

    let (low, high) = match raw.split_once('-') {
        Some((low, high)) => (bound(low)?, bound(high)?),
        None => {
            let value = bound(raw)?;
            (value, value)
        }
    };

    if low > high {
        return Err(RangeParseError::Inverted { channel, low, high });
    }
    Ok(low..=high)
}
