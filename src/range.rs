use std::num::ParseIntError;

use serde::Serialize;

// Inclusive codepoint range
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize)]
#[serde(into = "(u32, u32)")]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

#[derive(thiserror::Error, Debug)]
pub enum RangeError {
    #[error("'{0}' is not a valid codepoint")]
    InvalidCodepoint(String, #[source] ParseIntError),
    #[error("Range end {end:04X} is below its start {start:04X}")]
    Reversed { start: u32, end: u32 },
}

impl Range {
    pub fn new(start: u32, end: u32) -> Result<Self, RangeError> {
        if end < start {
            return Err(RangeError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds a range from the hex boundaries of a UCD entry. A missing end
    /// means the entry covers a single codepoint.
    pub fn from_hex(start: &str, end: Option<&str>) -> Result<Self, RangeError> {
        let start = parse_codepoint(start)?;
        let end = end.map(parse_codepoint).transpose()?.unwrap_or(start);
        Self::new(start, end)
    }
}

impl From<Range> for (u32, u32) {
    fn from(range: Range) -> Self {
        (range.start, range.end)
    }
}

fn parse_codepoint(hex: &str) -> Result<u32, RangeError> {
    u32::from_str_radix(hex, 16).map_err(|err| RangeError::InvalidCodepoint(hex.to_owned(), err))
}

/// Orders ranges by their first codepoint. The sort is stable, so ranges
/// sharing a start keep the order they had in the source document.
pub fn sort_ranges(ranges: &mut [Range]) {
    ranges.sort_by_key(|range| range.start);
}
