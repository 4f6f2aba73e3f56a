use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, instrument};

use crate::error::GenerateError;
use crate::range::{sort_ranges, Range};

lazy_static! {
    static ref WIDE_HEADER: Regex =
        Regex::new(r"\A# EastAsianWidth-(\d+\.\d+\.\d+)\.txt").unwrap();
    static ref WIDE_ENTRY: Regex =
        Regex::new(r"(?m)^([0-9A-F]{4,})(?:\.\.([0-9A-F]{4,}))?[ \t]*;[ \t]*[WF]").unwrap();
    static ref ZERO_HEADER: Regex =
        Regex::new(r"\A# DerivedGeneralCategory-(\d+\.\d+\.\d+)\.txt").unwrap();
    static ref ZERO_ENTRY: Regex =
        Regex::new(r"(?m)^([0-9A-F]{4,})(?:\.\.([0-9A-F]{4,}))?[ \t]*;[ \t]*(?:Me|Mn)").unwrap();
}

/// One of the generated width tables.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, clap::ValueEnum)]
pub enum Table {
    /// East Asian Wide and Fullwidth characters
    Wide,
    /// Enclosing and nonspacing marks
    Zero,
}

impl Table {
    pub const ALL: [Table; 2] = [Table::Wide, Table::Zero];

    pub fn name(&self) -> &'static str {
        match self {
            Table::Wide => "wide",
            Table::Zero => "zero",
        }
    }

    /// Path of the UCD document relative to the database root.
    pub fn source_path(&self) -> &'static str {
        match self {
            Table::Wide => "EastAsianWidth.txt",
            Table::Zero => "extracted/DerivedGeneralCategory.txt",
        }
    }

    pub fn file_stem(&self) -> &'static str {
        match self {
            Table::Wide => "wcswidth_table_wide",
            Table::Zero => "wcswidth_table_zero",
        }
    }

    fn header(&self) -> &'static Regex {
        match self {
            Table::Wide => &WIDE_HEADER,
            Table::Zero => &ZERO_HEADER,
        }
    }

    fn entry(&self) -> &'static Regex {
        match self {
            Table::Wide => &WIDE_ENTRY,
            Table::Zero => &ZERO_ENTRY,
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ExtractedTable {
    pub version: String,
    pub ranges: Vec<Range>,
}

/// Reads the Unicode version from the document header and collects every
/// entry of the table's categories, sorted by first codepoint.
#[instrument(skip(content), level = "debug")]
pub fn extract(table: Table, content: &str) -> Result<ExtractedTable, GenerateError> {
    let version = table
        .header()
        .captures(content)
        .map(|cap| cap[1].to_owned())
        .ok_or(GenerateError::VersionNotFound {
            file: table.source_path(),
        })?;

    let mut ranges = table
        .entry()
        .captures_iter(content)
        .map(|cap| {
            Range::from_hex(&cap[1], cap.get(2).map(|end| end.as_str())).map_err(|source| {
                GenerateError::InvalidRange {
                    line: cap[0].to_owned(),
                    source,
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if ranges.is_empty() {
        return Err(GenerateError::NoMatches {
            table: table.name(),
        });
    }
    sort_ranges(&mut ranges);
    debug!("Found {} ranges for Unicode {}", ranges.len(), version);

    Ok(ExtractedTable { version, ranges })
}
