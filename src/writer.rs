use camino::{Utf8Path as Path, Utf8PathBuf as PathBuf};
use serde::Serialize;
use tracing::instrument;

use crate::error::GenerateError;
use crate::range::Range;

/// Language of the generated data file.
#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Hash, clap::ValueEnum)]
pub enum Format {
    /// PHP array returned from the file, as used by the Symfony String component
    #[default]
    Php,
    /// Rust static slice of `(start, end)` tuples
    Rust,
    /// JSON document with the version, date and ranges
    Json,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Php => "php",
            Format::Rust => "rs",
            Format::Json => "json",
        }
    }
}

#[derive(Serialize)]
struct JsonTable<'a> {
    unicode_version: &'a str,
    date: &'a str,
    ranges: &'a [Range],
}

pub fn render(
    format: Format,
    version: &str,
    date: &str,
    ranges: &[Range],
) -> Result<String, GenerateError> {
    let content = match format {
        Format::Php => render_php(version, date, ranges),
        Format::Rust => render_rust(version, date, ranges),
        Format::Json => {
            let table = JsonTable {
                unicode_version: version,
                date,
                ranges,
            };
            serde_json::to_string_pretty(&table)? + "\n"
        }
    };
    Ok(content)
}

fn render_php(version: &str, date: &str, ranges: &[Range]) -> String {
    let mut out = format!(
        "<?php

/*
 * This file has been auto-generated by the Symfony String Component for internal use.
 *
 * Unicode version: {version}
 * Date: {date}
 */

return ["
    );
    if ranges.is_empty() {
        out.push_str("];\n");
        return out;
    }
    out.push('\n');
    out.extend(ranges.iter().map(|range| {
        format!(
            "    [\n        {},\n        {},\n    ],\n",
            range.start, range.end
        )
    }));
    out.push_str("];\n");
    out
}

fn render_rust(version: &str, date: &str, ranges: &[Range]) -> String {
    let mut out = format!(
        "// This file has been auto-generated by wcswidth-gen. Do not edit.
//
// Unicode version: {version}
// Date: {date}

pub static TABLE: &[(u32, u32)] = &[
"
    );
    out.extend(
        ranges
            .iter()
            .map(|range| format!("    (0x{:04X}, 0x{:04X}),\n", range.start, range.end)),
    );
    out.push_str("];\n");
    out
}

/// Writes `content` to `out_dir/file_name`. The directory must exist.
#[instrument(err, skip(content), level = "debug")]
pub async fn write_table(
    out_dir: &Path,
    file_name: &str,
    content: &str,
) -> Result<PathBuf, GenerateError> {
    let path = out_dir.join(file_name);
    match tokio::fs::write(&path, content).await {
        Ok(()) => Ok(path),
        Err(source) => Err(GenerateError::Write { path, source }),
    }
}
