use std::time::Duration;

use anyhow::Result;
use camino::Utf8PathBuf as PathBuf;
use clap::Parser;
use wcswidth_gen::source::http::DEFAULT_BASE_URL;
use wcswidth_gen::{Format, GeneratorConfig, Table};

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Directory to write the generated tables into
    #[clap(env, value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Base URL of the Unicode Character Database
    #[clap(long, env = "UCD_BASE_URL", value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Read the UCD files from a local directory instead of downloading them
    #[clap(long, env = "UCD_DIR", value_name = "DIR", conflicts_with = "base_url")]
    pub ucd_dir: Option<PathBuf>,

    /// Language of the generated files
    #[clap(long, env = "OUTPUT_FORMAT", value_enum, default_value = "php")]
    pub format: Format,

    /// Generate a single table only
    #[clap(long, env = "ONLY_TABLE", value_enum)]
    pub only: Option<Table>,

    #[clap(long, env, hide(true), value_parser = parse_seconds, default_value = "30")]
    pub request_timeout_sec: Duration,

    #[clap(long, env, hide(true))]
    pub log_span_durations: bool,
}

impl Args {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            out_dir: self.out_dir.clone(),
            format: self.format,
            tables: match self.only {
                Some(table) => vec![table],
                None => Table::ALL.to_vec(),
            },
        }
    }
}

fn parse_seconds(s: &str) -> Result<Duration> {
    Ok(Duration::from_secs(s.parse()?))
}
