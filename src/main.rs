// wcswidth-gen, generator of the Unicode width tables.
// Copyright (C) 2024 Subsquid Labs GmbH

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use wcswidth_gen::source::{HttpSource, LocalSource};
use wcswidth_gen::Generator;

use crate::cli::Args;

mod cli;

fn setup_tracing(args: &Args) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::builder().parse_lossy(
        std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).unwrap_or("info".to_string()),
    );
    let fmt = tracing_subscriber::fmt::layer()
        .compact()
        .with_span_events(if args.log_span_durations {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        })
        .with_filter(env_filter);
    tracing_subscriber::registry().with(fmt).try_init()?;
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    setup_tracing(&args)?;
    let config = args.generator_config();

    let generated = match &args.ucd_dir {
        Some(dir) => {
            tracing::info!("Reading UCD files from '{}'", dir);
            Generator::new(LocalSource::new(dir.clone()), config)
                .generate()
                .await?
        }
        None => {
            let source = HttpSource::with_timeout(&args.base_url, args.request_timeout_sec)
                .context("Couldn't create HTTP client")?;
            Generator::new(source, config).generate().await?
        }
    };

    tracing::info!("Generated {} tables", generated.len());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(args))
}
