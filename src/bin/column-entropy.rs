//! Demo entry point: Shannon entropy of one column of a local file or a bundled dataset.
//!
//! Without a subcommand the binary does nothing and exits successfully.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use entropy_stats::datasets::{read_table, DataFormat, DatasetSpec, FileCache, TabularSource};
use entropy_stats::tabular::{ColumnEntropyExt, EntropyConfig, NullPolicy, DEFAULT_BUCKETS};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "column-entropy", version, about = "Shannon entropy of a table column")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Measure a column of a local CSV or JSON file
    File {
        path: PathBuf,
        column: String,
        /// File format; guessed from the extension when omitted
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        #[command(flatten)]
        measure: MeasureArgs,
    },

    /// Measure a column of a bundled dataset, downloading it on first use
    Dataset {
        #[arg(value_enum)]
        name: DatasetArg,
        column: String,
        /// Directory holding downloaded datasets
        #[arg(long, env = "ENTROPY_DATA_DIR", default_value = ".")]
        data_dir: PathBuf,
        #[command(flatten)]
        measure: MeasureArgs,
    },
}

#[derive(Args, Debug)]
struct MeasureArgs {
    /// Discretize numeric values into equal-width buckets first
    #[arg(long, short = 'b')]
    bucketize: bool,

    /// Number of buckets used with --bucketize
    #[arg(long, default_value_t = DEFAULT_BUCKETS)]
    buckets: usize,

    /// Count nulls as their own category instead of skipping them
    #[arg(long)]
    count_nulls: bool,
}

impl MeasureArgs {
    fn config(&self) -> EntropyConfig {
        let nulls = if self.count_nulls {
            NullPolicy::AsCategory
        } else {
            NullPolicy::Skip
        };
        EntropyConfig::from_flags(self.bucketize, self.buckets).with_nulls(nulls)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for DataFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => DataFormat::Csv,
            FormatArg::Json => DataFormat::Json,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DatasetArg {
    /// HDB resale flat prices
    Hdb,
    /// 2016 NYC yellow taxi trips
    Taxi,
}

impl DatasetArg {
    fn spec(self) -> DatasetSpec {
        match self {
            Self::Hdb => DatasetSpec::hdb_resale(),
            Self::Taxi => DatasetSpec::nyc_taxi_2016(),
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        return Ok(());
    };

    let (df, column, config) = match command {
        Command::File { path, column, format, measure } => {
            let format = match format {
                Some(f) => f.into(),
                None => DataFormat::from_path(&path).with_context(|| {
                    format!("Cannot tell the format of {}; pass --format", path.display())
                })?,
            };
            let df = read_table(&path, format)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            (df, column, measure.config())
        }
        Command::Dataset { name, column, data_dir, measure } => {
            let spec = name.spec();
            let cache = FileCache::new(data_dir)?;
            let df = cache
                .load(&spec)
                .with_context(|| format!("Failed to load dataset {}", spec.name))?;
            (df, column, measure.config())
        }
    };

    let h = df
        .column_entropy(&column, &config)
        .with_context(|| format!("Failed to compute entropy of column '{column}'"))?;
    println!("{column}\t{}\t{h:.6}", config.name());
    Ok(())
}
