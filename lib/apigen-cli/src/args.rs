use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use tracing::warn;

/// Serialization of the printed manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => bail!("unknown output format '{other}', expected 'json' or 'yaml'"),
        }
    }
}

#[derive(Debug)]
pub struct AppArgs {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub fully_qualified: bool,
    pub packages: bool,
}

impl AppArgs {
    pub fn parse() -> Result<Self> {
        Self::from_args(pico_args::Arguments::from_env())
    }

    fn from_args(mut pargs: pico_args::Arguments) -> Result<Self> {
        let fully_qualified = pargs.contains("--fully-qualified");
        let packages = pargs.contains("--packages");

        let input = pargs
            .value_from_str(["-i", "--input"])
            .context("parsing input argument")?;

        let config = pargs
            .opt_value_from_str(["-c", "--config"])
            .context("parsing config argument")?;

        let format = pargs
            .opt_value_from_str(["-f", "--format"])
            .context("parsing format argument")?;

        let result = Self {
            input,
            config,
            format: format.unwrap_or_default(),
            fully_qualified,
            packages,
        };

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            warn!(?remaining, "Warning: unused arguments left");
        }
        Ok(result)
    }
}
