#![allow(missing_docs)]
use std::io::{self, Write};

use anyhow::{Context, Result};
use apigen_core::{GeneratorOptions, ToYaml, generate};
use tracing::info;

mod args;
mod load;
mod manifest;

use self::args::{AppArgs, OutputFormat};
use self::load::{load_client, load_options};
use self::manifest::ManifestWriter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let AppArgs {
        input,
        config,
        format,
        fully_qualified,
        packages,
    } = AppArgs::parse().context("parsing arguments")?;

    let client = load_client(&input)?;
    let mut options = match config {
        Some(path) => load_options(&path)?,
        None => GeneratorOptions::default(),
    };
    if fully_qualified {
        options = options.with_fully_qualified_names(true);
    }
    if packages {
        options = options.with_export_packages(true);
    }

    let mut writer = ManifestWriter::default();
    let written = generate(&client, &options, &mut writer)
        .await
        .context("generating client")?;
    info!(packages = written.len(), "Done");

    let manifest = writer.into_manifest();
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&manifest)?,
        OutputFormat::Yaml => manifest.to_yaml()?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}").context("writing manifest")?;
    Ok(())
}
