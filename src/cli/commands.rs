//! Command handlers for the Fedora Access CLI
//!
//! Handlers only see the [`Fedora`] trait, so they run unchanged against the
//! in-memory store in tests.

use std::io::Write;

use serde::Serialize;
use tokio::io::AsyncWrite;
use tracing::{info, warn};

use crate::app::{ContentInfo, DsInfo, Fedora};
use crate::cli::{ContentArgs, GlobalArgs, MetadataArgs};
use crate::config::AppConfig;
use crate::errors::{AppError, FedoraError, Result};

/// Load configuration and apply command-line overrides
pub async fn load_config(global: &GlobalArgs) -> Result<AppConfig> {
    let mut config = AppConfig::load(global.config.clone()).await?;

    if let Some(url) = &global.url {
        config.fedora.url = url.clone();
    }
    if let Some(namespace) = &global.namespace {
        config.fedora.namespace = namespace.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Handle the content command
///
/// Streams the datastream into `--output` if given, otherwise into `stdout`.
pub async fn handle_content<W>(
    fedora: &dyn Fedora,
    args: ContentArgs,
    stdout: &mut W,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let (stream, content_info) = fedora
        .get_datastream(&args.id, &args.dsname)
        .await
        .map_err(|e| report(&args.id, &args.dsname, e))?;
    log_content_info(&content_info);

    let written = match &args.output {
        Some(path) => {
            let mut file = tokio::fs::File::create(path).await?;
            let written = stream.copy_to(&mut file).await?;
            info!("Wrote {} bytes to {}", written, path.display());
            written
        }
        None => stream.copy_to(stdout).await?,
    };

    if !content_info.length.is_empty() && content_info.length != written.to_string() {
        warn!(
            "Declared length {} differs from {} bytes received",
            content_info.length, written
        );
    }

    Ok(())
}

/// Handle the metadata command
pub async fn handle_metadata<W: Write>(
    fedora: &dyn Fedora,
    args: MetadataArgs,
    out: &mut W,
) -> Result<()> {
    let ds_info = fedora
        .get_datastream_info(&args.id, &args.dsname)
        .await
        .map_err(|e| report(&args.id, &args.dsname, e))?;

    if args.json {
        let view = MetadataView {
            info: &ds_info,
            version: ds_info.version(),
        };
        let rendered = serde_json::to_string_pretty(&view)
            .map_err(|e| AppError::generic(format!("Failed to render metadata: {}", e)))?;
        writeln!(out, "{}", rendered)?;
    } else {
        write_metadata_text(&ds_info, out)?;
    }

    Ok(())
}

/// Handle the config command
pub fn handle_config<W: Write>(config: &AppConfig, out: &mut W) -> Result<()> {
    write!(out, "{}", config.to_redacted_toml())?;
    Ok(())
}

#[derive(Serialize)]
struct MetadataView<'a> {
    #[serde(flatten)]
    info: &'a DsInfo,
    version: i64,
}

fn write_metadata_text<W: Write>(ds_info: &DsInfo, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Label:         {}", ds_info.label)?;
    writeln!(out, "Version ID:    {}", ds_info.version_id)?;
    writeln!(out, "Version:       {}", ds_info.version())?;
    writeln!(out, "State:         {}", ds_info.state)?;
    writeln!(out, "Checksum:      {}", ds_info.checksum)?;
    writeln!(out, "MIME type:     {}", ds_info.mime_type)?;
    writeln!(out, "Location:      {}", ds_info.location)?;
    writeln!(out, "Location type: {}", ds_info.location_type)?;
    writeln!(out, "Size:          {}", ds_info.size)?;
    Ok(())
}

fn log_content_info(content_info: &ContentInfo) {
    info!(
        content_type = %content_info.content_type,
        length = %content_info.length,
        disposition = %content_info.disposition,
        "Datastream headers"
    );
    if !content_info.md5.is_empty() || !content_info.sha256.is_empty() {
        info!(
            md5 = %content_info.md5,
            sha256 = %content_info.sha256,
            "Checksums supplied by content store"
        );
    }
}

// Access errors are logged here, at the edge, never inside the access layer.
fn report(id: &str, dsname: &str, error: FedoraError) -> AppError {
    match &error {
        FedoraError::NotFound => warn!("No datastream {} on object {}", dsname, id),
        FedoraError::NotAuthorized => warn!("Not authorized to read {} of {}", dsname, id),
        other => warn!("Fetching {} of {} failed: {}", dsname, id, other),
    }
    AppError::from(error)
}
