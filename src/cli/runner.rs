//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ConnectorConfig;
use crate::engine::{SyncEngine, SyncStats};
use crate::error::{Error, Result};
use crate::output::{Message, MessageWriter};
use crate::streams::{self, StreamDescriptor};
use futures::TryStreamExt;
use serde_json::json;
use std::io::Write;
use std::time::Instant;
use tracing::{error, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Check => self.check().await,
            Commands::Discover => self.discover(),
            Commands::Streams => self.streams(),
            Commands::Sync { streams } => self.sync(streams.as_deref()).await,
        }
    }

    /// Load configuration from the CLI arguments
    fn load_config(&self) -> Result<ConnectorConfig> {
        if let Some(json) = &self.cli.config_json {
            return ConnectorConfig::from_json_str(json);
        }
        if let Some(path) = &self.cli.config {
            return ConnectorConfig::load(path);
        }
        Err(Error::config(
            "Configuration not specified (use --config or --config-json)",
        ))
    }

    /// Test the API connection
    async fn check(&self) -> Result<()> {
        let engine = SyncEngine::new(self.load_config()?)?;
        let result = engine.check().await?;
        println!("{}", serde_json::to_string(&result)?);

        if result.success {
            Ok(())
        } else {
            Err(Error::Other(format!(
                "Connection check failed: {}",
                result.message.unwrap_or_default()
            )))
        }
    }

    /// Print the stream catalog
    fn discover(&self) -> Result<()> {
        let catalog: Vec<_> = streams::all()
            .iter()
            .map(|s| {
                json!({
                    "name": s.name,
                    "key_properties": s.key_properties(),
                    "schema": s.schema().to_json(),
                })
            })
            .collect();

        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "streams": catalog }))?
        );
        Ok(())
    }

    /// List stream names
    fn streams(&self) -> Result<()> {
        for stream in streams::all() {
            println!("{}", stream.name);
        }
        Ok(())
    }

    /// Sync selected streams to stdout
    async fn sync(&self, selection: Option<&str>) -> Result<()> {
        let engine = SyncEngine::new(self.load_config()?)?;
        let selected = select_streams(selection)?;

        let stdout = std::io::stdout();
        let mut writer = match self.cli.format {
            OutputFormat::Json => MessageWriter::new(stdout.lock()),
            OutputFormat::Pretty => MessageWriter::pretty(stdout.lock()),
        };

        let start = Instant::now();
        let mut stats = SyncStats::new();

        // Streams sync serially and independently: a failed stream is
        // reported and the remaining streams still run.
        for descriptor in selected {
            match sync_stream(&engine, descriptor, &mut writer).await {
                Ok(count) => {
                    stats.add_records(count);
                    stats.add_stream();
                }
                Err(e) => {
                    stats.add_error();
                    error!("Sync failed for stream {}: {e}", descriptor.name);
                }
            }
        }

        writer.flush()?;
        stats.set_duration(start.elapsed().as_millis() as u64);
        info!(
            "Synced {} records across {} streams in {}ms",
            stats.records_synced, stats.streams_synced, stats.duration_ms
        );

        if stats.errors > 0 {
            return Err(Error::Other(format!(
                "{} stream(s) failed to sync",
                stats.errors
            )));
        }
        Ok(())
    }
}

/// Drive one stream's record stream into the writer
async fn sync_stream<W: Write>(
    engine: &SyncEngine,
    descriptor: &'static StreamDescriptor,
    writer: &mut MessageWriter<W>,
) -> Result<usize> {
    info!("Starting sync for stream: {}", descriptor.name);
    writer.write(&Message::schema(descriptor))?;

    let mut records = engine.record_stream(descriptor);
    let mut count = 0;
    while let Some(record) = records.try_next().await? {
        writer.write(&Message::record(descriptor.name, record))?;
        count += 1;
    }
    Ok(count)
}

/// Resolve a comma-separated stream selection against the registry
fn select_streams(selection: Option<&str>) -> Result<Vec<&'static StreamDescriptor>> {
    match selection {
        None => Ok(streams::all().iter().collect()),
        Some(names) => names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| streams::find(name).ok_or_else(|| Error::stream_not_found(name)))
            .collect(),
    }
}
