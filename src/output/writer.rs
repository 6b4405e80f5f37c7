//! Message types and the line-delimited JSON writer

use crate::error::{Error, Result};
use crate::schema::JsonSchema;
use crate::streams::StreamDescriptor;
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// A message emitted to the output sink
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Message {
    /// Stream schema, emitted once before the stream's records
    #[serde(rename = "SCHEMA")]
    Schema {
        /// Stream name
        stream: String,
        /// The stream's record schema
        schema: JsonSchema,
        /// Primary key fields
        key_properties: Vec<String>,
    },

    /// One extracted record
    #[serde(rename = "RECORD")]
    Record {
        /// Stream name
        stream: String,
        /// The record data
        record: JsonObject,
        /// When the record was extracted
        time_extracted: DateTime<Utc>,
    },
}

impl Message {
    /// Create the schema message for a stream
    pub fn schema(descriptor: &StreamDescriptor) -> Self {
        Self::Schema {
            stream: descriptor.name.to_string(),
            schema: descriptor.schema(),
            key_properties: descriptor.key_properties(),
        }
    }

    /// Create a record message
    pub fn record(stream: impl Into<String>, record: JsonObject) -> Self {
        Self::Record {
            stream: stream.into(),
            record,
            time_extracted: Utc::now(),
        }
    }
}

/// Writes messages to a sink, one per line
pub struct MessageWriter<W: Write> {
    out: W,
    pretty: bool,
}

impl<W: Write> MessageWriter<W> {
    /// Create a writer emitting line-delimited JSON
    pub fn new(out: W) -> Self {
        Self { out, pretty: false }
    }

    /// Create a writer emitting a human-readable format
    pub fn pretty(out: W) -> Self {
        Self { out, pretty: true }
    }

    /// Write one message
    pub fn write(&mut self, message: &Message) -> Result<()> {
        if self.pretty {
            self.write_pretty(message)
        } else {
            let line = serde_json::to_string(message)?;
            writeln!(self.out, "{line}").map_err(Error::Io)
        }
    }

    fn write_pretty(&mut self, message: &Message) -> Result<()> {
        match message {
            Message::Schema {
                stream,
                key_properties,
                ..
            } => writeln!(
                self.out,
                "SCHEMA  {stream} (key: {})",
                key_properties.join(", ")
            )
            .map_err(Error::Io),
            Message::Record { stream, record, .. } => {
                let data = serde_json::to_string(record)?;
                writeln!(self.out, "RECORD  {stream}: {data}").map_err(Error::Io)
            }
        }
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().map_err(Error::Io)
    }
}
