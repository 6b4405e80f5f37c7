//! Output sink
//!
//! The connector emits line-delimited JSON messages: a SCHEMA message per
//! stream followed by one RECORD message per extracted record. A pretty
//! format exists for interactive use.

mod writer;

pub use writer::{Message, MessageWriter};

#[cfg(test)]
mod tests;
