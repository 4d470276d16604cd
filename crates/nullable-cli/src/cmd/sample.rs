//! `nullable sample`: print the sample records as JSON.

use crate::record::sample_people;
use anyhow::Context;
use chrono::{DateTime, FixedOffset, Utc};
use clap::Args;
use std::io::Write;
use tracing::debug;

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Emit a single line instead of indented JSON.
    #[arg(long)]
    pub compact: bool,

    /// Timestamp used for the "current" birthday (RFC 3339, offset kept).
    /// Defaults to now in UTC.
    #[arg(long, value_name = "RFC3339")]
    pub at: Option<DateTime<FixedOffset>>,
}

pub fn run_sample(args: &SampleArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let now = args.at.unwrap_or_else(|| Utc::now().fixed_offset());
    let people = sample_people(now);
    debug!(count = people.len(), %now, "serializing sample records");

    let written = if args.compact {
        serde_json::to_writer(&mut *out, &people)
    } else {
        serde_json::to_writer_pretty(&mut *out, &people)
    };
    written.context("Failed to serialize sample records")?;
    writeln!(out)?;
    Ok(())
}
