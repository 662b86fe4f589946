//! Queue execution: feed values through the configured discipline

use std::io::Write;
use anyhow::{Context, Result};
use log::{debug, info};
use crate::queue::{QueueConfig, QueueKind};

/// Outcome of inserting a batch and draining the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrainReport {
    pub kind: QueueKind,
    pub inserted: usize,
    pub popped: Vec<i64>,
}

impl DrainReport {
    pub fn summary(&self) -> String {
        format!("{} queue: {} inserted, {} popped", self.kind, self.inserted, self.popped.len())
    }

    /// Write the pop order, one value per line
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for value in &self.popped {
            writeln!(out, "{}", value).context("Failed to write output")?;
        }
        out.flush().context("Failed to flush output")
    }
}

/// Parse whitespace-separated integers
pub fn parse_values(input: &str) -> Result<Vec<i64>> {
    input
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<i64>()
                .with_context(|| format!("Invalid value #{}: '{}' is not an integer", position + 1, token))
        })
        .collect()
}

/// Insert every value, then pop until the queue reports empty
pub fn run_queue<I>(config: &QueueConfig, values: I) -> Result<DrainReport>
where
    I: IntoIterator<Item = i64>,
{
    let mut queue = config.build();
    let mut inserted = 0;
    for value in values {
        queue.insert(value);
        inserted += 1;
    }
    debug!("Inserted {} values into {} queue", inserted, config.kind);

    let popped = queue
        .drain()
        .with_context(|| format!("Draining {} queue failed", config.kind))?;
    info!("Popped {} values from {} queue", popped.len(), config.kind);

    Ok(DrainReport {
        kind: config.kind,
        inserted,
        popped,
    })
}
