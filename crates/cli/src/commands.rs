//! Subcommands and their results.

use anyhow::{anyhow, bail, Result};
use clap::Subcommand;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use corelib::{
    Keyspace, MultiTokenPartitioner, RingPartition, RingSnapshot, SingleTokenPartitioner, Token,
};

use crate::config::Format;

/// What to compute from the loaded snapshot.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Equal-width slot of an instance, assuming one token per instance
    Single {
        /// Instance id
        id: String,
    },
    /// All ranges of an instance in a ring with virtual nodes
    Multi {
        /// Instance id
        id: String,
    },
    /// The instance a token (fingerprint) is dispatched to
    Owner {
        /// Token in the keyspace
        token: u64,
    },
    /// Every range of the ring, ascending
    Partition,
    /// Check the snapshot for duplicate ids and tokens
    Validate,
}

/// Output of a command, renderable as text or JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    pub lines: Vec<String>,
    pub json: Value,
}

impl CommandResult {
    fn new(lines: Vec<String>, json: impl Serialize) -> Result<Self> {
        Ok(Self {
            lines,
            json: serde_json::to_value(json)?,
        })
    }

    pub fn render(&self, format: Format) -> Result<String> {
        Ok(match format {
            Format::Text => self.lines.join("\n"),
            Format::Json => serde_json::to_string_pretty(&self.json)?,
        })
    }
}

impl Command {
    pub fn execute<T>(&self, keyspace: &Keyspace<T>, snapshot: &RingSnapshot<T>) -> Result<CommandResult>
    where
        T: Token + Serialize,
    {
        if *self != Command::Validate {
            if let Err(err) = snapshot.validate(keyspace) {
                warn!(error = %err, "snapshot failed validation, results may be inconsistent");
            }
        }

        match self {
            Command::Single { id } => {
                let range = SingleTokenPartitioner::new(*keyspace).compute(id, snapshot.instances())?;
                CommandResult::new(vec![range.to_string()], &range)
            }
            Command::Multi { id } => {
                let ranges = MultiTokenPartitioner::new(*keyspace).compute(id, snapshot.instances());
                info!(instance = %id, ranges = ranges.len(), keys = %ranges.key_count(), "multi-token ranges");
                let lines = if ranges.is_empty() {
                    vec![format!("{}: no ranges", id)]
                } else {
                    ranges.iter().map(ToString::to_string).collect()
                };
                CommandResult::new(lines, &ranges)
            }
            Command::Owner { token } => {
                let token = T::from_u128(u128::from(*token))
                    .filter(|t| keyspace.contains(*t))
                    .ok_or_else(|| anyhow!("token {} outside keyspace [0, {}]", token, keyspace.max()))?;
                let ring = RingPartition::compute(*keyspace, snapshot.instances());
                let Some(range) = ring.range_for(token) else {
                    bail!("token {} is not covered by any range", token);
                };
                CommandResult::new(
                    vec![format!("{} -> {}", token, range)],
                    json!({ "token": token, "range": range }),
                )
            }
            Command::Partition => {
                let ring = RingPartition::compute(*keyspace, snapshot.instances());
                CommandResult::new(ring.iter().map(ToString::to_string).collect(), ring.ranges())
            }
            Command::Validate => {
                snapshot.validate(keyspace)?;
                CommandResult::new(
                    vec![format!(
                        "ok: {} instances, {} tokens",
                        snapshot.len(),
                        snapshot.token_count()
                    )],
                    json!({
                        "instances": snapshot.len(),
                        "tokens": snapshot.token_count(),
                    }),
                )
            }
        }
    }
}
