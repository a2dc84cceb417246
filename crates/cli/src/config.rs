//! Command-line configuration and entry logic.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, Level};

use corelib::{Keyspace, RingSnapshot, Token};

use crate::commands::{Command, CommandResult};

/// Integer width of the ring's keyspace.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    U16,
    U32,
    U64,
}

/// How results are printed.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// Inspect token-range ownership of a ring snapshot.
#[derive(Parser, Debug, Clone)]
#[command(name = "ringctl", version)]
pub struct CliConfig {
    /// Ring snapshot file: {"instances":[{"id":"..","tokens":[..]}]}
    #[arg(short, long, env = "RINGCTL_SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Keyspace width
    #[arg(long, value_enum, default_value_t = Width::U32, env = "RINGCTL_WIDTH")]
    pub width: Width,

    /// Upper bound of the keyspace (defaults to the width's maximum)
    #[arg(long)]
    pub max: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    pub fn run(&self) -> Result<()> {
        self.init_logging();

        let raw = std::fs::read_to_string(&self.snapshot)
            .with_context(|| format!("reading snapshot {}", self.snapshot.display()))?;
        let result = self.execute(&raw)?;
        println!("{}", result.render(self.format)?);
        Ok(())
    }

    /// Parses `raw` at the configured width and runs the command on it.
    pub fn execute(&self, raw: &str) -> Result<CommandResult> {
        match self.width {
            Width::U16 => self.execute_as::<u16>(raw),
            Width::U32 => self.execute_as::<u32>(raw),
            Width::U64 => self.execute_as::<u64>(raw),
        }
    }

    fn execute_as<T>(&self, raw: &str) -> Result<CommandResult>
    where
        T: Token + Serialize + DeserializeOwned,
    {
        let snapshot: RingSnapshot<T> =
            serde_json::from_str(raw).context("parsing ring snapshot")?;
        let keyspace = self.keyspace::<T>()?;
        debug!(
            instances = snapshot.len(),
            tokens = snapshot.token_count(),
            max = %keyspace.max(),
            "loaded snapshot"
        );
        self.command.execute(&keyspace, &snapshot)
    }

    pub fn keyspace<T: Token>(&self) -> Result<Keyspace<T>> {
        match self.max {
            None => Ok(Keyspace::full()),
            Some(max) => T::from_u128(u128::from(max))
                .map(Keyspace::new)
                .ok_or_else(|| anyhow!("--max {} does not fit a {:?} keyspace", max, self.width)),
        }
    }

    fn init_logging(&self) {
        let level = match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        // a subscriber may already be installed when embedded
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
