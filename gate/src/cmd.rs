//! Command line interface for the gate

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{Gate, GateConfig, RelayRequest};

/// Schnorr verification gate
#[derive(Parser)]
pub struct App {
    #[clap(subcommand)]
    pub command: Command,

    /// Verbosity level
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl App {
    /// Run the application
    pub fn run(&self) -> Result<()> {
        self.init_tracing()?;
        match &self.command {
            Command::Verify {
                config,
                identity,
                commitment,
                signature,
                public_key,
                message,
                memo,
            } => {
                let gate = Gate::new(GateConfig::load(config)?);
                let receipt = gate.relay(&RelayRequest {
                    identity: identity.as_str().into(),
                    commitment: commitment.clone(),
                    signature: signature.clone(),
                    public_key: public_key.clone(),
                    message: message.as_bytes().to_vec(),
                    memo: memo.clone(),
                })?;
                println!(
                    "verified identity={} memo={:?} compute_used={}",
                    receipt.identity, receipt.memo, receipt.compute_used
                );
            }
            Command::CheckConfig { config } => {
                let parsed = GateConfig::load(config)?;
                info!(
                    allowed = parsed.allowed.len(),
                    backend = ?parsed.verifier.backend,
                    compute_budget = ?parsed.verifier.compute_budget,
                    "config ok"
                );
            }
        }

        Ok(())
    }

    fn init_tracing(&self) -> Result<()> {
        let level = match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };

        let filter = if self.verbose > 0 {
            EnvFilter::new(level)
        } else if let Ok(env) = std::env::var("RUST_LOG") {
            EnvFilter::new(env)
        } else {
            EnvFilter::new("info")
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()?;
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Verify a signature and relay it on success
    Verify {
        /// Path to the gate config
        #[clap(short, long)]
        config: PathBuf,

        /// Caller identity, checked against the allow-list
        #[clap(short, long)]
        identity: String,

        /// Nonce commitment R in uncompressed hex
        #[clap(long)]
        commitment: String,

        /// Response scalar s in hex
        #[clap(long)]
        signature: String,

        /// Public key in uncompressed hex
        #[clap(long)]
        public_key: String,

        /// Signed message
        #[clap(short, long)]
        message: String,

        /// Passthrough memo
        #[clap(long, default_value = "")]
        memo: String,
    },

    /// Parse a config file and report its settings
    CheckConfig {
        /// Path to the gate config
        #[clap(short, long)]
        config: PathBuf,
    },
}
