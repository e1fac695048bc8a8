//! Offline rehearsal of engine keycard events.
//!
//! Drives a [`KeycardBridge`](keycard_bridge::KeycardBridge) against the
//! in-memory inventory client so pickup and door sequences can be checked
//! without a STAR account.
//!
//! Run with: `cargo run -p keycard-sim -- --grant red_keycard --door red`

mod session;

use anyhow::Result;
use clap::Parser;
use session::{DoorColor, Scenario};

/// Rehearse cross-game keycard events against an in-memory inventory
#[derive(Parser, Debug)]
#[command(name = "keycard-sim")]
#[command(version)]
struct Cli {
    /// Seed the remote inventory with one unit of this item (repeatable)
    #[arg(long = "grant", value_name = "NAME")]
    grants: Vec<String>,

    /// Simulate the service refusing to initialize
    #[arg(long)]
    fail_init: bool,

    /// Simulate SSO rejecting the configured credentials
    #[arg(long)]
    reject_auth: bool,

    /// Fire a pickup for this engine sprite id (repeatable)
    #[arg(long = "pickup-sprite", value_name = "ID", allow_negative_numbers = true)]
    pickup_sprites: Vec<i32>,

    /// Fire a locked-door check for this key color (repeatable)
    #[arg(long = "door", value_enum, value_name = "COLOR")]
    doors: Vec<DoorColor>,

    /// Print the session summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists (STAR_* credentials)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let scenario = Scenario {
        grants: cli.grants,
        fail_init: cli.fail_init,
        reject_auth: cli.reject_auth,
        pickup_sprites: cli.pickup_sprites,
        doors: cli.doors,
    };
    let summary = scenario.run(keycard_bridge::BridgeConfig::from_env());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        summary.print();
    }

    Ok(())
}
