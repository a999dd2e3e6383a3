use clap::Parser;

use crate::cmd::Commands;

/// Terminal client for the Hoop Bridge programme.
/// Everything runs in memory; nothing touches the disk or the network.
#[derive(Parser)]
#[command(name = "hoop", version, about = "Hoop Bridge programme client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}
