//! CLI argument parsing

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "portmapper")]
#[command(version, about = "Network jack self-registration tool", long_about = None)]
pub struct Cli {
    /// Verbose output (-v, -vv, -vvv for increasing verbosity)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available network interfaces
    Interfaces,

    /// Show status and addresses of an interface
    Status {
        /// Network interface name
        #[arg(short, long)]
        interface: String,
    },

    /// Discover the upstream switch port and register it
    Register {
        /// Network interface name
        #[arg(short, long)]
        interface: String,

        /// Provisioning server base URL
        #[arg(short, long)]
        server: String,

        /// Room number
        #[arg(long)]
        room: String,

        /// Jack label
        #[arg(long)]
        jack: String,

        /// Account user name
        #[arg(short, long)]
        user: String,

        /// Account password
        #[arg(long)]
        pass: String,

        /// Locate LLDP fields by TLV position instead of type code
        /// (compatibility with older switch firmware)
        #[arg(long)]
        positional_tlvs: bool,

        /// Capture read timeout in milliseconds
        #[arg(long, value_name = "MS")]
        timeout_ms: Option<i32>,
    },
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
