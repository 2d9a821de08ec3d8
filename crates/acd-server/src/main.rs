//! Array Capacity Dashboard - Server Binary
//!
//! Collects hierarchical capacity metrics (system, pool, group, volume)
//! from a storage array's management service and serves them over an HTTP
//! API with real-time collection events.
//!
//! ## Operating Modes
//!
//! | Mode | Command | Description |
//! |------|---------|-------------|
//! | **Serve** | `acd` | HTTP API + SSE event stream (default) |
//! | **One-shot** | `acd --once` | Run one collection, print the summary, exit |

use clap::Parser;
use acd_server::run;

/// Command line interface for the Array Capacity Dashboard
#[derive(Parser, Debug)]
#[command(name = "acd")]
#[command(about = "Array Capacity Dashboard - storage capacity collection and reporting")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Run a single collection, print the summary as JSON, and exit
    ///
    /// Exits non-zero when the collection fails fatally. Useful for cron
    /// jobs and for verifying connectivity before serving.
    #[arg(long)]
    pub once: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref(), cli.once).await
}
