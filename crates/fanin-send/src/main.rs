//! Fan-in sender entry point.
//!
//! # Usage
//!
//! ```bash
//! # Anonymous
//! fanin-send
//!
//! # Announce a name first
//! fanin-send Alice
//! ```

use clap::Parser;
use fanin_proto::DEFAULT_ADDR;
use fanin_send::Sender;
use tokio::io::{AsyncWriteExt, BufReader};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Fan-in sender: streams typed lines to a listener
#[derive(Parser, Debug)]
#[command(name = "fanin-send")]
#[command(about = "Send lines typed on stdin to a fan-in listener")]
#[command(version)]
struct Args {
    /// Identity to announce before sending
    name: Option<String>,

    /// Listener address
    #[arg(short, long, default_value = DEFAULT_ADDR)]
    addr: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("Connecting to tcp server {}\n", args.addr).as_bytes()).await?;

    let mut sender = Sender::connect(&args.addr).await?;

    if let Some(name) = &args.name {
        stdout.write_all(format!("Setting name to {name}\n").as_bytes()).await?;
        sender.announce(name).await?;
    }

    let stdin = BufReader::new(tokio::io::stdin());
    sender.forward(stdin, &mut stdout).await?;

    Ok(())
}
