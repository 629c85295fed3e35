//! Fan-in listener entry point.
//!
//! # Usage
//!
//! ```bash
//! # Listen on the default address
//! fanin-tui
//!
//! # Listen elsewhere and keep a debug log
//! RUST_LOG=debug fanin-tui --bind 0.0.0.0:21212 --log-file fanin.log
//! ```

use std::{fs::File, path::Path, sync::Mutex};

use clap::Parser;
use fanin_proto::DEFAULT_ADDR;
use fanin_server::{Server, ServerConfig};
use fanin_tui::{AppEvent, Runtime, TerminalDriver, pump_events};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Fan-in listener: shows every line sent by every connected client
#[derive(Parser, Debug)]
#[command(name = "fanin-tui")]
#[command(about = "Accept line-oriented connections and render them in one scrollable view")]
#[command(version)]
struct Args {
    /// Address to bind to
    #[arg(short, long, default_value = DEFAULT_ADDR)]
    bind: String,

    /// Write logs to this file (the terminal is occupied by the UI)
    #[arg(long)]
    log_file: Option<String>,
}

/// Install a file-backed subscriber. `RUST_LOG` overrides the default level.
fn init_logging(path: &Path) -> Result<(), std::io::Error> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(filter)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(Path::new(path))?;
    }

    let config = ServerConfig { bind_address: args.bind, ..ServerConfig::default() };

    // Bind before taking over the terminal so a failure is readable.
    let server = Server::bind(&config).await?;
    let (events, inbox) = fanin_app::channel(config.event_capacity);

    tokio::spawn(server.run(events.clone()));
    let input = tokio::spawn(async move {
        let quit = events.clone();
        if let Err(e) = pump_events(events).await {
            tracing::error!("terminal input failed: {e}");
        }
        // Without input there is no way to quit interactively.
        let _ = quit.submit(AppEvent::Quit).await;
    });

    let driver = TerminalDriver::new()?;
    let mut runtime = Runtime::new(driver, inbox);
    let result = runtime.run().await;

    input.abort();
    tracing::info!("listener shutting down");

    Ok(result?)
}
