//! Parlor TUI entry point.

use clap::Parser;
use parlor_tui::Runtime;

/// Parlor terminal chat client
#[derive(Parser, Debug)]
#[command(name = "parlor-tui")]
#[command(about = "Terminal client for parlor chat rooms")]
#[command(version)]
struct Args {
    /// Websocket URL of the chat server
    #[arg(short, long, default_value = "ws://127.0.0.1:5000/ws")]
    server: String,

    /// Prefill the login form username
    #[arg(short, long)]
    username: Option<String>,

    /// Prefill the login form room id
    #[arg(short, long)]
    room: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing();

    let runtime = Runtime::new(args.server, args.username, args.room)?;
    Ok(runtime.run().await?)
}

/// Route tracing to a file when `RUST_LOG` is set; the terminal itself
/// belongs to ratatui.
fn init_tracing() {
    let Ok(filter) = tracing_subscriber::EnvFilter::try_from_default_env() else {
        return;
    };
    let Ok(file) = std::fs::File::create("parlor-tui.log") else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
}
