use clap::Parser;

use poolscreener::{arguments::Arguments, run::run_service};

/// Entry point: parse arguments and serve until shutdown
#[tokio::main]
async fn main() {
    let args = Arguments::parse();

    if let Err(e) = run_service(args).await {
        eprintln!("poolscreener failed: {:#}", e);
        std::process::exit(1);
    }
}
