//! broeser - single-screen terminal browser shell
//!
//! Main entry point for the CLI application.

use broeser::{logging, Config, Repl};
use clap::Parser;

/// broeser - single-screen terminal browser shell
#[derive(Parser, Debug)]
#[command(name = "broeser")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to open instead of the home page
    url: Option<String>,

    /// Home page address
    #[arg(long)]
    home: Option<String>,

    /// Start without loading any page
    #[arg(long)]
    no_home: bool,

    /// Request timeout in seconds
    #[arg(long, short = 't')]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    /// Print the default configuration file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_config {
        println!("{}", Config::default_config_toml());
        return Ok(());
    }

    // Build configuration
    let mut config = Config::load();

    // Apply CLI overrides
    if let Some(home) = args.home {
        config.browser.home_url = home;
    }

    if let Some(timeout) = args.timeout {
        config.browser.timeout_secs = timeout;
    }

    config.validate()?;

    if args.debug {
        config.logging.filter = "warn,broeser=debug".to_string();
    }

    if let Err(e) = logging::init_logging(&config.logging) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let start_url = match (args.url, args.no_home) {
        (Some(url), _) => Some(url),
        (None, false) => Some(config.browser.home_url.clone()),
        (None, true) => None,
    };

    let mut repl = Repl::with_config(config)?;
    repl.run(start_url.as_deref()).await?;

    Ok(())
}
