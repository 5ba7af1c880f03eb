use clap::Parser;
use credvault::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so `get` output stays clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => credvault::cli::commands::init::execute(&cli),
        Commands::Set { ref key, ref value } => {
            credvault::cli::commands::set::execute(&cli, key, value.as_deref())
        }
        Commands::Get { ref key } => credvault::cli::commands::get::execute(&cli, key),
        Commands::Delete { ref key } => credvault::cli::commands::delete::execute(&cli, key),
        Commands::List => credvault::cli::commands::list::execute(&cli),
    };

    if let Err(e) = result {
        credvault::cli::output::error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
