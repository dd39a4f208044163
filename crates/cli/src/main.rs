use clap::Parser;
use cli::{commands::Cli, output, pipeline};
use connectors::EnvManager;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG wins over the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match pipeline::run(&cli, &EnvManager::new()) {
        Ok(report) => output::print_success(&report),
        Err(err) => {
            error!("{err}");
            println!("{}", err.hint());
        }
    }
}
