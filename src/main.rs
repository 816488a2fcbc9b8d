use clap::Parser;
use greedwatch::cli::{self, CheckCommand, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Run(args) => cli::run::execute(args).await,
        Commands::Index(args) => cli::index::execute(&args.config).await,
        Commands::Check(CheckCommand::Config(args)) => cli::check::execute_config(&args.config),
    };

    if let Err(e) = result {
        cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
