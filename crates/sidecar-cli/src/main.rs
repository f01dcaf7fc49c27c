//! Sidecar Hub CLI main entry point

use clap::Parser;
use sidecar_cli::{
    cli::{Cli, Commands},
    error::CliResult,
    utils::{init_tracing, ColoredOutput},
};
use tracing::info;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{} {}", ColoredOutput::error("Error:"), e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    init_tracing()?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    info!("Sidecar Hub v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Serve { args } => sidecar_cli::commands::serve::execute(args, &cli.db_path).await,
        Commands::Migrate => sidecar_cli::commands::migrate::execute(&cli.db_path).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_migrate() {
        let cli =
            Cli::try_parse_from(["sidecar-hub", "--db-path", "/tmp/test.db", "migrate"]).unwrap();

        assert_eq!(cli.db_path, "/tmp/test.db");
        assert!(matches!(cli.command, Commands::Migrate));
    }

    #[test]
    fn cli_parses_serve_with_tokens() {
        let cli = Cli::try_parse_from([
            "sidecar-hub",
            "serve",
            "--addr",
            "0.0.0.0:9000",
            "--token",
            "admin:s3cret:sidecars:read,sidecars:update",
            "--token",
            "reader:r34der:sidecars:read",
            "--memory",
        ])
        .unwrap();

        if let Commands::Serve { args } = cli.command {
            assert_eq!(args.addr, "0.0.0.0:9000");
            assert_eq!(args.tokens.len(), 2);
            assert!(args.memory);
        } else {
            panic!("Expected Serve command");
        }
    }
}
