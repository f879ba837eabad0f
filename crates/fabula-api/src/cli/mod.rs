//! CLI definitions for the `fabula` binary.
//!
//! Uses clap derive macros. Running without a subcommand starts the server.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Interactive storytelling backend.
#[derive(Parser)]
#[command(name = "fabula", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./fabula.toml when present).
    #[arg(short, long, global = true, env = "FABULA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve(ServeArgs),

    /// Print the effective configuration as TOML and exit.
    Config,
}

#[derive(clap::Args, Default)]
pub struct ServeArgs {
    /// Port to listen on (overrides config and FABULA_PORT).
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind to (overrides config and FABULA_HOST).
    #[arg(long)]
    pub host: Option<String>,
}

impl Cli {
    /// Log filter used when RUST_LOG is unset.
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info,fabula=debug",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["fabula"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.default_log_filter(), "info,fabula=debug");
    }

    #[test]
    fn serve_flags() {
        let cli = Cli::try_parse_from([
            "fabula", "-vv", "serve", "--port", "8080", "--host", "0.0.0.0",
        ])
        .unwrap();
        match &cli.command {
            Some(Commands::Serve(args)) => {
                assert_eq!(args.port, Some(8080));
                assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
            }
            _ => panic!("expected serve"),
        }
        assert_eq!(cli.default_log_filter(), "trace");
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
