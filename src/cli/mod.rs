//! CLI module for the account service
//!
//! Provides subcommands for running the service:
//! - `serve`: HTTP API server (default)

pub mod serve;

use clap::{Parser, Subcommand};

/// Account service - sign up, fetch, update and close user accounts
#[derive(Parser)]
#[command(name = "account-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server (default)
    Serve(serve::ServeArgs),
}

impl Cli {
    /// Subcommand to run, falling back to `serve` with no overrides
    pub fn command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Serve(serve::ServeArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_serve() {
        let cli = Cli::parse_from(["account-service"]);
        let Command::Serve(args) = cli.command();

        assert!(args.host.is_none());
        assert!(args.port.is_none());
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::parse_from([
            "account-service",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
        ]);
        let Command::Serve(args) = cli.command();

        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(8080));
    }
}
