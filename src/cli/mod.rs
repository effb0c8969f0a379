//! CLI module for the web status API
//!
//! - `serve`: run the HTTP API
//! - `token`: mint a bearer token for local development

pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

/// Web platform status API
#[derive(Parser)]
#[command(name = "webstatus-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,

    /// Print a signed bearer token for a user
    Token(token::TokenArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["webstatus-api", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }

    #[test]
    fn test_parse_token() {
        let cli = Cli::try_parse_from([
            "webstatus-api",
            "token",
            "--user-id",
            "user-1",
            "--github-user-id",
            "42",
        ])
        .unwrap();

        let Command::Token(args) = cli.command else {
            panic!("expected token command");
        };
        assert_eq!(args.user_id, "user-1");
        assert_eq!(args.github_user_id, Some(42));
    }

    #[test]
    fn test_token_requires_user_id() {
        assert!(Cli::try_parse_from(["webstatus-api", "token"]).is_err());
    }
}
