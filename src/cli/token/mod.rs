//! Token command - mints a development bearer token

use clap::Args;

use crate::config::AppConfig;
use crate::domain::AuthenticatedUser;
use crate::infrastructure::auth::JwtAuthenticator;

#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Internal user ID placed in the `sub` claim
    #[arg(long)]
    pub user_id: String,

    /// GitHub account linked to the user
    #[arg(long)]
    pub github_user_id: Option<i64>,
}

/// Print a token signed with the configured secret
pub async fn run(args: TokenArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    let token = issue_token(&config, &args)?;

    println!("{}", token);

    Ok(())
}

fn issue_token(config: &AppConfig, args: &TokenArgs) -> anyhow::Result<String> {
    let mut user = AuthenticatedUser::new(&args.user_id);
    if let Some(github_user_id) = args.github_user_id {
        user = user.with_github_user_id(github_user_id);
    }

    Ok(JwtAuthenticator::new(config.auth.clone()).issue(&user)?)
}
