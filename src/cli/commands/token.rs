use anyhow::Context;
use clap::Args;
use serde_json::json;
use uuid::Uuid;

use crate::auth::{Claims, TokenKeys};
use crate::cli::{utils::output_success, OutputFormat};
use crate::config::AppConfig;

#[derive(Args, Debug)]
pub struct TokenArgs {
    #[arg(long, help = "User id the token resolves to")]
    pub user: Uuid,

    #[arg(long, help = "Lifetime in hours (defaults to SECURITY_JWT_EXPIRY_HOURS)")]
    pub hours: Option<u64>,
}

/// Local development helper; the API itself never issues tokens
pub fn handle(args: TokenArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    let hours = args.hours.unwrap_or(config.security.jwt_expiry_hours);

    let keys = TokenKeys::from_secret(&config.security.jwt_secret, hours)?;
    let claims = Claims::new(args.user, hours)?;
    let token = keys.sign(&claims)?;

    match output_format {
        OutputFormat::Text => {
            println!("{}", token);
            Ok(())
        }
        OutputFormat::Json => output_success(
            output_format,
            "Token issued",
            Some(json!({ "token": token, "user_id": args.user, "expires_at": claims.exp })),
        ),
    }
}
