use std::path::PathBuf;
use std::sync::Arc;

use account_security::OperatorIdentity;
use anyhow::Context;
use clap::Parser;
use password_reset::{PasswordResetLocalClient, Service};
use password_reset_sdk::{AnalyzedStatement, PasswordResetClient, ResetPassword, Statement};

mod config;
mod logging;
mod password;

use config::AppConfig;

/// Authorize a password reset against static tenant metadata.
///
/// The new password is read from the first line of stdin.
#[derive(Parser, Debug)]
#[command(name = "reset-password", version)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bare username of the operator
    #[arg(long)]
    operator: String,

    /// Tenant ID of the operator's session
    #[arg(long)]
    tenant: String,

    /// Target username, optionally `name@tenant` (root only)
    #[arg(long)]
    user: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    logging::init(&cfg.logging)?;

    let metadata = static_metadata_plugin::Service::from_config(&cfg.metadata);
    let snapshot = metadata.snapshot();
    tracing::info!(
        tenants = snapshot.tenant_count(),
        users = snapshot.user_count(),
        "Loaded user metadata"
    );

    let svc = Service::new(
        Arc::new(metadata),
        Arc::new(static_rank_plugin::Service::from_config(&cfg.ranking)),
    );
    let client = PasswordResetLocalClient::new(Arc::new(svc));

    let operator = OperatorIdentity::builder()
        .bare_username(&cli.operator)
        .tenant_id(&cli.tenant)
        .build();
    let password = password::read_password(&mut std::io::stdin().lock())?;
    let statement = Statement::ResetPassword(ResetPassword::new(cli.user, password));

    let AnalyzedStatement::ResetPassword(request) = client.analyze(&operator, statement)?;
    println!("{}", request.target());
    Ok(())
}
