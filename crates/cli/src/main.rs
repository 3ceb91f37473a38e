//! PlexTrac bulk finding-status updater.
//!
//! Assembles configuration (flags over environment over `.env`), builds the
//! API client, and hands off to the workflow. This is the only place that
//! terminates the process; everything below returns typed errors.

mod args;
mod error;
mod interactive;
mod workflow;

use std::process::ExitCode as ProcessExitCode;
use std::time::Duration;

use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use plextrac_client::PlextracClient;
use plextrac_config::ConfigLoader;

use crate::args::Args;
use crate::error::{ExitCode, ExitCodeExt};
use crate::interactive::DialoguerPrompt;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> ProcessExitCode {
    init_tracing();

    match run().await {
        Ok(_) => ExitCode::Success.into(),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "run failed");
            e.exit_code().into()
        }
    }
}

async fn run() -> anyhow::Result<workflow::WorkflowSummary> {
    // The .env file must be loaded before anything reads the environment.
    ConfigLoader::load_dotenv()?;
    let args = Args::parse();

    let mut loader = ConfigLoader::new().from_env()?;
    if let Some(url) = args.instance_url {
        loader = loader.with_instance_url(url);
    }
    if let Some(token) = args.edge_token {
        loader = loader.with_edge_token(SecretString::new(token.into()));
    }
    if let Some(username) = args.username {
        loader = loader.with_username(username);
    }
    if let Some(password) = args.password {
        loader = loader.with_password(SecretString::new(password.into()));
    }
    if let Some(name) = args.client_name {
        loader = loader.with_client_name(name);
    }
    if args.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if let Some(secs) = args.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }
    let config = loader.build()?;

    let mut client = PlextracClient::builder().from_config(&config).build()?;
    let ui = DialoguerPrompt::new();

    workflow::run(&mut client, &ui, &config.workflow).await
}
