//! Command-line arguments.
//!
//! Flags only override values; anything left unset falls back to the
//! environment (see `plextrac-config`) and finally to interactive prompts,
//! so flag parsing stays free of environment handling.

use clap::Parser;

/// Bulk-update finding statuses across the reports of a PlexTrac client.
#[derive(Parser, Debug)]
#[command(name = "plextrac-cli", version, about)]
pub struct Args {
    /// Full URL of the PlexTrac instance, e.g. https://company.plextrac.com
    #[arg(long, value_name = "URL")]
    pub instance_url: Option<String>,

    /// Edge-access (CF_Authorization) token for instances behind an
    /// additional network security layer
    #[arg(long, value_name = "TOKEN")]
    pub edge_token: Option<String>,

    /// PlexTrac username
    #[arg(long, short = 'u', value_name = "USERNAME")]
    pub username: Option<String>,

    /// PlexTrac password (prompted for without echo when omitted)
    #[arg(long, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Name of the client whose reports should be updated
    #[arg(long, short = 'c', value_name = "NAME")]
    pub client_name: Option<String>,

    /// Skip TLS certificate verification (self-signed / test instances)
    #[arg(long)]
    pub skip_verify: bool,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}
