//! http-source command line.
//!
//! Stand-in host for the library: reads a request definition from a TOML
//! file and/or flags, performs the read, prints the result as JSON on
//! stdout and diagnostics on stderr.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use http_source::config::loader::load_config;
use http_source::config::validation::validate_config;
use http_source::lifecycle::signals;
use http_source::observability::logging;
use http_source::{ClientConfig, DataSource, RequestSpec, Severity, Shutdown, SourceConfig};

#[derive(Parser)]
#[command(name = "http-source")]
#[command(about = "Issue one HTTP request and print the response as JSON", long_about = None)]
struct Cli {
    /// Request definition (TOML). Flags override its fields.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target URL
    #[arg(long)]
    url: Option<String>,

    /// GET, POST, HEAD, PATCH or DELETE
    #[arg(short = 'X', long)]
    method: Option<String>,

    /// Request header as `Name: value` (repeatable)
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    headers: Vec<(String, String)>,

    /// Request body
    #[arg(short = 'd', long)]
    body: Option<String>,

    /// CA bundle (PEM) replacing the default trust roots
    #[arg(long)]
    ca_file: Option<PathBuf>,

    /// Client certificate (PEM)
    #[arg(long)]
    client_crt_file: Option<PathBuf>,

    /// Client private key (PEM)
    #[arg(long)]
    client_key_file: Option<PathBuf>,

    /// Total request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Ignore proxy settings from the environment
    #[arg(long)]
    no_proxy: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected `Name: value`, got {:?}", raw))?;
    Ok((name.trim().to_string(), value.trim().to_string()))
}

fn read_pem(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    fs::read_to_string(path).map_err(|e| format!("reading {}: {}", path.display(), e).into())
}

fn build_config(cli: Cli) -> Result<SourceConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SourceConfig {
            request: RequestSpec::default(),
            client: ClientConfig::default(),
        },
    };

    let request = &mut config.request;
    if let Some(url) = cli.url {
        request.url = url;
    }
    if cli.method.is_some() {
        request.method = cli.method;
    }
    if cli.body.is_some() {
        request.request_body = cli.body;
    }
    request.request_headers.extend(cli.headers);
    if let Some(path) = &cli.ca_file {
        request.tls.ca = Some(read_pem(path)?);
    }
    if let Some(path) = &cli.client_crt_file {
        request.tls.client_crt = Some(read_pem(path)?);
    }
    if let Some(path) = &cli.client_key_file {
        request.tls.client_key = Some(read_pem(path)?);
    }

    if cli.timeout.is_some() {
        config.client.timeout_secs = cli.timeout;
    }
    if cli.no_proxy {
        config.client.use_env_proxy = false;
    }

    if config.request.url.is_empty() {
        return Err("either --config or --url is required".into());
    }
    validate_config(&config).map_err(|errors| {
        errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    })?;

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = build_config(cli)?;

    tracing::debug!(
        url = %config.request.url,
        timeout_secs = ?config.client.timeout_secs,
        tls = ?config.request.tls,
        "Configuration loaded"
    );

    let shutdown = Arc::new(Shutdown::new());
    let _ctrl_c = signals::cancel_on_ctrl_c(shutdown.clone());

    let source = DataSource::new(config.client);
    let outcome = source.read(&config.request, &shutdown.child()).await;

    for diagnostic in &outcome.diagnostics {
        let label = match diagnostic.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        eprintln!("{}: {}", label, diagnostic.summary);
        if let Some(detail) = &diagnostic.detail {
            eprintln!("  {}", detail);
        }
    }

    if let Some(result) = &outcome.result {
        println!("{}", serde_json::to_string_pretty(result)?);
    }

    Ok(if outcome.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
