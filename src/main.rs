mod alert;
mod cli;
mod error;
mod payload;
mod transport;

use alert::AlertRequest;
use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::Write;
use std::time::Duration;
use transport::{HttpTransport, WebhookTransport};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for the body and the response
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let timeout = Duration::from_secs(cli.timeout);
    let request = AlertRequest::from(cli);
    let transport = HttpTransport::new(timeout).context("Failed to build HTTP client")?;

    notify(&request, &transport, &mut std::io::stdout()).await
}

/// Format the alert, echo the body, deliver it and echo the reply.
async fn notify<W: Write>(
    request: &AlertRequest,
    transport: &dyn WebhookTransport,
    out: &mut W,
) -> Result<()> {
    let payload = payload::build_payload(request);
    let body = payload::encode_body(&payload).context("Failed to serialize payload")?;

    writeln!(out, "{}", body)?;
    out.flush()?;

    tracing::debug!(
        "Sending {} notification for {}",
        request.notification_type,
        request.host_alias
    );

    let response = transport
        .post(&request.url, body)
        .await
        .with_context(|| format!("Failed to deliver notification to {}", request.url))?;

    writeln!(out, "{}", String::from_utf8_lossy(&response))?;
    Ok(())
}
