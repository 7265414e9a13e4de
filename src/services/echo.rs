use crate::services::config::Settings;
use anyhow::Context;
use reqwest::blocking::Client;
use std::time::Duration;

const ECHO_TIMEOUT: Duration = Duration::from_secs(10);

fn fetch_ip(client: &Client, url: &str) -> anyhow::Result<String> {
    let resp = client.get(url).send()?.error_for_status()?;
    let body = resp.text()?;
    Ok(body.trim().to_string())
}

/// Asks an IP-echo service for our public address, falling back to the
/// secondary endpoint when the primary is unreachable.
pub fn discover_public_ip(settings: &Settings) -> anyhow::Result<String> {
    let client = Client::builder().timeout(ECHO_TIMEOUT).build()?;
    match fetch_ip(&client, &settings.echo_url) {
        Ok(ip) if !ip.is_empty() => Ok(ip),
        _ => fetch_ip(&client, &settings.echo_fallback_url)
            .with_context(|| "could not determine public IP address"),
    }
}
