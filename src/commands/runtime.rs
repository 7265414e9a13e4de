use crate::cli::Cli;
use crate::domain::models::LocalReport;
use crate::services::config::{self, Settings};
use crate::services::lookup::LookupClient;
use crate::services::{echo, output, report};
use anyhow::Context;
use std::path::Path;

pub fn handle_lookup_commands(cli: &Cli) -> anyhow::Result<()> {
    let settings = config::load()?;
    let client = LookupClient::new(&settings)?;

    if cli.local {
        run_local(cli, &settings, &client)
    } else if let Some(file) = &cli.file {
        run_batch(cli, &settings, &client, file)
    } else if let Some(ip) = &cli.ip {
        run_single(cli, &client, ip)
    } else {
        // clap's arg group guarantees one target is present
        anyhow::bail!("no lookup target given")
    }
}

fn run_single(cli: &Cli, client: &LookupClient, ip: &str) -> anyhow::Result<()> {
    let record = client.query(ip);
    if cli.json {
        output::print_json(&record)?;
    } else {
        output::print_record_text(&record);
    }
    Ok(())
}

fn run_local(cli: &Cli, settings: &Settings, client: &LookupClient) -> anyhow::Result<()> {
    let ip = match echo::discover_public_ip(settings) {
        Ok(ip) => ip,
        Err(err) => {
            output::print_error(cli.json, &err.to_string());
            return Ok(());
        }
    };
    if !cli.json {
        println!("public IP: {ip}");
    }
    let record = client.query(&ip);
    if cli.json {
        output::print_json(&LocalReport::from(record))?;
    } else {
        output::print_record_text(&record);
    }
    Ok(())
}

fn run_batch(
    cli: &Cli,
    settings: &Settings,
    client: &LookupClient,
    file: &Path,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("cannot read IP list: {}", file.display()))?;
    let ips: Vec<&str> = raw.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    if ips.is_empty() {
        anyhow::bail!("no IP addresses found in {}", file.display());
    }

    if !cli.json {
        println!("looking up {} addresses...", ips.len());
    }

    let mut results = Vec::with_capacity(ips.len());
    for (i, ip) in ips.iter().enumerate() {
        if i > 0 {
            std::thread::sleep(settings.batch_delay);
        }
        if !cli.json {
            println!("({}/{}) {}", i + 1, ips.len(), ip);
        }
        let record = client.query(ip);
        if !cli.json {
            if record.is_success() {
                println!("✓ {ip}");
            } else {
                println!(
                    "✗ {ip}: {}",
                    record.error.as_deref().unwrap_or("unknown error")
                );
            }
        }
        results.push(record);
    }

    let summary = report::batch_summary(results);
    if let Some(path) = &cli.output {
        if cli.json {
            report::save_json(&summary, path)?;
        } else {
            report::save_text(&summary.results, path)?;
            println!("results saved to {}", path.display());
        }
    } else if cli.json {
        output::print_json(&summary)?;
    }
    if !cli.json {
        println!(
            "done: {}/{} succeeded",
            summary.success_count, summary.total_count
        );
    }
    Ok(())
}
