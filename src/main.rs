use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    if !cli.json {
        println!(
            "iploc {} — IPv4 location lookup",
            env!("CARGO_PKG_VERSION")
        );
    }
    if let Err(err) = commands::handle_lookup_commands(&cli) {
        services::output::print_error(cli.json, &format!("{err:#}"));
        std::process::exit(1);
    }
}
