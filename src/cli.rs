use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "iploc", version, about = "IPv4 geolocation lookup via a web lookup form")]
#[command(group(ArgGroup::new("target").required(true).args(["ip", "local", "file"])))]
pub struct Cli {
    #[arg(value_name = "IP", help = "IPv4 address to look up")]
    pub ip: Option<String>,
    #[arg(long, short = 'l', help = "Look up the public IP of this machine")]
    pub local: bool,
    #[arg(
        long,
        short = 'f',
        value_name = "PATH",
        help = "Read IPs from a file, one per line"
    )]
    pub file: Option<PathBuf>,
    #[arg(
        long,
        short = 'o',
        value_name = "PATH",
        help = "Write batch results to a file instead of stdout"
    )]
    pub output: Option<PathBuf>,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
}
