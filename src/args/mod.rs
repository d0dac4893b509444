use crate::error::ArgumentError;
use crate::utils::address::parse_subnet;
use clap::Parser;
use ipnet::Ipv4Net;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Deserialize, Serialize, Debug, Clone, Default, Parser)]
#[command(
    author,
    version,
    about = "Discover live hosts on an IPv4 subnet through nmap",
    long_about = None,
    after_help = "NOTE: MAC addresses will only be returned if run as privileged user"
)]
pub struct Args {
    /// subnet to scan, in CIDR notation (e.g. 192.168.1.0/24).
    pub subnet: Option<String>,
    /// verbose output, for debugging.
    #[arg(short, long)]
    pub verbose: bool,
    /// output the bare text strings for display instead of JSON.
    #[arg(short, long)]
    pub bare: bool,
    /// nmap executable to invoke.
    #[arg(long, default_value = "nmap")]
    pub nmap: PathBuf,
    /// give up on the scan after this many seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
    /// also write logs to a daily rolling file in this directory.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Settings for one run, built once from [`Args`].
#[derive(Debug, Clone)]
pub struct Config {
    pub subnet: String,
    pub network: Ipv4Net,
    pub verbose: bool,
    pub bare: bool,
    pub nmap: PathBuf,
    pub timeout: Option<Duration>,
}

impl Args {
    pub fn into_config(self) -> Result<Config, ArgumentError> {
        let subnet = self.subnet.ok_or(ArgumentError::MissingSubnet)?;
        let network = parse_subnet(&subnet)?;
        Ok(Config {
            subnet,
            network,
            verbose: self.verbose,
            bare: self.bare,
            nmap: self.nmap,
            timeout: self.timeout.map(Duration::from_secs),
        })
    }
}
