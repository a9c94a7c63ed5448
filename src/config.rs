use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

/// Command line configuration: `beacon <PORT> <DOC_ROOT>`.
#[derive(Debug, Clone, Parser)]
#[command(name = "beacon")]
#[command(about = "Minimal HTTP/1.1 static file server")]
#[command(version)]
pub struct Config {
    /// Port to listen on
    pub port: u16,

    /// Directory that request paths are resolved against
    pub doc_root: PathBuf,
}

impl Config {
    /// Parses the process arguments, printing usage and exiting on failure.
    pub fn load() -> Self {
        Self::parse()
    }

    /// Address the listener binds: all IPv4 interfaces on the configured port.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
