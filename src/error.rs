use std::io;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("you must provide a subnet to scan")]
    MissingSubnet,
    #[error("you must provide a subnet to scan")]
    EmptySubnet,
    #[error("`{subnet}` is not a valid CIDR notation subnet: {source}")]
    InvalidCidr {
        subnet: String,
        source: ipnet::AddrParseError,
    },
}

/// Failure to run the external discovery tool or to capture its report.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("execute failed, is nmap installed? {0}")]
    Spawn(#[source] io::Error),
    #[error("execute failed ({status}), is nmap installed? {stderr}")]
    Exit { status: ExitStatus, stderr: String },
    #[error("reading scan output failed, is nmap installed? {0}")]
    Capture(#[source] io::Error),
    #[error("scan did not finish within {0:?}, is nmap installed and responsive?")]
    TimedOut(Duration),
}

#[derive(Debug, Error)]
#[error("decode error: {0}")]
pub struct DecodeError(#[from] pub quick_xml::DeError);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to convert to JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    #[error(transparent)]
    Invocation(#[from] InvocationError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl Error {
    /// Process exit code for this failure class.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Argument(ArgumentError::MissingSubnet) => 1,
            Error::Argument(ArgumentError::EmptySubnet) => 2,
            Error::Argument(ArgumentError::InvalidCidr { .. }) => 3,
            Error::Invocation(_) => 4,
            Error::Decode(_) => 5,
            Error::Render(_) => 6,
        }
    }

    /// Headline printed above the underlying cause.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::Argument(ArgumentError::InvalidCidr { .. }) => {
                "You have not input a valid CIDR notation subnet. Try again."
            }
            Error::Argument(_) => "Missing subnet.",
            Error::Invocation(_) => "Host scan failed.",
            Error::Decode(_) => "Parsing failed.",
            Error::Render(_) => "Failed to render output.",
        }
    }
}
