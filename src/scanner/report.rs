use crate::error::DecodeError;
use serde::Deserialize;

/// Decoded nmap XML report (`nmap -oX`).
///
/// Only the parts used downstream are modelled; unknown elements and
/// attributes are skipped.
#[derive(Debug, Default, Deserialize)]
pub struct ScanDocument {
    #[serde(rename = "host", default)]
    pub hosts: Vec<XmlHost>,
    #[serde(default)]
    pub runstats: Option<RunStats>,
}

impl ScanDocument {
    /// Decode the whole document. Nothing is returned unless every byte parses.
    pub fn from_bytes(report: &[u8]) -> Result<Self, DecodeError> {
        Ok(quick_xml::de::from_reader(report)?)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct XmlHost {
    #[serde(rename = "address", default)]
    pub addresses: Vec<XmlAddress>,
    #[serde(default)]
    pub hostnames: Option<XmlHostnames>,
}

impl XmlHost {
    pub fn first_hostname(&self) -> Option<&str> {
        self.hostnames
            .as_ref()
            .and_then(|hostnames| hostnames.names.first())
            .map(|hostname| hostname.name.as_str())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct XmlAddress {
    #[serde(rename = "@addr", default)]
    pub addr: String,
    #[serde(rename = "@addrtype", default)]
    pub addr_type: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddressKind {
    Ipv4,
    Mac,
    Ipv6,
    Other,
}

impl XmlAddress {
    pub fn kind(&self) -> AddressKind {
        match self.addr_type.as_str() {
            "ipv4" => AddressKind::Ipv4,
            "mac" => AddressKind::Mac,
            "ipv6" => AddressKind::Ipv6,
            _ => AddressKind::Other,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct XmlHostnames {
    #[serde(rename = "hostname", default)]
    pub names: Vec<XmlHostname>,
}

#[derive(Debug, Default, Deserialize)]
#[allow(dead_code)]
pub struct XmlHostname {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@type", default)]
    pub name_type: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RunStats {
    #[serde(default)]
    pub finished: Option<FinishedStats>,
    #[serde(rename = "hosts", default)]
    pub host_counts: Option<HostCounts>,
}

#[derive(Debug, Default, Deserialize)]
#[allow(dead_code)]
pub struct FinishedStats {
    #[serde(rename = "@time", default)]
    pub time: i64,
    #[serde(rename = "@timestr", default)]
    pub time_string: String,
    #[serde(rename = "@elapsed", default)]
    pub elapsed: f32,
    #[serde(rename = "@summary", default)]
    pub summary: String,
    #[serde(rename = "@exit", default)]
    pub exit: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct HostCounts {
    #[serde(rename = "@up", default)]
    pub up: u32,
    #[serde(rename = "@down", default)]
    pub down: u32,
    #[serde(rename = "@total", default)]
    pub total: u32,
}
