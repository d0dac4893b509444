use crate::error::DecodeError;
use crate::scanner::report::{AddressKind, ScanDocument, XmlHost};
use crate::scanner::RawScanReport;
use serde::Serialize;

pub const UNKNOWN_HOSTNAME: &str = "unknown";

/// A live host as reported to the user.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRecord {
    #[serde(rename = "Hostname")]
    pub hostname: String,
    #[serde(rename = "IP")]
    pub ip: String,
    /// Only filled in when nmap ran with enough privileges to see it.
    #[serde(rename = "Mac", skip_serializing_if = "String::is_empty")]
    pub mac: String,
}

impl HostRecord {
    /// Build a record from one `<host>` entry, or `None` when it carries no
    /// ipv4 address.
    ///
    /// Addresses are applied in document order, so when an entry repeats an
    /// address kind the last one wins.
    pub fn from_xml_host(host: &XmlHost) -> Option<Self> {
        let mut record = HostRecord::default();
        for address in &host.addresses {
            match address.kind() {
                AddressKind::Ipv4 => record.ip = address.addr.clone(),
                AddressKind::Mac => record.mac = address.addr.clone(),
                AddressKind::Ipv6 | AddressKind::Other => {}
            }
        }
        if record.ip.is_empty() {
            return None;
        }
        record.hostname = match host.first_hostname() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => UNKNOWN_HOSTNAME.to_string(),
        };
        Some(record)
    }
}

/// Decode a raw nmap report into host records, keeping document order.
pub fn normalize(report: &RawScanReport) -> Result<Vec<HostRecord>, DecodeError> {
    let document = ScanDocument::from_bytes(report.as_bytes())?;
    log_run_stats(&document);
    let hosts = document
        .hosts
        .iter()
        .filter_map(HostRecord::from_xml_host)
        .collect::<Vec<HostRecord>>();
    tracing::debug!(
        "{} host entries, {} with an ipv4 address",
        document.hosts.len(),
        hosts.len()
    );
    Ok(hosts)
}

fn log_run_stats(document: &ScanDocument) {
    let Some(runstats) = &document.runstats else {
        return;
    };
    if let Some(finished) = &runstats.finished {
        tracing::info!(
            "scan finished in {}s: {}",
            finished.elapsed,
            finished.summary
        );
    }
    if let Some(counts) = &runstats.host_counts {
        tracing::info!(
            "hosts up: {}, down: {}, total: {}",
            counts.up,
            counts.down,
            counts.total
        );
    }
}
