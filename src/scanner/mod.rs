use crate::error::{Error, InvocationError};
use crate::scanner::host::{normalize, HostRecord};

pub mod host;
pub mod nmap;
pub mod report;

/// Raw report bytes produced by a discovery tool, consumed once by [`normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawScanReport(Vec<u8>);

impl RawScanReport {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for RawScanReport {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Something that can probe a subnet and hand back an nmap XML report.
pub trait HostDiscoverer {
    async fn discover(&self, subnet: &str, verbose: bool) -> Result<RawScanReport, InvocationError>;
}

#[derive(Debug)]
pub struct Scanner<D> {
    discoverer: D,
    subnet: String,
    verbose: bool,
}

impl<D: HostDiscoverer> Scanner<D> {
    pub fn new(discoverer: D, subnet: String, verbose: bool) -> Self {
        Self {
            discoverer,
            subnet,
            verbose,
        }
    }

    /// Scan the subnet and return the hosts that answered with an ipv4 address.
    pub async fn run(&self) -> Result<Vec<HostRecord>, Error> {
        let report = self.discoverer.discover(&self.subnet, self.verbose).await?;
        let hosts = normalize(&report)?;
        tracing::info!("{} hosts discovered on {}", hosts.len(), self.subnet);
        Ok(hosts)
    }
}

#[cfg(test)]
mod scanner_test {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct CannedDiscoverer {
        report: &'static str,
        calls: RefCell<Vec<(String, bool)>>,
    }

    impl HostDiscoverer for CannedDiscoverer {
        async fn discover(
            &self,
            subnet: &str,
            verbose: bool,
        ) -> Result<RawScanReport, InvocationError> {
            self.calls.borrow_mut().push((subnet.to_string(), verbose));
            Ok(RawScanReport::from(self.report.as_bytes().to_vec()))
        }
    }

    struct FailingDiscoverer;

    impl HostDiscoverer for FailingDiscoverer {
        async fn discover(&self, _: &str, _: bool) -> Result<RawScanReport, InvocationError> {
            Err(InvocationError::Spawn(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "nmap",
            )))
        }
    }

    #[tokio::test]
    async fn run_normalizes_discovered_report() {
        let discoverer = CannedDiscoverer {
            report: r#"<nmaprun>
                <host>
                    <address addr="192.168.0.10" addrtype="ipv4"/>
                    <hostnames><hostname name="nas" type="PTR"/></hostnames>
                </host>
                <host><address addr="aa:bb:cc:dd:ee:ff" addrtype="mac"/></host>
            </nmaprun>"#,
            ..Default::default()
        };
        let scanner = Scanner::new(discoverer, "192.168.0.0/24".to_string(), true);
        let hosts = scanner.run().await.unwrap();
        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].hostname, "nas");
        assert_eq!(hosts[0].ip, "192.168.0.10");
        assert_eq!(
            scanner.discoverer.calls.borrow().as_slice(),
            &[("192.168.0.0/24".to_string(), true)]
        );
    }

    #[tokio::test]
    async fn run_maps_failures_to_exit_codes() {
        let scanner = Scanner::new(FailingDiscoverer, "10.0.0.0/8".to_string(), false);
        let error = scanner.run().await.unwrap_err();
        assert_eq!(error.exit_code(), 4);

        let discoverer = CannedDiscoverer {
            report: "<nmaprun><host>",
            ..Default::default()
        };
        let scanner = Scanner::new(discoverer, "10.0.0.0/8".to_string(), false);
        let error = scanner.run().await.unwrap_err();
        assert_eq!(error.exit_code(), 5);
    }
}
