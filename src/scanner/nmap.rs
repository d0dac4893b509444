use crate::error::InvocationError;
use crate::scanner::{HostDiscoverer, RawScanReport};
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Host discovery backed by the `nmap` binary.
#[derive(Debug, Clone)]
pub struct Nmap {
    program: PathBuf,
    timeout: Option<Duration>,
}

impl Nmap {
    pub fn new(program: impl Into<PathBuf>, timeout: Option<Duration>) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    /// Ping scan only (`-sn`), XML report on stdout (`-oX -`).
    pub fn arguments(subnet: &str, verbose: bool) -> Vec<&str> {
        let mut arguments = Vec::with_capacity(5);
        if verbose {
            arguments.push("-v");
        }
        arguments.extend(["-sn", subnet, "-oX", "-"]);
        arguments
    }
}

impl HostDiscoverer for Nmap {
    async fn discover(&self, subnet: &str, verbose: bool) -> Result<RawScanReport, InvocationError> {
        let arguments = Nmap::arguments(subnet, verbose);
        tracing::info!("running: {} {}", self.program.display(), arguments.join(" "));

        let child = Command::new(&self.program)
            .args(&arguments)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(InvocationError::Spawn)?;

        let output = match self.timeout {
            None => child.wait_with_output().await,
            Some(limit) => match timeout(limit, child.wait_with_output()).await {
                Ok(output) => output,
                Err(_elapsed) => return Err(InvocationError::TimedOut(limit)),
            },
        }
        .map_err(InvocationError::Capture)?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(InvocationError::Exit {
                status: output.status,
                stderr,
            });
        }
        if !stderr.is_empty() {
            tracing::debug!("nmap stderr: {}", stderr);
        }
        tracing::debug!("captured {} bytes of scan report", output.stdout.len());
        Ok(RawScanReport::from(output.stdout))
    }
}

#[cfg(test)]
mod nmap_test {
    use super::*;

    #[test]
    fn arguments_test() {
        assert_eq!(
            Nmap::arguments("10.0.0.0/24", false),
            vec!["-sn", "10.0.0.0/24", "-oX", "-"]
        );
        assert_eq!(
            Nmap::arguments("10.0.0.0/24", true),
            vec!["-v", "-sn", "10.0.0.0/24", "-oX", "-"]
        );
    }

    #[tokio::test]
    async fn missing_program_fails_to_spawn() {
        let nmap = Nmap::new("/nonexistent/path/to/nmap", None);
        let result = nmap.discover("10.0.0.0/24", false).await;
        assert!(matches!(result, Err(InvocationError::Spawn(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_an_error() {
        let nmap = Nmap::new("false", None);
        let result = nmap.discover("10.0.0.0/24", false).await;
        assert!(matches!(result, Err(InvocationError::Exit { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn stdout_is_captured() {
        let nmap = Nmap::new("echo", Some(Duration::from_secs(10)));
        let report = nmap.discover("10.0.0.0/24", true).await.unwrap();
        assert_eq!(report.as_bytes(), b"-v -sn 10.0.0.0/24 -oX -\n");
    }
}
