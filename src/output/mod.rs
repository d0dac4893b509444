use crate::error::RenderError;
use crate::scanner::host::HostRecord;
use std::io::Write;

/// Write the hosts as a single-line JSON array.
pub fn write_json<W: Write>(hosts: &[HostRecord], mut writer: W) -> Result<(), RenderError> {
    let json = serde_json::to_string(hosts)?;
    writeln!(writer, "{}", json)?;
    writer.flush()?;
    Ok(())
}

/// Write hostname, IP and (when known) MAC on their own lines, with a blank
/// line after every host.
pub fn write_bare<W: Write>(hosts: &[HostRecord], mut writer: W) -> Result<(), RenderError> {
    for host in hosts {
        writeln!(writer, "{}", host.hostname)?;
        writeln!(writer, "{}", host.ip)?;
        if !host.mac.is_empty() {
            writeln!(writer, "{}", host.mac)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
