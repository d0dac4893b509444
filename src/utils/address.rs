use crate::error::ArgumentError;
use ipnet::Ipv4Net;

/// Validate a subnet argument in CIDR notation, e.g. `192.168.1.0/24`.
///
/// Host bits may be set (`10.0.0.5/24` is accepted); the returned network
/// keeps them, use [`Ipv4Net::trunc`] for the network address.
pub fn parse_subnet(subnet: &str) -> Result<Ipv4Net, ArgumentError> {
    if subnet.is_empty() {
        return Err(ArgumentError::EmptySubnet);
    }
    subnet
        .parse::<Ipv4Net>()
        .map_err(|source| ArgumentError::InvalidCidr {
            subnet: subnet.to_string(),
            source,
        })
}
