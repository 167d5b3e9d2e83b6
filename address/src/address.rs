use crate::error::{AddressError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use tracing::error;

/// Host part of an [`Address`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Host {
    Ipv4([u8; 4]),
    Ipv6([u8; 16]),
    /// Unresolved domain name, never validated here
    Domain(String),
}

impl Host {
    fn kind(&self) -> &'static str {
        match self {
            Host::Ipv4(_) => "an IPv4",
            Host::Ipv6(_) => "an IPv6",
            Host::Domain(_) => "a domain",
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::Ipv4(octets) => write!(f, "{}", Ipv4Addr::from(*octets)),
            Host::Ipv6(octets) => write!(f, "{}", Ipv6Addr::from(*octets)),
            Host::Domain(domain) => f.write_str(domain),
        }
    }
}

/// A network endpoint: an IPv4, IPv6 or domain host plus a port.
///
/// The value is immutable once built. Use [`Address::host`] to match on the
/// variant; the shortcut accessors [`Address::ip_bytes`], [`Address::ip`] and
/// [`Address::domain`] panic when called on the wrong variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    host: Host,
    port: u16,
}

impl Address {
    /// Build an address from raw IP octets.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is neither 4 nor 16 bytes long. Use
    /// [`Address::try_from_ip_bytes`] when the length is not known to be valid.
    pub fn from_ip_bytes(bytes: &[u8], port: u16) -> Self {
        match Self::try_from_ip_bytes(bytes, port) {
            Ok(address) => address,
            Err(e) => {
                error!("Unknown IP format {:?}: {}", bytes, e);
                panic!("{}", e);
            }
        }
    }

    /// Build an address from raw IP octets, rejecting any length other than 4 or 16.
    pub fn try_from_ip_bytes(bytes: &[u8], port: u16) -> Result<Self> {
        let host = if let Ok(octets) = <[u8; 4]>::try_from(bytes) {
            Host::Ipv4(octets)
        } else if let Ok(octets) = <[u8; 16]>::try_from(bytes) {
            Host::Ipv6(octets)
        } else {
            return Err(AddressError::InvalidIpLength(bytes.len()));
        };
        Ok(Self { host, port })
    }

    pub fn from_ip(ip: IpAddr, port: u16) -> Self {
        let host = match ip {
            IpAddr::V4(v4) => Host::Ipv4(v4.octets()),
            IpAddr::V6(v6) => Host::Ipv6(v6.octets()),
        };
        Self { host, port }
    }

    pub fn from_domain(domain: impl Into<String>, port: u16) -> Self {
        Self {
            host: Host::Domain(domain.into()),
            port,
        }
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Port in network byte order
    pub fn port_bytes(&self) -> [u8; 2] {
        self.port.to_be_bytes()
    }

    pub fn is_ipv4(&self) -> bool {
        matches!(self.host, Host::Ipv4(_))
    }

    pub fn is_ipv6(&self) -> bool {
        matches!(self.host, Host::Ipv6(_))
    }

    pub fn is_domain(&self) -> bool {
        matches!(self.host, Host::Domain(_))
    }

    /// Raw IP octets: 4 bytes for IPv4, 16 bytes for IPv6.
    ///
    /// # Panics
    ///
    /// Panics if this is a domain address.
    pub fn ip_bytes(&self) -> &[u8] {
        match &self.host {
            Host::Ipv4(octets) => octets.as_slice(),
            Host::Ipv6(octets) => octets.as_slice(),
            Host::Domain(_) => self.mismatch("ip_bytes"),
        }
    }

    /// # Panics
    ///
    /// Panics if this is a domain address.
    pub fn ip(&self) -> IpAddr {
        match &self.host {
            Host::Ipv4(octets) => IpAddr::V4(Ipv4Addr::from(*octets)),
            Host::Ipv6(octets) => IpAddr::V6(Ipv6Addr::from(*octets)),
            Host::Domain(_) => self.mismatch("ip"),
        }
    }

    /// # Panics
    ///
    /// Panics if this is an IPv4 or IPv6 address.
    pub fn domain(&self) -> &str {
        match &self.host {
            Host::Domain(domain) => domain.as_str(),
            _ => self.mismatch("domain"),
        }
    }

    /// Socket address for IP hosts, `None` for a domain (never resolved here).
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match &self.host {
            Host::Domain(_) => None,
            _ => Some(SocketAddr::new(self.ip(), self.port)),
        }
    }

    /// Human readable `host:port` form, IPv6 hosts in brackets.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn mismatch(&self, accessor: &str) -> ! {
        panic!(
            "called `Address::{}()` on {} address: {}",
            accessor,
            self.host.kind(),
            self
        )
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.host {
            Host::Ipv6(_) => write!(f, "[{}]:{}", self.host, self.port),
            _ => write!(f, "{}:{}", self.host, self.port),
        }
    }
}

impl From<SocketAddr> for Address {
    fn from(addr: SocketAddr) -> Self {
        Self::from_ip(addr.ip(), addr.port())
    }
}

impl From<SocketAddrV4> for Address {
    fn from(addr: SocketAddrV4) -> Self {
        Self {
            host: Host::Ipv4(addr.ip().octets()),
            port: addr.port(),
        }
    }
}

impl From<SocketAddrV6> for Address {
    fn from(addr: SocketAddrV6) -> Self {
        Self {
            host: Host::Ipv6(addr.ip().octets()),
            port: addr.port(),
        }
    }
}

impl From<(IpAddr, u16)> for Address {
    fn from((ip, port): (IpAddr, u16)) -> Self {
        Self::from_ip(ip, port)
    }
}
