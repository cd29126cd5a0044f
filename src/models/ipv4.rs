//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] struct for representing IPv4 networks with prefix
//! lengths, along with the bit arithmetic the allocators are built on. All
//! operations work on the 32-bit integer form of an address; prefix lengths
//! 0 and 32 are valid edge cases, not errors.

use crate::error::{PlanError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_planner::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(PlanError::Format(format!("prefix /{len} is too long")))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Convert a CIDR prefix length to its wildcard (inverse) mask as u32.
pub fn get_wildcard_mask(len: u8) -> Result<u32> {
    Ok(!get_cidr_mask(len)?)
}

/// Get the network address for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// First usable host address in a subnet.
///
/// For /31 and /32 there are no reserved network/broadcast addresses, so the
/// network address itself is returned.
pub fn host_min(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let network = network_addr(addr, len)?;
    if len >= MAX_LENGTH - 1 {
        Ok(network)
    } else {
        Ok(Ipv4Addr::from(u32::from(network) + 1))
    }
}

/// Last usable host address in a subnet.
pub fn host_max(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let broadcast = broadcast_addr(addr, len)?;
    if len >= MAX_LENGTH - 1 {
        Ok(broadcast)
    } else {
        Ok(Ipv4Addr::from(u32::from(broadcast) - 1))
    }
}

/// Format a prefix length as a dotted-quad netmask (e.g. 24 -> 255.255.255.0).
pub fn netmask_quad(len: u8) -> Result<Ipv4Addr> {
    Ok(Ipv4Addr::from(get_cidr_mask(len)?))
}

/// Format a prefix length as a dotted-quad wildcard mask (e.g. 24 -> 0.0.0.255).
pub fn wildcard_quad(len: u8) -> Result<Ipv4Addr> {
    Ok(Ipv4Addr::from(get_wildcard_mask(len)?))
}

/// Parse a bare dotted-quad address string.
pub fn parse_addr(s: &str) -> Result<Ipv4Addr> {
    Ipv4Addr::from_str(s.trim()).map_err(|_| PlanError::Format(format!("invalid IP address {s}")))
}

/// IPv4 network with CIDR notation support.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(|e| de::Error::custom(format!("{e}")))
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(PlanError::Format(format!(
                "invalid address/prefix {addr_cidr}"
            )));
        }
        let addr = parse_addr(parts[0])?;
        let mask: u8 = parts[1]
            .parse()
            .map_err(|_| PlanError::Format(format!("invalid prefix length {}", parts[1])))?;
        if mask > MAX_LENGTH {
            return Err(PlanError::Format(format!("prefix /{mask} is too long")));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Build an [`Ipv4`] from an integer network address and prefix length.
    pub fn from_int(addr: u32, mask: u8) -> Ipv4 {
        Ipv4 {
            addr: Ipv4Addr::from(addr),
            mask,
        }
    }

    /// Number of addresses covered by this prefix.
    pub fn capacity(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        network_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating network address for {self}: {e}"))
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address for {self}: {e}"))
    }

    /// First usable host address.
    pub fn host_min(&self) -> Ipv4Addr {
        host_min(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating host range for {self}: {e}"))
    }

    /// Last usable host address.
    pub fn host_max(&self) -> Ipv4Addr {
        host_max(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating host range for {self}: {e}"))
    }

    /// Dotted-quad netmask for this prefix.
    pub fn netmask(&self) -> Ipv4Addr {
        netmask_quad(self.mask).unwrap_or_else(|e| panic!("Error formatting netmask: {e}"))
    }

    /// Dotted-quad wildcard mask for this prefix.
    pub fn wildcard(&self) -> Ipv4Addr {
        wildcard_quad(self.mask).unwrap_or_else(|e| panic!("Error formatting wildcard: {e}"))
    }

    /// Check if an IP address is contained within this subnet.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl PartialEq for Ipv4 {
    fn eq(&self, other: &Ipv4) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl PartialOrd for Ipv4 {
    fn partial_cmp(&self, other: &Ipv4) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
