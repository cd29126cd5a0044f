//! Subnet sizing and allocation records.

use super::Ipv4;
use serde::{Deserialize, Serialize};

/// A network segment as requested by the engineer.
///
/// Device counts and growth percentage are validated by the caller before
/// they reach the engine (growth in 0-300, devices >= 1).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SubnetRequest {
    /// Segment name for display purposes.
    pub name: String,
    /// VLAN identifier tagging this segment.
    pub vlan_id: u16,
    /// Devices expected on the segment today.
    pub expected_devices: u32,
    /// Growth margin in percent.
    pub growth_percent: u32,
}

/// The computed size of a subnet, before any address is assigned.
///
/// `subnet_size` is always the smallest power of two that holds
/// `planned_devices` plus the network and broadcast addresses.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetSize {
    /// Devices expected on the segment today.
    pub expected_devices: u32,
    /// Device count after applying the growth margin.
    pub planned_devices: u32,
    /// CIDR prefix length for the chosen size.
    pub cidr_prefix: u8,
    /// Total addresses in the subnet (power of two).
    pub subnet_size: u32,
    /// Addresses usable by hosts (`subnet_size - 2`).
    pub usable_hosts: u32,
}

/// A sized subnet tagged with its VLAN, ready for placement.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VlanSubnet {
    /// VLAN identifier of the segment.
    pub vlan_id: u16,
    /// Computed size of the segment.
    pub size: SubnetSize,
}

/// A subnet with its network address assigned by an allocator.
///
/// The network address is always a multiple of `size.subnet_size` and no two
/// allocated subnets from the same run intersect.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocatedSubnet {
    /// Computed size of the subnet.
    pub size: SubnetSize,
    /// Assigned network address and prefix.
    pub network: Ipv4,
    /// Index of the subnet in the caller's input order.
    pub subnet_index: usize,
    /// Index of the block it was placed in (None for single-range plans).
    pub block_index: Option<usize>,
}

impl AllocatedSubnet {
    /// Integer form of the first address in the subnet.
    pub fn start(&self) -> u32 {
        u32::from(self.network.addr)
    }

    /// Integer form of the last address in the subnet.
    pub fn end(&self) -> u32 {
        u32::from(self.network.addr) + (self.size.subnet_size - 1)
    }
}
