//! Address block inventory records.

use super::Ipv4;
use serde::{Deserialize, Serialize};

/// A pre-existing address block available for allocation.
///
/// Built once from a validated CIDR line and never mutated; allocation state
/// lives in the allocator, not here.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressBlock {
    /// Network address and prefix of the block.
    pub network: Ipv4,
    /// Total addresses in the block.
    pub total_capacity: u32,
    /// Integer form of the first address.
    pub start: u32,
    /// Integer form of the last address.
    pub end: u32,
}

impl AddressBlock {
    /// Derive a block from an already-validated network CIDR.
    pub fn from_network(network: Ipv4) -> AddressBlock {
        let start = u32::from(network.addr);
        let total_capacity = network.capacity() as u32;
        AddressBlock {
            network,
            total_capacity,
            start,
            end: start + (total_capacity - 1),
        }
    }
}

impl std::fmt::Display for AddressBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.network)
    }
}

/// How much of a block an auto-fit run consumed.
///
/// Present for every input block, whether or not it received an allocation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BlockUtilization {
    /// Index of the block in the caller's input order.
    pub block_index: usize,
    /// Sum of subnet sizes placed in the block.
    pub used_capacity: u32,
    /// `total_capacity - used_capacity`.
    pub remaining_capacity: u32,
    /// `used_capacity / total_capacity * 100`.
    pub utilization_percent: f64,
    /// Number of subnets placed in the block.
    pub allocated_subnets: usize,
}
