//! Domain models for the subnet planner.
//!
//! This module contains the core data structures used throughout the engine:
//! - [`Ipv4`] - IPv4 network with CIDR notation support
//! - [`SubnetSize`], [`VlanSubnet`], [`AllocatedSubnet`] - sized and placed segments
//! - [`AddressBlock`], [`BlockUtilization`] - block inventory records
//! - [`NetworkPlan`], [`AutoFitResult`], [`SupernetSummary`] - plan results

mod block;
mod ipv4;
mod plan;
mod subnet;

// Re-export public types
pub use block::{AddressBlock, BlockUtilization};
pub use ipv4::{
    broadcast_addr, get_cidr_mask, get_wildcard_mask, host_max, host_min, netmask_quad,
    network_addr, parse_addr, wildcard_quad, Ipv4, MAX_LENGTH,
};
pub use plan::{AutoFitResult, NetworkPlan, SupernetSummary};
pub use subnet::{AllocatedSubnet, SubnetRequest, SubnetSize, VlanSubnet};
