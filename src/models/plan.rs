//! Plan-level result records.

use super::{AddressBlock, AllocatedSubnet, BlockUtilization, VlanSubnet};
use serde::{Deserialize, Serialize};

/// Summary of the smallest supernet enclosing a set of subnets.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SupernetSummary {
    /// Prefix length of the enclosing power-of-two supernet.
    pub cidr_prefix: u8,
    /// Size of the supernet in addresses.
    pub total_size: u64,
    /// Sum of the subnet sizes.
    pub used_size: u64,
    /// `used_size / total_size * 100` - fit within the power-of-two supernet.
    pub efficiency: f64,
    /// Packing density across the actually allocated address span.
    ///
    /// 100.0 until every subnet has an assigned address.
    pub range_efficiency: f64,
}

/// A complete single-range plan: placed subnets plus their supernet summary.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NetworkPlan {
    /// Base address the plan was packed from.
    pub base: String,
    /// Subnets in allocation order, each carrying its original request index.
    pub subnets: Vec<AllocatedSubnet>,
    /// Aggregate metrics over the placed subnets.
    pub supernet: SupernetSummary,
}

/// Outcome of fitting subnets across an inventory of address blocks.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AutoFitResult {
    /// True when every subnet was placed.
    pub success: bool,
    /// Blocks the fit ran against, in validated (capacity-sorted) order.
    pub blocks: Vec<AddressBlock>,
    /// Placed subnets with their subnet and block indices.
    pub allocations: Vec<AllocatedSubnet>,
    /// Subnets no block could hold, in processing order.
    pub unallocated_subnets: Vec<VlanSubnet>,
    /// Per-block usage, one entry per input block.
    pub block_utilizations: Vec<BlockUtilization>,
    /// Non-fatal diagnostics (low utilization, unused blocks).
    pub warnings: Vec<String>,
    /// Placement failures, one per unallocated subnet.
    pub errors: Vec<String>,
}
