//! IPv4 address-space planning engine.
//!
//! Sizes subnets from device counts, packs them into address ranges with
//! correct CIDR-boundary alignment, and reports how tightly the allocation
//! uses the space. Pure computation over in-memory values: no I/O, no shared
//! state, every call independent.

pub mod error;
pub mod models;
pub mod output;
pub mod planning;

pub use error::{PlanError, Result};

use models::{AutoFitResult, NetworkPlan, SubnetRequest, VlanSubnet};

/// Size each request and pack everything into one contiguous range.
///
/// Subnets are placed largest-first to minimize alignment padding; each
/// placed subnet's `subnet_index` points back at the request it came from.
pub fn plan_single_range(base: &str, requests: &[SubnetRequest]) -> Result<NetworkPlan> {
    if requests.is_empty() {
        return Err(PlanError::EmptyInput("subnets"));
    }
    log::info!(
        "planning {count} subnets from base {base}",
        count = requests.len()
    );

    let mut sized: Vec<(usize, models::SubnetSize)> = requests
        .iter()
        .enumerate()
        .map(|(i, r)| (i, planning::size_subnet(r.expected_devices, r.growth_percent)))
        .collect();
    sized.sort_by(|a, b| b.1.subnet_size.cmp(&a.1.subnet_size));

    let sizes: Vec<models::SubnetSize> = sized.iter().map(|(_, s)| *s).collect();
    let mut subnets = planning::allocate(base, &sizes)?;
    // allocate() indexes into its own input order; map back to request order
    for allocated in subnets.iter_mut() {
        allocated.subnet_index = sized[allocated.subnet_index].0;
    }

    let supernet = planning::summarize(&subnets)?;
    Ok(NetworkPlan {
        base: base.trim().to_string(),
        subnets,
        supernet,
    })
}

/// Size each request and best-fit the results into a block inventory.
///
/// `block_text` is newline-delimited CIDR blocks. An invalid inventory fails
/// with the first validation error; callers that want the complete error
/// list should run [`planning::parse_blocks`] themselves.
pub fn plan_auto_fit(block_text: &str, requests: &[SubnetRequest]) -> Result<AutoFitResult> {
    if requests.is_empty() {
        return Err(PlanError::EmptyInput("subnets"));
    }

    let outcome = planning::parse_blocks(block_text);
    if !outcome.valid {
        let first = outcome
            .errors
            .into_iter()
            .next()
            .unwrap_or(PlanError::EmptyInput("blocks"));
        return Err(first);
    }
    log::info!(
        "fitting {count} subnets into {blocks} blocks",
        count = requests.len(),
        blocks = outcome.blocks.len()
    );

    let subnets: Vec<VlanSubnet> = requests
        .iter()
        .map(|r| VlanSubnet {
            vlan_id: r.vlan_id,
            size: planning::size_subnet(r.expected_devices, r.growth_percent),
        })
        .collect();

    planning::auto_fit(&subnets, &outcome.blocks)
}
