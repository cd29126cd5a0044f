//! Best-fit allocation across multiple address blocks.
//!
//! Subnets are processed grouped by VLAN and largest-first within a VLAN,
//! then each is placed in the qualifying block with the least remaining
//! capacity. Small subnets land in small blocks, keeping large blocks intact
//! for the demands that need them.

use crate::error::{PlanError, Result};
use crate::models::{
    AddressBlock, AllocatedSubnet, AutoFitResult, BlockUtilization, Ipv4, VlanSubnet,
};
use crate::planning::sequential::align_up;

/// Blocks used below this percentage (but above zero) draw a warning.
const LOW_UTILIZATION_PERCENT: f64 = 50.0;

/// Fit sized subnets into a validated block inventory.
///
/// A subnet that fits nowhere is reported and skipped; the rest of the batch
/// is still attempted so the caller sees every failure at once.
pub fn auto_fit(subnets: &[VlanSubnet], blocks: &[AddressBlock]) -> Result<AutoFitResult> {
    if subnets.is_empty() {
        return Err(PlanError::EmptyInput("subnets"));
    }
    if blocks.is_empty() {
        return Err(PlanError::EmptyInput("blocks"));
    }

    // Group by VLAN, largest-first within a VLAN. Engineers expect
    // same-VLAN-family segments adjacent in address space; packing still
    // wants the biggest demands placed first. Stable sort keeps input order
    // beyond that.
    let mut order: Vec<usize> = (0..subnets.len()).collect();
    order.sort_by(|&a, &b| {
        subnets[a]
            .vlan_id
            .cmp(&subnets[b].vlan_id)
            .then(subnets[b].size.subnet_size.cmp(&subnets[a].size.subnet_size))
    });

    // Each block tracks its own watermark; alignment padding inside a block
    // is skipped exactly like the sequential allocator does.
    let mut cursors: Vec<u64> = blocks.iter().map(|b| b.start as u64).collect();

    let mut allocations = Vec::new();
    let mut unallocated = Vec::new();
    let mut errors = Vec::new();

    for &index in &order {
        let subnet = &subnets[index];
        let size = subnet.size.subnet_size as u64;

        match best_fit_block(blocks, &cursors, size) {
            Some(block_index) => {
                let aligned = align_up(cursors[block_index], size);
                allocations.push(AllocatedSubnet {
                    size: subnet.size,
                    network: Ipv4::from_int(aligned as u32, subnet.size.cidr_prefix),
                    subnet_index: index,
                    block_index: Some(block_index),
                });
                cursors[block_index] = aligned + size;
                log::debug!(
                    "placed subnet {index} (vlan {vlan}, {size} addresses) in block {block}",
                    vlan = subnet.vlan_id,
                    block = blocks[block_index]
                );
            }
            None => {
                errors.push(format!("insufficient capacity for subnet {index}"));
                unallocated.push(*subnet);
            }
        }
    }

    let (block_utilizations, warnings) = utilization_report(blocks, &allocations);

    Ok(AutoFitResult {
        success: unallocated.is_empty(),
        blocks: blocks.to_vec(),
        allocations,
        unallocated_subnets: unallocated,
        block_utilizations,
        warnings,
        errors,
    })
}

/// Pick the qualifying block with the smallest remaining capacity.
///
/// A block qualifies when, after aligning its watermark up to the subnet
/// size, the subnet still ends inside the block. Ties break on block index
/// ascending.
fn best_fit_block(blocks: &[AddressBlock], cursors: &[u64], size: u64) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (i, block) in blocks.iter().enumerate() {
        let aligned = align_up(cursors[i], size);
        if aligned + size - 1 > block.end as u64 {
            continue;
        }
        let remaining = block.end as u64 + 1 - cursors[i];
        match best {
            Some((_, best_remaining)) if remaining >= best_remaining => {}
            _ => best = Some((i, remaining)),
        }
    }
    best.map(|(i, _)| i)
}

/// Per-block usage plus diagnostic warnings.
///
/// Every input block gets an entry, including blocks that received nothing.
fn utilization_report(
    blocks: &[AddressBlock],
    allocations: &[AllocatedSubnet],
) -> (Vec<BlockUtilization>, Vec<String>) {
    let mut utilizations = Vec::with_capacity(blocks.len());
    let mut warnings = Vec::new();

    for (i, block) in blocks.iter().enumerate() {
        let placed: Vec<&AllocatedSubnet> = allocations
            .iter()
            .filter(|a| a.block_index == Some(i))
            .collect();
        let used_capacity: u32 = placed.iter().map(|a| a.size.subnet_size).sum();
        let utilization_percent = used_capacity as f64 / block.total_capacity as f64 * 100.0;

        if utilization_percent > 0.0 && utilization_percent < LOW_UTILIZATION_PERCENT {
            warnings.push(format!(
                "block {block} is only {utilization_percent:.1}% utilized"
            ));
        }

        utilizations.push(BlockUtilization {
            block_index: i,
            used_capacity,
            remaining_capacity: block.total_capacity - used_capacity,
            utilization_percent,
            allocated_subnets: placed.len(),
        });
    }

    let any_used = utilizations.iter().any(|u| u.allocated_subnets > 0);
    if any_used {
        for u in &utilizations {
            if u.allocated_subnets == 0 {
                warnings.push(format!("block {} received no allocations", blocks[u.block_index]));
            }
        }
    }

    (utilizations, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::blocks::parse_blocks;

    fn demand(vlan_id: u16, subnet_size: u32) -> VlanSubnet {
        VlanSubnet {
            vlan_id,
            size: crate::models::SubnetSize {
                expected_devices: 0,
                planned_devices: 0,
                cidr_prefix: 32 - subnet_size.trailing_zeros() as u8,
                subnet_size,
                usable_hosts: subnet_size - 2,
            },
        }
    }

    fn inventory(text: &str) -> Vec<AddressBlock> {
        let outcome = parse_blocks(text);
        assert!(outcome.valid, "bad test inventory: {:?}", outcome.errors);
        outcome.blocks
    }

    #[test]
    fn test_best_fit_prefers_smallest_block() {
        // one /26 demand against a /22 and a /24: the /24 wins
        let blocks = inventory("10.1.244.0/22\n10.1.241.0/24\n");
        let result = auto_fit(&[demand(10, 64)], &blocks).unwrap();
        assert!(result.success);
        assert_eq!(result.allocations.len(), 1);
        let placed_in = result.allocations[0].block_index.unwrap();
        assert_eq!(blocks[placed_in].network.to_string(), "10.1.241.0/24");
        assert_eq!(result.allocations[0].network.to_string(), "10.1.241.0/26");
    }

    #[test]
    fn test_overflow_reported_without_abort() {
        // two full /24 demands against a single /24 block
        let blocks = inventory("10.1.241.0/24\n");
        let result = auto_fit(&[demand(10, 256), demand(20, 256)], &blocks).unwrap();
        assert!(!result.success);
        assert_eq!(result.allocations.len(), 1);
        assert_eq!(result.unallocated_subnets.len(), 1);
        assert_eq!(result.errors, vec!["insufficient capacity for subnet 1"]);
    }

    #[test]
    fn test_vlan_grouping_then_largest_first() {
        let blocks = inventory("10.1.0.0/22\n");
        // input order scrambled: vlan 20 small, vlan 10 small, vlan 10 large
        let subnets = [demand(20, 64), demand(10, 64), demand(10, 256)];
        let result = auto_fit(&subnets, &blocks).unwrap();
        assert!(result.success);
        // processing order: vlan 10 /24 first, vlan 10 /26, then vlan 20 /26
        assert_eq!(result.allocations[0].subnet_index, 2);
        assert_eq!(result.allocations[1].subnet_index, 1);
        assert_eq!(result.allocations[2].subnet_index, 0);
        assert_eq!(result.allocations[0].network.to_string(), "10.1.0.0/24");
        assert_eq!(result.allocations[1].network.to_string(), "10.1.1.0/26");
        assert_eq!(result.allocations[2].network.to_string(), "10.1.1.64/26");
    }

    #[test]
    fn test_best_fit_tie_breaks_on_block_index() {
        let blocks = inventory("10.2.0.0/24\n10.1.0.0/24\n");
        assert_eq!(blocks[0].network.to_string(), "10.2.0.0/24");
        let result = auto_fit(&[demand(10, 64)], &blocks).unwrap();
        assert_eq!(result.allocations[0].block_index, Some(0));
    }

    #[test]
    fn test_private_cursor_alignment_per_block() {
        // vlan order forces the /26 in first; the /25 must then skip the
        // padding up to the .128 boundary
        let blocks = inventory("10.1.241.0/24\n");
        let result = auto_fit(&[demand(10, 64), demand(20, 128)], &blocks).unwrap();
        assert!(result.success);
        assert_eq!(result.allocations[0].network.to_string(), "10.1.241.0/26");
        assert_eq!(result.allocations[1].network.to_string(), "10.1.241.128/25");
    }

    #[test]
    fn test_utilization_reported_for_every_block() {
        let blocks = inventory("10.1.244.0/22\n10.1.241.0/24\n");
        let result = auto_fit(&[demand(10, 64)], &blocks).unwrap();
        assert_eq!(result.block_utilizations.len(), 2);
        let unused = &result.block_utilizations[0];
        assert_eq!(unused.used_capacity, 0);
        assert_eq!(unused.remaining_capacity, 1024);
        assert_eq!(unused.utilization_percent, 0.0);
        let used = &result.block_utilizations[1];
        assert_eq!(used.used_capacity, 64);
        assert_eq!(used.remaining_capacity, 192);
        assert_eq!(used.allocated_subnets, 1);
        assert!((used.utilization_percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_warnings_low_utilization_and_unused_block() {
        let blocks = inventory("10.1.244.0/22\n10.1.241.0/24\n");
        let result = auto_fit(&[demand(10, 64)], &blocks).unwrap();
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("10.1.241.0/24") && w.contains("25.0%")));
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("10.1.244.0/22") && w.contains("no allocations")));
    }

    #[test]
    fn test_no_unused_warning_when_nothing_placed() {
        let blocks = inventory("10.1.241.0/30\n");
        let result = auto_fit(&[demand(10, 256)], &blocks).unwrap();
        assert!(!result.success);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let blocks = inventory("10.1.241.0/24\n");
        assert_eq!(
            auto_fit(&[], &blocks).unwrap_err(),
            PlanError::EmptyInput("subnets")
        );
        assert_eq!(
            auto_fit(&[demand(1, 64)], &[]).unwrap_err(),
            PlanError::EmptyInput("blocks")
        );
    }

    #[test]
    fn test_allocations_never_overlap() {
        let blocks = inventory("10.1.244.0/22\n10.1.241.0/24\n10.2.0.0/26\n");
        let subnets = [
            demand(10, 256),
            demand(10, 64),
            demand(20, 512),
            demand(30, 4),
            demand(30, 128),
        ];
        let result = auto_fit(&subnets, &blocks).unwrap();
        assert!(result.success);
        for (i, a) in result.allocations.iter().enumerate() {
            assert_eq!(a.start() % a.size.subnet_size, 0);
            let block = &blocks[a.block_index.unwrap()];
            assert!(a.start() >= block.start && a.end() <= block.end);
            for b in result.allocations.iter().skip(i + 1) {
                assert!(
                    a.end() < b.start() || b.end() < a.start(),
                    "{} intersects {}",
                    a.network,
                    b.network
                );
            }
        }
    }
}
