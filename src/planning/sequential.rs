//! Sequential allocation from a single base address.
//!
//! Assigns boundary-aligned, non-overlapping network addresses by advancing
//! an integer cursor. The caller controls the ordering (typically
//! largest-first); skipped alignment padding is never reused. Correctness
//! over minimal span: multi-block packing is the auto-fit allocator's job.

use crate::error::{PlanError, Result};
use crate::models::{parse_addr, AllocatedSubnet, Ipv4, SubnetSize};

/// Address space is 32 bits; a cursor past this cannot place anything.
const ADDRESS_SPACE_END: u64 = 1 << 32;

/// Advance `cursor` to the next multiple of `size`.
///
/// A subnet must start on a multiple of its own size or downstream routing
/// is invalid: a /23 has to begin on a 512-address boundary.
pub fn align_up(cursor: u64, size: u64) -> u64 {
    if cursor % size == 0 {
        cursor
    } else {
        (cursor / size + 1) * size
    }
}

/// Allocate subnets in order, starting from a dotted-quad base address.
///
/// Each subnet's `subnet_index` records its position in the input slice.
pub fn allocate(base: &str, sizes: &[SubnetSize]) -> Result<Vec<AllocatedSubnet>> {
    if sizes.is_empty() {
        return Err(PlanError::EmptyInput("subnets"));
    }
    let base_addr = parse_addr(base)?;

    let mut cursor = u32::from(base_addr) as u64;
    let mut allocations = Vec::with_capacity(sizes.len());

    for (i, size) in sizes.iter().enumerate() {
        let block = size.subnet_size as u64;
        cursor = align_up(cursor, block);
        if cursor + block > ADDRESS_SPACE_END {
            log::warn!(
                "ran past the top of the address space placing subnet {i} ({block} addresses)"
            );
            return Err(PlanError::InsufficientCapacity { index: i });
        }
        allocations.push(AllocatedSubnet {
            size: *size,
            network: Ipv4::from_int(cursor as u32, size.cidr_prefix),
            subnet_index: i,
            block_index: None,
        });
        cursor += block;
    }

    Ok(allocations)
}
