//! Supernet aggregation and efficiency metrics.
//!
//! Computes the smallest power-of-two block enclosing a set of sized subnets
//! and two independent efficiency ratios: fit within that supernet, and
//! packing density across the actually allocated span.

use crate::error::{PlanError, Result};
use crate::models::{AllocatedSubnet, Ipv4, SubnetSize, SupernetSummary, VlanSubnet, MAX_LENGTH};

/// A subnet the aggregator can summarize: sized, and possibly placed.
pub trait SizedSubnet {
    /// Total addresses the subnet occupies.
    fn subnet_size(&self) -> u32;

    /// Assigned network address, if an allocator has placed the subnet.
    fn network(&self) -> Option<Ipv4> {
        None
    }
}

impl SizedSubnet for SubnetSize {
    fn subnet_size(&self) -> u32 {
        self.subnet_size
    }
}

impl SizedSubnet for VlanSubnet {
    fn subnet_size(&self) -> u32 {
        self.size.subnet_size
    }
}

impl SizedSubnet for AllocatedSubnet {
    fn subnet_size(&self) -> u32 {
        self.size.subnet_size
    }

    fn network(&self) -> Option<Ipv4> {
        Some(self.network)
    }
}

/// Summarize a non-empty set of subnets into the smallest enclosing supernet.
///
/// `range_efficiency` is only computable once every subnet carries a network
/// address; until then it reports 100.0 so a caller probing "has this been
/// placed yet" gets a usable number instead of a NaN.
pub fn summarize<S: SizedSubnet>(subnets: &[S]) -> Result<SupernetSummary> {
    if subnets.is_empty() {
        return Err(PlanError::EmptyInput("subnets"));
    }

    let used_size: u64 = subnets.iter().map(|s| s.subnet_size() as u64).sum();
    let total_size = used_size.next_power_of_two();
    let cidr_prefix = (MAX_LENGTH as u32).saturating_sub(total_size.trailing_zeros()) as u8;
    let efficiency = used_size as f64 / total_size as f64 * 100.0;

    Ok(SupernetSummary {
        cidr_prefix,
        total_size,
        used_size,
        efficiency,
        range_efficiency: range_efficiency(subnets, used_size),
    })
}

/// Packing density across the span of allocated addresses.
///
/// Min start and max end are taken by value, never by array position, so the
/// metric is invariant under permutation of the input.
fn range_efficiency<S: SizedSubnet>(subnets: &[S], used_size: u64) -> f64 {
    let spans: Option<Vec<(u64, u64)>> = subnets
        .iter()
        .map(|s| {
            s.network().map(|net| {
                let start = u32::from(net.addr) as u64;
                (start, start + s.subnet_size() as u64 - 1)
            })
        })
        .collect();

    match spans {
        Some(spans) => {
            let (min_start, max_end) = spans
                .iter()
                .fold((u64::MAX, 0u64), |(lo, hi), &(start, end)| {
                    (lo.min(start), hi.max(end))
                });
            used_size as f64 / (max_end - min_start + 1) as f64 * 100.0
        }
        None => 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(subnet_size: u32) -> SubnetSize {
        SubnetSize {
            expected_devices: 0,
            planned_devices: 0,
            cidr_prefix: 32 - subnet_size.trailing_zeros() as u8,
            subnet_size,
            usable_hosts: subnet_size - 2,
        }
    }

    fn placed(subnet_size: u32, start: u32) -> AllocatedSubnet {
        AllocatedSubnet {
            size: sized(subnet_size),
            network: Ipv4::from_int(start, 32 - subnet_size.trailing_zeros() as u8),
            subnet_index: 0,
            block_index: None,
        }
    }

    #[test]
    fn test_empty_input() {
        let none: Vec<SubnetSize> = vec![];
        assert_eq!(summarize(&none).unwrap_err(), PlanError::EmptyInput("subnets"));
    }

    #[test]
    fn test_supernet_256_128_64() {
        let summary = summarize(&[sized(256), sized(128), sized(64)]).unwrap();
        assert_eq!(summary.used_size, 448);
        assert_eq!(summary.total_size, 512);
        assert_eq!(summary.cidr_prefix, 23);
        assert!((summary.efficiency - 87.5).abs() < 1e-9);
        // nothing placed yet
        assert_eq!(summary.range_efficiency, 100.0);
    }

    #[test]
    fn test_supernet_two_subnets_exact_quarters() {
        let summary = summarize(&[sized(256), sized(128)]).unwrap();
        assert_eq!(summary.total_size, 512);
        assert_eq!(summary.cidr_prefix, 23);
        assert!((summary.efficiency - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_supernet_exact_power_of_two() {
        let summary = summarize(&[sized(256), sized(256)]).unwrap();
        assert_eq!(summary.total_size, 512);
        assert!((summary.efficiency - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_range_efficiency_tight_packing() {
        // 256 at .0, 128 at .0+256, 64 at .0+384: zero padding in the span
        let base = u32::from(std::net::Ipv4Addr::new(10, 1, 240, 0));
        let subnets = [
            placed(256, base),
            placed(128, base + 256),
            placed(64, base + 384),
        ];
        let summary = summarize(&subnets).unwrap();
        assert!((summary.range_efficiency - 100.0).abs() < 1e-9);
        // supernet efficiency is lower, the power-of-two block is bigger
        assert!(summary.efficiency < summary.range_efficiency);
    }

    #[test]
    fn test_range_efficiency_order_independent() {
        let base = u32::from(std::net::Ipv4Addr::new(10, 1, 240, 0));
        let a = placed(64, base + 384);
        let b = placed(256, base);
        let c = placed(128, base + 256);

        let forward = summarize(&[b, c, a]).unwrap();
        let shuffled = summarize(&[a, c, b]).unwrap();
        assert_eq!(forward.range_efficiency, shuffled.range_efficiency);
        assert_eq!(forward.cidr_prefix, shuffled.cidr_prefix);
    }

    #[test]
    fn test_range_efficiency_with_padding() {
        // 64 placed, then a gap of 64, then 128: span 256 holding 192
        let base = 0x0A010000u32;
        let subnets = [placed(64, base), placed(128, base + 128)];
        let summary = summarize(&subnets).unwrap();
        assert!((summary.range_efficiency - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_idempotent_on_placed_output() {
        let base = u32::from(std::net::Ipv4Addr::new(172, 16, 0, 0));
        let subnets = [placed(512, base), placed(256, base + 512)];
        let first = summarize(&subnets).unwrap();
        let second = summarize(&subnets).unwrap();
        assert_eq!(first.cidr_prefix, second.cidr_prefix);
        assert_eq!(first.efficiency, second.efficiency);
        assert_eq!(first.range_efficiency, second.range_efficiency);
    }
}
