//! Capacity planning: device counts to CIDR sizes.
//!
//! Turns an expected device count and growth margin into the smallest
//! power-of-two subnet that holds the planned devices plus the network and
//! broadcast addresses.

use crate::models::{SubnetSize, MAX_LENGTH};

/// Smallest practically usable subnet is a /30 (2 host bits).
const MIN_HOST_BITS: u8 = 2;
/// Host-bit search stops at 30; anything larger is a caller bounds error.
const MAX_HOST_BITS: u8 = 30;

/// Apply a growth margin to an expected device count, rounding up.
///
/// `growth_percent` is validated upstream to 0-300; no clamping happens here.
///
/// # Examples
/// ```
/// use subnet_planner::planning::planned_devices;
/// assert_eq!(planned_devices(25, 100), 50);
/// assert_eq!(planned_devices(1, 100), 2);
/// assert_eq!(planned_devices(3, 50), 5); // 4.5 rounds up
/// ```
pub fn planned_devices(expected_devices: u32, growth_percent: u32) -> u32 {
    let scaled = expected_devices as u64 * (100 + growth_percent as u64);
    scaled.div_ceil(100) as u32
}

/// Smallest number of host bits `b` such that `2^b >= required_hosts + 2`.
///
/// The two reserved addresses are the network and broadcast. The search is
/// capped at 30 bits; demands beyond that are surfaced by the caller's own
/// bounds checks.
pub fn host_bits(required_hosts: u32) -> u8 {
    let needed = required_hosts as u64 + 2;
    let mut bits = MIN_HOST_BITS;
    while bits < MAX_HOST_BITS && (1u64 << bits) < needed {
        bits += 1;
    }
    bits
}

/// Size a subnet for an expected device count and growth margin.
pub fn size_subnet(expected_devices: u32, growth_percent: u32) -> SubnetSize {
    let planned = planned_devices(expected_devices, growth_percent);
    let bits = host_bits(planned);
    let subnet_size = 1u32 << bits;
    log::debug!(
        "sized subnet: {expected_devices} devices +{growth_percent}% -> {planned} planned, /{prefix} ({subnet_size} addresses)",
        prefix = MAX_LENGTH - bits
    );
    SubnetSize {
        expected_devices,
        planned_devices: planned,
        cidr_prefix: MAX_LENGTH - bits,
        subnet_size,
        usable_hosts: subnet_size - 2,
    }
}
