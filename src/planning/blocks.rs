//! Parsing and validation of address block inventories.
//!
//! Input is free-form text, one CIDR block per line. Every line is validated
//! individually and all problems are collected before the pairwise overlap
//! check, so the engineer sees the full list of mistakes in one pass.

use crate::error::{PlanError, Result};
use crate::models::{network_addr, AddressBlock, Ipv4};
use itertools::Itertools;

/// Blocks must be at least a /30 and no wider than a /8.
pub const MIN_BLOCK_PREFIX: u8 = 8;
pub const MAX_BLOCK_PREFIX: u8 = 30;

/// The outcome of parsing a block inventory.
///
/// On failure `blocks` is empty; a partially validated list is never
/// returned.
#[derive(Debug, Clone)]
pub struct BlockParseOutcome {
    /// True when every line validated and no blocks overlap.
    pub valid: bool,
    /// Accepted blocks, sorted by capacity descending (input order on ties).
    pub blocks: Vec<AddressBlock>,
    /// Every validation and overlap error found.
    pub errors: Vec<PlanError>,
}

/// Validate a single CIDR line into an [`AddressBlock`].
pub fn parse_block_line(line: &str) -> Result<AddressBlock> {
    let network = Ipv4::new(line)?;
    if network.mask < MIN_BLOCK_PREFIX || network.mask > MAX_BLOCK_PREFIX {
        return Err(PlanError::Format(format!(
            "prefix /{} out of range /{MIN_BLOCK_PREFIX}-/{MAX_BLOCK_PREFIX} in {line}",
            network.mask,
            line = line.trim()
        )));
    }
    // The address has to be the masked network address; a mismatch is a
    // design mistake we report with the corrected value, never auto-fix.
    let masked = network_addr(network.addr, network.mask)?;
    if masked != network.addr {
        return Err(PlanError::Boundary {
            given: network.to_string(),
            corrected: Ipv4 {
                addr: masked,
                mask: network.mask,
            }
            .to_string(),
        });
    }
    Ok(AddressBlock::from_network(network))
}

/// Parse a newline-delimited block inventory.
///
/// Blank lines are ignored. All per-line errors are collected; overlap
/// detection runs across every block that parsed, full or partial intersection
/// both count. On success blocks come back sorted by `total_capacity`
/// descending with input order breaking ties.
pub fn parse_blocks(text: &str) -> BlockParseOutcome {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return BlockParseOutcome {
            valid: false,
            blocks: vec![],
            errors: vec![PlanError::EmptyInput("blocks")],
        };
    }

    let mut blocks = Vec::with_capacity(lines.len());
    let mut errors = Vec::new();
    for line in &lines {
        match parse_block_line(line) {
            Ok(block) => blocks.push(block),
            Err(e) => errors.push(e),
        }
    }

    // Pairwise intersection over inclusive integer ranges. Block counts are
    // small, O(n^2) is fine.
    for (a, b) in blocks.iter().tuple_combinations() {
        if a.start <= b.end && b.start <= a.end {
            errors.push(PlanError::Overlap {
                first: a.to_string(),
                second: b.to_string(),
            });
        }
    }

    if !errors.is_empty() {
        for e in &errors {
            log::warn!("block inventory rejected: {e}");
        }
        return BlockParseOutcome {
            valid: false,
            blocks: vec![],
            errors,
        };
    }

    // Stable sort keeps input order for equal capacities.
    blocks.sort_by(|a, b| b.total_capacity.cmp(&a.total_capacity));

    BlockParseOutcome {
        valid: true,
        blocks,
        errors,
    }
}
