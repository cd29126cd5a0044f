//! Address-planning logic.
//!
//! This module contains the engine's business logic:
//! - [`capacity`] - device counts to CIDR sizes
//! - [`supernet`] - aggregation and efficiency metrics
//! - [`sequential`] - cursor-based allocation from one base address
//! - [`blocks`] - block inventory parsing and validation
//! - [`autofit`] - best-fit packing across multiple blocks

pub mod autofit;
pub mod blocks;
pub mod capacity;
pub mod sequential;
pub mod supernet;

// Re-export public functions
pub use autofit::auto_fit;
pub use blocks::{parse_block_line, parse_blocks, BlockParseOutcome};
pub use capacity::{host_bits, planned_devices, size_subnet};
pub use sequential::{align_up, allocate};
pub use supernet::{summarize, SizedSubnet};
