//! Terminal rendering of plan results.
//!
//! Presentation only: everything printed here comes straight off the engine's
//! result records.

use crate::models::{AutoFitResult, NetworkPlan};
use colored::Colorize;
use itertools::Itertools;

/// Format a value as a quoted, right-aligned field.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Print a single-range plan as one row per subnet plus a summary line.
pub fn print_plan(plan: &NetworkPlan) {
    log::info!("#Start print_plan() base={}", plan.base);
    println!(r#""req","network","netmask","hosts","devices""#);
    for s in &plan.subnets {
        println!(
            "{req},{network},{netmask},{host_min}-{host_max},{devices} of {usable}",
            req = format_field(s.subnet_index, 5),
            network = format_field(s.network, 20),
            netmask = format_field(s.network.netmask(), 17),
            host_min = s.network.host_min(),
            host_max = s.network.host_max(),
            devices = s.size.planned_devices,
            usable = s.size.usable_hosts,
        );
    }
    let supernet = &plan.supernet;
    println!(
        "# supernet /{prefix}: {used}/{total} addresses, efficiency {eff:.1}%, range {range:.1}%",
        prefix = supernet.cidr_prefix,
        used = supernet.used_size,
        total = supernet.total_size,
        eff = supernet.efficiency,
        range = supernet.range_efficiency,
    );
}

/// Print an auto-fit result: allocations, per-block usage, then diagnostics.
pub fn print_auto_fit(result: &AutoFitResult) {
    let verdict = if result.success {
        "fitted".green()
    } else {
        "incomplete".on_red()
    };
    println!(
        "# auto-fit {verdict}: {placed} placed, {missed} unallocated",
        placed = result.allocations.len(),
        missed = result.unallocated_subnets.len(),
    );

    println!(r#""req","network","block""#);
    for a in &result.allocations {
        let block = a
            .block_index
            .map(|i| result.blocks[i].to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{req},{network},{block}",
            req = format_field(a.subnet_index, 5),
            network = format_field(a.network, 20),
            block = format_field(block, 20),
        );
    }

    for u in &result.block_utilizations {
        println!(
            "# block {block}: {used}/{total} used ({pct:.1}%), {count} subnets",
            block = result.blocks[u.block_index],
            used = u.used_capacity,
            total = u.used_capacity + u.remaining_capacity,
            pct = u.utilization_percent,
            count = u.allocated_subnets,
        );
    }

    if !result.warnings.is_empty() {
        println!(
            "#{}# {}",
            "WARN".yellow(),
            result.warnings.iter().join("; ")
        );
    }
    for e in &result.errors {
        println!("#{}# {e}", "ERROR".on_red());
    }
}
