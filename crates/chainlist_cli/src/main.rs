//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive the chain end to end: build, print, truncate, audit.
//! - Keep output deterministic for quick local sanity checks.

use chainlist_core::{audit, default_log_level, init_logging, Chain};
use log::{error, info};

fn main() {
    init_logging_from_env();

    // Front insertion reverses, back insertion preserves, the empty chain
    // prints a blank line, truncation keeps the prefix.
    let mut front_built = Chain::new();
    front_built.push_front(3);
    front_built.push_front(2);
    front_built.push_front(1);
    println!("{front_built}");

    let mut back_built = Chain::new();
    back_built.push_back(1);
    back_built.push_back(2);
    back_built.push_back(3);
    println!("{back_built}");

    println!("{}", Chain::new());

    front_built.truncate(1);
    println!("{front_built}");

    report_audit("front_built", &front_built);
    report_audit("back_built", &back_built);

    println!("chainlist_core version={}", chainlist_core::core_version());
}

/// Logging stays off unless the environment asks for it, so the demo
/// output never depends on a writable log directory.
fn init_logging_from_env() {
    let Some(log_dir) = std::env::var_os("CHAINLIST_LOG_DIR") else {
        return;
    };
    let level = std::env::var("CHAINLIST_LOG_LEVEL")
        .unwrap_or_else(|_| default_log_level().to_string());
    if let Err(message) = init_logging(&level, &log_dir.to_string_lossy()) {
        eprintln!("chainlist logging disabled: {message}");
    }
}

fn report_audit(label: &str, chain: &Chain) {
    match audit(chain) {
        Ok(report) => info!(
            "event=chain_audit module=cli status=ok chain={} forward_nodes={} arena_slots={}",
            label, report.forward_nodes, report.arena_slots
        ),
        Err(err) => error!(
            "event=chain_audit module=cli status=error chain={} reason={}",
            label, err
        ),
    }
}
