//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `voteboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("voteboard_core ping={}", voteboard_core::ping());
    println!("voteboard_core version={}", voteboard_core::core_version());
    println!(
        "voteboard_core schema_version={}",
        voteboard_core::db::migrations::latest_version()
    );
}
