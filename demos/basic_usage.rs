//! Basic usage example for singleton-base.
//!
//! Demonstrates:
//! - Making a type a singleton with the `singleton!` macro
//! - Constructing through `construct()` (returns `Arc<T>`)
//! - Accessing through `get_instance()` with and without creation permission
//! - Checking slot state with `has_instance()`
//!
//! Run with: `cargo run --example basic_usage`

use singleton_base::{singleton, Singleton};
use std::sync::Arc;

// Custom struct to demonstrate constructor arguments
#[derive(Debug)]
struct AppConfig {
    name: String,
    port: u16,
    debug_mode: bool,
}

singleton!(AppConfig, (String, u16), |(name, port)| AppConfig {
    name,
    port,
    debug_mode: false,
});

// Argument-less singleton backed by Default
#[derive(Debug, Default)]
struct Metrics {
    requests: u64,
}

singleton!(Metrics);

fn main() {
    println!("=== singleton-base: Basic Usage ===\n");

    // -------------------------------------------------------------------------
    // 1. Access before creation fails
    // -------------------------------------------------------------------------
    println!("1. Accessing before creation...");

    match AppConfig::get_instance(None) {
        Ok(cfg) => println!("   Unexpected: {:?}", cfg),
        Err(e) => println!("   Error (expected): {}", e),
    }

    // -------------------------------------------------------------------------
    // 2. First construction populates the slot
    // -------------------------------------------------------------------------
    println!("\n2. Constructing the AppConfig singleton...");

    let config = AppConfig::construct(("MyApp".to_string(), 8080));
    println!("   Constructed: {:?}", *config);

    // -------------------------------------------------------------------------
    // 3. Later arguments are silently discarded
    // -------------------------------------------------------------------------
    println!("\n3. Constructing again with different arguments...");

    let same = AppConfig::construct(("Ignored".to_string(), 9999));
    println!("   Same instance: {}", Arc::ptr_eq(&config, &same));
    println!("   Still: {} on port {}", same.name, same.port);
    println!("   debug_mode: {}", same.debug_mode);

    // -------------------------------------------------------------------------
    // 4. Checking slot state with has_instance()
    // -------------------------------------------------------------------------
    println!("\n4. Checking slot states...");

    println!("   AppConfig::has_instance() = {}", AppConfig::has_instance());
    println!("   Metrics::has_instance()   = {}", Metrics::has_instance());

    // -------------------------------------------------------------------------
    // 5. Default-backed singleton
    // -------------------------------------------------------------------------
    println!("\n5. Creating the Metrics singleton via its accessor...");

    let metrics = Metrics::get_instance(Some(())).unwrap();
    println!("   Metrics: {} requests", metrics.requests);

    // -------------------------------------------------------------------------
    // Summary
    // -------------------------------------------------------------------------
    println!("\n=== Example Complete ===");
    println!("Two singletons live in the registry (AppConfig, Metrics), each in its own slot.");
}
