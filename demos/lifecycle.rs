//! Lifecycle and tracing example for singleton-base.
//!
//! Demonstrates:
//! - Reset and recreation with distinct identities
//! - The tracing callback observing every lifecycle operation
//!
//! Run with: `cargo run --example lifecycle`

use singleton_base::{clear_trace_callback, set_trace_callback, singleton, Singleton};
use std::sync::Arc;

struct Session {
    id: u64,
}

singleton!(Session, u64, |id| Session { id });

fn main() {
    println!("=== singleton-base: Lifecycle & Tracing ===\n");

    // Trace every lifecycle operation to stdout.
    set_trace_callback(|event| println!("   [trace] {event}"));

    println!("1. Creating the Session singleton...");
    let first = Session::construct(1);
    println!("   Session id: {}", first.id);

    println!("\n2. Checking and re-requesting...");
    println!("   has_instance: {}", Session::has_instance());
    let again = Session::get_instance(None).unwrap();
    println!("   Same instance: {}", Arc::ptr_eq(&first, &again));

    println!("\n3. Resetting...");
    Session::reset_instance();
    println!("   has_instance: {}", Session::has_instance());

    println!("\n4. Recreating...");
    let second = Session::construct(2);
    println!("   New session id: {}", second.id);
    println!(
        "   Distinct from the old instance: {}",
        !Arc::ptr_eq(&first, &second)
    );
    println!("   The old Arc is still alive and readable: id {}", first.id);

    clear_trace_callback();

    println!("\n=== Example Complete ===");
}
