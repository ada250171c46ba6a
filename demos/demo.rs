//! Fallback chain demo showing happy and unhappy paths.
//!
//! Simulates loading a config value from a primary endpoint, a mirror, and
//! finally a built-in default.
//!
//! Run with: cargo run --example demo

use fallback::{fallback, Chain, ChainOutcome};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
enum ConfigError {
    #[error("endpoint unreachable: {0}")]
    Unreachable(String),
    #[error("payload was not valid JSON")]
    BadPayload,
}

fn fetch_primary() -> Result<String, ConfigError> {
    println!("  [primary] querying https://config.internal ...");
    Err(ConfigError::Unreachable("config.internal".into()))
}

fn fetch_mirror() -> Result<String, ConfigError> {
    println!("  [mirror] querying https://config-mirror.internal ...");
    Err(ConfigError::BadPayload)
}

fn built_in_default() -> Result<String, ConfigError> {
    println!("  [default] using compiled-in value");
    Ok("max_connections = 64".into())
}

fn main() {
    println!("=== fallback! macro: first success wins ===");
    let value = fallback!(fetch_primary, fetch_mirror, built_in_default);
    println!("  result: {:?}\n", value);

    println!("=== Chain: same semantics, with an attempt report ===");
    let outcome = Chain::first(fetch_primary)
        .or_else(fetch_mirror)
        .or_else(built_in_default)
        .run();

    match outcome {
        ChainOutcome::Succeeded { value, report } => {
            println!("  succeeded with: {value:?}");
            for attempt in report.attempts() {
                println!(
                    "  attempt {}: {:?} ({:?} ms)",
                    attempt.index,
                    attempt.status,
                    attempt.duration_ms()
                );
            }
        }
        ChainOutcome::Exhausted { error, report } => {
            println!(
                "  all {} attempts failed, last error: {error}",
                report.attempt_count()
            );
        }
    }

    println!("\n=== Exhaustion: the last failure surfaces ===");
    let failed = Chain::first(fetch_primary).or_else(fetch_mirror).run();
    if let Some(error) = failed.error() {
        println!("  last error: {error}");
    }
}
