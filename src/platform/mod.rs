//! Platform abstraction layer
//!
//! The browser host lives in `web`: canvas setup, keyboard events and the
//! refresh-driven loop. Native builds run headless from `main.rs`.

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Seed for a run: the configured one, or a fresh random value
pub fn run_seed(configured: Option<u64>) -> u64 {
    configured.unwrap_or_else(rand::random)
}
