//! Platform abstraction layer
//!
//! The simulation never touches the host. Adapters here translate host input
//! into [`crate::sim::InputState`] and hand snapshots back out.

#[cfg(target_arch = "wasm32")]
pub mod web;
