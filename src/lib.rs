#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! View-state engine for the portfolio page: one-shot section reveals, active-section
//! tracking for the navigation bar, and the ambient particle backdrop.
//!
//! Everything outside `wasm` is plain Rust and runs in host tests.

pub mod config;
pub mod contact;
pub mod geometry;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod sections;

// Only compile DOM bindings when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
