//! Platform bindings.
//!
//! The core is platform-neutral; this module supplies the browser pieces
//! (storage backend, page detection, DOM painter and the JS facade) when
//! compiled for `wasm32`.

#[cfg(target_arch = "wasm32")]
pub mod web;
