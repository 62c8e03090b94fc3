pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod session;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
