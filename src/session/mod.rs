pub mod commands;
pub mod state;

#[cfg(test)]
mod tests;

pub use commands::*;
pub use state::*;
