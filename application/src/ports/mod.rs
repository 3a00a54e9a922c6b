//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that presentation adapters must implement.

pub mod player_input;
pub mod progress;
